//! Element kind descriptors
//!
//! An `ElementKind` names the kind of element a container is created for.
//! It drives strategy selection: exactly one kind (`Int`) has a packed,
//! unboxed storage strategy; every other kind uses the generic boxed one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime descriptor of the element kind a container stores
///
/// Passed to the factory at creation time. Selection is a pure function of
/// this value: `Int` yields the specialized packed implementation, anything
/// else yields the generic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Boolean elements
    Bool,
    /// 64-bit signed integer elements (the one specialized kind)
    Int,
    /// 64-bit floating point elements
    Float,
    /// UTF-8 string elements
    String,
    /// Raw byte-buffer elements
    Bytes,
}

impl ElementKind {
    /// Kind name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Bool => "Bool",
            ElementKind::Int => "Int",
            ElementKind::Float => "Float",
            ElementKind::String => "String",
            ElementKind::Bytes => "Bytes",
        }
    }

    /// Whether a packed storage strategy exists for this kind
    ///
    /// Only `Int` is specialized; the synthesizer produces exactly one
    /// implementation per process for it.
    pub fn is_specializable(&self) -> bool {
        matches!(self, ElementKind::Int)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
