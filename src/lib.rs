//! CompactList - growable, indexable sequence containers with pluggable storage
//!
//! Two storage strategies implement one contract:
//! - a generic strategy holding any element kind behind boxed [`Value`] slots
//! - a packed strategy holding `Int` elements as contiguous unboxed words,
//!   synthesized once per process on first use and cached for every later
//!   creation
//!
//! # Quick Start
//!
//! ```
//! use compactlist::{create, CompactList, ElementKind, Value};
//!
//! # fn main() -> compactlist::Result<()> {
//! // The Int kind selects the packed, specialized strategy
//! let mut list = create(ElementKind::Int, 1)?;
//! list.push(Value::Int(10))?;
//! list.push(Value::Int(20))?;
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.get(1)?, Value::Int(20));
//!
//! // Any other kind selects the generic boxed strategy
//! let mut names = create(ElementKind::String, 16)?;
//! names.push(Value::from("a"))?;
//! assert_eq!(names.get(0)?, Value::from("a"));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! All creation goes through [`create`], which selects a strategy purely
//! from the requested [`ElementKind`]. The specialized implementation is
//! built by the synthesizer in `compactlist-storage` exactly once, safely
//! under concurrent first use. Containers themselves are single-writer and
//! carry no locking.

// Re-export the public API from the member crates
pub use compactlist_core::{
    next_capacity, CompactList, ElementKind, Error, Result, SynthesisError, Value, MAX_CAPACITY,
};
pub use compactlist_storage::{create, GenericList, PackedIntList};
