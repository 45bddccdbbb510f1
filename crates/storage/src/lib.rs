//! Storage strategies and strategy selection for CompactList
//!
//! Two implementations of the container contract live here:
//! - [`GenericList`]: boxed slot-array storage, works for any element kind
//! - [`PackedIntList`]: packed `i64` storage with no per-element indirection
//!
//! plus the machinery that ties them together:
//! - [`synth`]: synthesizes the packed implementation at most once per
//!   process and caches the resulting handle
//! - [`create`]: the factory that picks a strategy from an [`ElementKind`]
//!
//! [`ElementKind`]: compactlist_core::ElementKind

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod factory;
pub mod generic;
pub mod packed;
pub mod synth;

pub use factory::create;
pub use generic::GenericList;
pub use packed::PackedIntList;
pub use synth::{
    Blueprint, CodeSynthesizer, MonomorphicSynthesizer, SpecializedHandle, Synthesizer,
};
