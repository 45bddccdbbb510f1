//! Core types and traits for CompactList
//!
//! This crate defines the foundational pieces shared by every storage strategy:
//! - ElementKind: runtime descriptor of what a container stores
//! - Value: uniform boxed element representation at the contract boundary
//! - Error: failure taxonomy for the whole system
//! - limits: capacity ceiling and the shared doubling-with-saturation growth policy
//! - CompactList: the contract every storage strategy implements

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod error;
pub mod kind;
pub mod limits;
pub mod traits;
pub mod value;

// Re-export commonly used types and traits
pub use error::{Error, Result, SynthesisError};
pub use kind::ElementKind;
pub use limits::{next_capacity, MAX_CAPACITY};
pub use traits::CompactList;
pub use value::Value;
