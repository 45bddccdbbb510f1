//! Specialized-strategy synthesizer
//!
//! Produces the packed implementation of the container contract at most
//! once per process and caches the outcome. The first caller of [`obtain`]
//! runs the code-synthesis collaborator; every other caller, concurrent
//! with the first or arriving later, observes the published result and
//! never triggers a second synthesis. A failed synthesis is published the
//! same way: fatal for the specialized path, reported to every waiter and
//! every future caller, never retried.
//!
//! The cache is a write-once cell (`once_cell::sync::OnceCell`): a
//! lock-free check serves the built case, `get_or_init` serializes at most
//! one realization behind its lock with a re-check after acquisition, and
//! the cell's release/acquire publication makes the finished handle visible
//! to every thread that observes it as filled.

pub mod blueprint;

pub use blueprint::{Blueprint, FieldSpec, FieldType, MethodSpec, Op, SlotType};

use compactlist_core::{CompactList, Result, SynthesisError};
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::packed::PackedIntList;

/// Outcome of the single synthesis attempt, as published in the cache
type SynthOutcome = std::result::Result<SpecializedHandle, SynthesisError>;

/// Code-synthesis collaborator
///
/// Accepts a structural description and returns an instantiable handle.
/// The core fixes only this contract, not the realization mechanism.
pub trait CodeSynthesizer {
    /// Realize `blueprint` as an instantiable implementation
    ///
    /// # Errors
    ///
    /// `SynthesisError` when the description is structurally unrealizable.
    fn realize(&self, blueprint: &Blueprint) -> SynthOutcome;
}

/// Handle to the synthesized implementation
///
/// A `Copy` descriptor: the synthesized type's name plus its constructor.
/// Instantiation is a direct, statically-typed call, so a construction
/// failure reaches the caller as-is with nothing to unwrap.
#[derive(Debug, Clone, Copy)]
pub struct SpecializedHandle {
    type_name: &'static str,
    ctor: fn(usize) -> Result<Box<dyn CompactList>>,
}

impl SpecializedHandle {
    /// Wrap a constructor in a handle
    pub fn new(type_name: &'static str, ctor: fn(usize) -> Result<Box<dyn CompactList>>) -> Self {
        SpecializedHandle { type_name, ctor }
    }

    /// Name of the synthesized type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Build a live container with `initial_capacity`
    ///
    /// # Errors
    ///
    /// Propagates the constructor's own failure unchanged
    /// (`InvalidCapacity` for a zero capacity).
    pub fn instantiate(&self, initial_capacity: usize) -> Result<Box<dyn CompactList>> {
        (self.ctor)(initial_capacity)
    }
}

/// Production collaborator: realizes the blueprint as the build-time
/// monomorphized [`PackedIntList`]
///
/// The description is validated structurally first; a malformed blueprint
/// is a synthesis failure, the same condition an unrealizable description
/// would raise in a runtime-codegen collaborator.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonomorphicSynthesizer;

impl MonomorphicSynthesizer {
    fn validate(blueprint: &Blueprint) -> std::result::Result<(), SynthesisError> {
        if !blueprint.element.is_specializable() {
            return Err(SynthesisError::new(format!(
                "no packed representation for element kind {}",
                blueprint.element
            )));
        }
        match blueprint.field("buf") {
            Some(field) if field.ty == FieldType::Array(SlotType::Int64) => {}
            Some(field) => {
                return Err(SynthesisError::new(format!(
                    "field buf has shape {:?}, expected Int64 array",
                    field.ty
                )))
            }
            None => return Err(SynthesisError::new("missing field buf")),
        }
        match blueprint.field("len") {
            Some(field) if field.ty == FieldType::Scalar(SlotType::Index) => {}
            Some(field) => {
                return Err(SynthesisError::new(format!(
                    "field len has shape {:?}, expected Index scalar",
                    field.ty
                )))
            }
            None => return Err(SynthesisError::new("missing field len")),
        }
        for name in ["new", "len", "push", "get", "grow"] {
            let method = blueprint
                .method(name)
                .ok_or_else(|| SynthesisError::new(format!("missing method {name}")))?;
            if method.body.is_empty() {
                return Err(SynthesisError::new(format!("method {name} has no body")));
            }
            for op in &method.body {
                let target = match op {
                    Op::LoadField(field) | Op::StoreField(field) => *field,
                    _ => continue,
                };
                if blueprint.field(target).is_none() {
                    return Err(SynthesisError::new(format!(
                        "method {name} references undeclared field {target}"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl CodeSynthesizer for MonomorphicSynthesizer {
    fn realize(&self, blueprint: &Blueprint) -> SynthOutcome {
        Self::validate(blueprint)?;
        Ok(SpecializedHandle::new(blueprint.type_name, |capacity| {
            Ok(Box::new(PackedIntList::with_capacity(capacity)?))
        }))
    }
}

/// Lazily-synthesized specialized implementation
///
/// Owns the collaborator and the write-once outcome cache. The process-wide
/// instance behind [`obtain`] is the only one the factory uses; standalone
/// instances exist for tests that need a fresh cache.
pub struct Synthesizer<S: CodeSynthesizer> {
    collaborator: S,
    cache: OnceCell<SynthOutcome>,
}

impl<S: CodeSynthesizer> Synthesizer<S> {
    /// Create an empty ("not yet built") synthesizer around a collaborator
    pub const fn new(collaborator: S) -> Self {
        Synthesizer {
            collaborator,
            cache: OnceCell::new(),
        }
    }

    /// Get the specialized handle, synthesizing on first use
    ///
    /// Idempotent: at most one realization ever runs, and every caller
    /// observes the same outcome. Callers that arrive during the synthesis
    /// window block until it completes; everyone else takes the lock-free
    /// path.
    ///
    /// # Errors
    ///
    /// The published `SynthesisError` if realization failed. The same error
    /// is returned to every future caller; the attempt is never retried.
    pub fn obtain(&self) -> Result<SpecializedHandle> {
        let outcome = self.cache.get_or_init(|| {
            debug!("synthesizing packed implementation");
            self.collaborator.realize(&Blueprint::packed_int())
        });
        outcome.clone().map_err(Into::into)
    }

    /// Whether the one synthesis attempt has already run (lock-free probe)
    pub fn is_built(&self) -> bool {
        self.cache.get().is_some()
    }
}

/// Process-wide synthesizer backing the factory
static GLOBAL: Synthesizer<MonomorphicSynthesizer> = Synthesizer::new(MonomorphicSynthesizer);

/// Get the process-wide specialized handle, synthesizing on first use
///
/// # Errors
///
/// See [`Synthesizer::obtain`].
pub fn obtain() -> Result<SpecializedHandle> {
    GLOBAL.obtain()
}
