//! Error taxonomy for the crate.
//!
//! Resolution itself never errors: a strategy that cannot supply a value
//! declines by returning `None`, and the chain returns a possibly
//! incomplete map. The types here cover the boundaries around the chain:
//! signature construction, registry lookups, instantiation, and the final
//! invocation step.

use thiserror::Error;

/// Signature builder misuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("duplicate parameter name '{0}'")]
    DuplicateParameter(String),

    #[error("parameter '{0}' declared after a variadic parameter")]
    ParameterAfterVariadic(String),
}

/// Outcome of a failed [`Registry`](crate::registry::Registry) lookup.
///
/// Resolvers always convert this to a decline; it never propagates out of
/// a resolution pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no entry registered under '{0}'")]
    NotFound(String),
}

/// Outcome of a failed [`TypeCatalog`](crate::catalog::TypeCatalog)
/// construction attempt. Also converted to a decline by the type resolver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstantiationError {
    #[error("no constructor known for type '{0}'")]
    UnknownType(String),

    #[error("constructor for type '{0}' failed: {1}")]
    Constructor(String, String),
}

/// Errors surfaced by the [`Invoker`](crate::invoker::Invoker) facade.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvokerError {
    /// A non-variadic, non-optional parameter was left unresolved.
    #[error(
        "unable to invoke the callable because no value was given for parameter {} (${name})",
        .position + 1
    )]
    NotEnoughArguments { position: usize, name: String },

    /// The callable itself reported a failure.
    #[error("callable '{0}' failed: {1}")]
    Invocation(String, String),
}
