//! Resolution strategies.
//!
//! Each strategy implements the single-method [`ValueResolver`] contract:
//! supply a value for one parameter, or decline by returning `None`. A
//! decline is never an error; it just leaves the parameter for the next
//! strategy in the chain. Consumers can implement the trait to add their
//! own strategies.

pub mod default_value;
pub mod named;
pub mod positional;
pub mod type_hint;

pub use default_value::DefaultValueResolver;
pub use named::NamedValueResolver;
pub use positional::PositionalValueResolver;
pub use type_hint::TypeHintValueResolver;

use crate::catalog::TypeCatalog;
use crate::context::ProvidedArguments;
use crate::registry::Registry;
use crate::signature::Parameter;
use crate::values::Value;
use std::fmt;
use std::sync::Arc;

/// A single resolution strategy.
///
/// Strategies may claim entries from the provided bag (claimed entries are
/// removed and cannot be reused for another parameter). Returning `None`
/// declines the parameter.
pub trait ValueResolver: fmt::Debug + Send + Sync {
    fn resolve(&self, parameter: &Parameter, provided: &mut ProvidedArguments) -> Option<Value>;
}

/// The canonical strategy list: named values first, then type-directed
/// lookup, then signature defaults.
///
/// An explicit named (or promoted positional) value always outranks
/// type-directed injection, which outranks falling back to a parameter's
/// default. Position-keyed entries are reconciled with parameter names
/// before any of these run; see
/// [`ResolutionChain::resolve`](crate::chain::ResolutionChain::resolve).
pub fn default_resolvers(
    registry: Option<Arc<dyn Registry>>,
    catalog: Option<Arc<dyn TypeCatalog>>,
) -> Vec<Box<dyn ValueResolver>> {
    vec![
        Box::new(NamedValueResolver::new(registry.clone())),
        Box::new(TypeHintValueResolver::new(registry, catalog)),
        Box::new(DefaultValueResolver),
    ]
}
