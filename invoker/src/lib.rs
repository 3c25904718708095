//! Argument resolution for dynamically described callables.
//!
//! Given a [`Signature`] describing a callable's formal parameters and a
//! [`ProvidedArguments`] bag of caller-supplied values, a
//! [`ResolutionChain`] runs an ordered list of [`ValueResolver`] strategies
//! to decide which value (if any) each parameter receives. The chain never
//! errors: it returns a position-indexed map of whatever it could resolve,
//! and the [`Invoker`] facade turns missing required parameters into a
//! failure before performing the call.
//!
//! The canonical strategy order is: caller-supplied named values (with
//! position-keyed entries promoted onto parameter names up front), then
//! type-directed lookup through an optional [`Registry`] and
//! [`TypeCatalog`], then signature defaults. The first strategy to claim a
//! parameter wins; later strategies never overwrite it. Consumers can add
//! their own strategies with [`ResolutionChain::append_resolver`] and
//! [`ResolutionChain::prepend_resolver`].

pub mod catalog;
pub mod chain;
pub mod context;
pub mod error;
pub mod invoker;
pub mod registry;
pub mod resolver;
pub mod signature;
pub mod values;

pub use catalog::{ConstructorCatalog, TypeCatalog};
pub use chain::{ResolutionChain, ResolvedArguments};
pub use context::ProvidedArguments;
pub use error::{InstantiationError, InvokerError, RegistryError, SignatureError};
pub use invoker::{Callable, Invoker};
pub use registry::Registry;
pub use resolver::{
    default_resolvers, DefaultValueResolver, NamedValueResolver, PositionalValueResolver,
    TypeHintValueResolver, ValueResolver,
};
pub use signature::{
    DefaultValue, Parameter, PrimitiveType, Signature, SignatureBuilder, TypeHint,
};
pub use values::{Instance, Value};
