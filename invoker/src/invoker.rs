//! Invocation facade.
//!
//! Sequences "resolve arguments → check required parameters → invoke".
//! All of the design weight lives in [`ResolutionChain`]; this layer only
//! turns an incomplete resolution into a failure and flattens the result
//! map into the ordered argument list the callable expects.

use crate::catalog::TypeCatalog;
use crate::chain::{ResolutionChain, ResolvedArguments};
use crate::context::ProvidedArguments;
use crate::error::InvokerError;
use crate::registry::Registry;
use crate::signature::Signature;
use crate::values::Value;
use std::fmt;
use std::sync::Arc;

type CallableFn = Arc<dyn Fn(Vec<Value>) -> Result<Value, InvokerError> + Send + Sync>;

/// A callable: a signature paired with the function to run.
///
/// Locating callables from strings or other loose handles is a concern of
/// the embedding application, not of this crate.
#[derive(Clone)]
pub struct Callable {
    name: String,
    signature: Signature,
    func: CallableFn,
}

impl Callable {
    pub fn new(
        name: impl Into<String>,
        signature: Signature,
        func: impl Fn(Vec<Value>) -> Result<Value, InvokerError> + Send + Sync + 'static,
    ) -> Self {
        Callable {
            name: name.into(),
            signature,
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Resolves a callable's arguments and invokes it.
#[derive(Debug)]
pub struct Invoker {
    chain: ResolutionChain,
}

impl Invoker {
    pub fn new(
        registry: Option<Arc<dyn Registry>>,
        catalog: Option<Arc<dyn TypeCatalog>>,
    ) -> Self {
        Invoker {
            chain: ResolutionChain::new(registry, catalog),
        }
    }

    pub fn with_chain(chain: ResolutionChain) -> Self {
        Invoker { chain }
    }

    pub fn chain(&self) -> &ResolutionChain {
        &self.chain
    }

    /// Mutable access for appending/prepending strategies.
    pub fn chain_mut(&mut self) -> &mut ResolutionChain {
        &mut self.chain
    }

    /// Resolves arguments for `callable` from `provided` and invokes it.
    ///
    /// Fails with [`InvokerError::NotEnoughArguments`] when a non-variadic,
    /// non-optional parameter was left unresolved.
    pub fn call(
        &self,
        callable: &Callable,
        provided: ProvidedArguments,
    ) -> Result<Value, InvokerError> {
        let signature = callable.signature();
        let resolved = self.chain.resolve(signature, provided);

        for parameter in signature.parameters() {
            if resolved.contains_key(&parameter.position()) {
                continue;
            }
            if parameter.is_variadic() || parameter.is_optional() {
                continue;
            }
            return Err(InvokerError::NotEnoughArguments {
                position: parameter.position(),
                name: parameter.name().to_string(),
            });
        }

        let args = Self::ordered_args(signature, resolved)?;
        log::debug!("invoking '{}' with {} argument(s)", callable.name, args.len());
        (callable.func)(args)
    }

    /// Flattens the result map into the argument list, in ascending
    /// position order.
    ///
    /// Trailing unresolved optionals are omitted; an unresolved parameter
    /// followed by a resolved one would leave a hole in the list, so it is
    /// reported as missing. A trailing variadic resolved to a vector is
    /// splatted into the tail.
    fn ordered_args(
        signature: &Signature,
        mut resolved: ResolvedArguments,
    ) -> Result<Vec<Value>, InvokerError> {
        let mut args = Vec::with_capacity(resolved.len());
        for parameter in signature.parameters() {
            let value = match resolved.remove(&parameter.position()) {
                Some(value) => value,
                None if resolved.is_empty() => break,
                None => {
                    return Err(InvokerError::NotEnoughArguments {
                        position: parameter.position(),
                        name: parameter.name().to_string(),
                    });
                }
            };
            if parameter.is_variadic() {
                match value {
                    Value::Vector(items) => args.extend(items),
                    other => args.push(other),
                }
            } else {
                args.push(value);
            }
        }
        Ok(args)
    }
}
