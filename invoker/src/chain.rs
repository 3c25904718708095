//! The resolution chain.

use crate::catalog::TypeCatalog;
use crate::context::ProvidedArguments;
use crate::registry::Registry;
use crate::resolver::{default_resolvers, ValueResolver};
use crate::signature::Signature;
use crate::values::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Position-indexed resolution result.
///
/// Keys are a subset of `0..n-1`; a key is present iff the parameter was
/// resolved (explicit-nil defaults included). BTreeMap iteration yields
/// ascending positions, which is what an invoker needs to build a
/// contiguous argument list.
pub type ResolvedArguments = BTreeMap<usize, Value>;

/// An ordered list of [`ValueResolver`] strategies.
///
/// Strategies run in registration order over the still-unresolved
/// parameters; the first strategy to claim a position wins and no later
/// strategy can overwrite it. Once every parameter is resolved the
/// remaining strategies are skipped.
#[derive(Debug)]
pub struct ResolutionChain {
    resolvers: Vec<Box<dyn ValueResolver>>,
    promote_positional: bool,
}

impl ResolutionChain {
    /// The canonical chain: named values, then type-directed lookup
    /// through the optional registry/catalog, then signature defaults.
    pub fn new(
        registry: Option<Arc<dyn Registry>>,
        catalog: Option<Arc<dyn TypeCatalog>>,
    ) -> Self {
        ResolutionChain {
            resolvers: default_resolvers(registry, catalog),
            promote_positional: true,
        }
    }

    /// A chain with a custom strategy list.
    pub fn with_resolvers(resolvers: Vec<Box<dyn ValueResolver>>) -> Self {
        ResolutionChain {
            resolvers,
            promote_positional: true,
        }
    }

    /// Disables the up-front positional-to-name promotion, for pipelines
    /// that handle position-keyed entries themselves (see
    /// [`PositionalValueResolver`](crate::resolver::PositionalValueResolver)).
    pub fn without_positional_promotion(mut self) -> Self {
        self.promote_positional = false;
        self
    }

    /// Adds strategies after the ones already registered (lowest priority).
    pub fn append_resolver(&mut self, resolver: Box<dyn ValueResolver>) {
        self.resolvers.push(resolver);
    }

    /// Inserts strategies before the ones already registered (highest
    /// priority).
    pub fn prepend_resolver(&mut self, resolver: Box<dyn ValueResolver>) {
        self.resolvers.insert(0, resolver);
    }

    /// Resolves as many parameters as the strategies can supply.
    ///
    /// Never errors: parameters nothing could resolve are simply absent
    /// from the returned map, and detecting missing required parameters is
    /// the caller's concern (see [`Invoker`](crate::invoker::Invoker)).
    pub fn resolve(
        &self,
        signature: &Signature,
        mut provided: ProvidedArguments,
    ) -> ResolvedArguments {
        let mut resolved = ResolvedArguments::new();
        if signature.is_empty() {
            return resolved;
        }

        if self.promote_positional {
            provided.promote_positional(signature);
        }

        for resolver in &self.resolvers {
            for parameter in signature.parameters() {
                if resolved.contains_key(&parameter.position()) {
                    continue;
                }
                if let Some(value) = resolver.resolve(parameter, &mut provided) {
                    log::trace!(
                        "{:?} supplied parameter '{}' at position {}",
                        resolver,
                        parameter.name(),
                        parameter.position()
                    );
                    resolved.insert(parameter.position(), value);
                }
            }
            if resolved.len() == signature.len() {
                // Every parameter has a value; skip the remaining strategies.
                break;
            }
        }

        log::debug!(
            "resolved {}/{} parameters",
            resolved.len(),
            signature.len()
        );
        resolved
    }
}
