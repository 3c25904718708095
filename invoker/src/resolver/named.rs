//! Name-keyed resolution.

use crate::context::ProvidedArguments;
use crate::registry::Registry;
use crate::resolver::ValueResolver;
use crate::signature::Parameter;
use crate::values::Value;
use std::sync::Arc;

/// Binds provided entries (and registry entries) to parameters by name.
///
/// A caller-supplied value always outranks a registry entry of the same
/// name. The registry is only consulted for parameters with no declared
/// type: a name lookup must not shadow the more specific type-directed
/// strategy.
#[derive(Debug, Default)]
pub struct NamedValueResolver {
    registry: Option<Arc<dyn Registry>>,
}

impl NamedValueResolver {
    pub fn new(registry: Option<Arc<dyn Registry>>) -> Self {
        NamedValueResolver { registry }
    }
}

impl ValueResolver for NamedValueResolver {
    fn resolve(&self, parameter: &Parameter, provided: &mut ProvidedArguments) -> Option<Value> {
        if let Some(value) = provided.take_named(parameter.name()) {
            return Some(value);
        }

        if parameter.type_hint().is_none() {
            if let Some(registry) = &self.registry {
                if registry.has(parameter.name()) {
                    // NotFound between has and get is a decline, not a failure.
                    if let Ok(value) = registry.get(parameter.name()) {
                        return Some(value);
                    }
                }
            }
        }

        None
    }
}
