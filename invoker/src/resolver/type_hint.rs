//! Type-directed resolution.

use crate::catalog::TypeCatalog;
use crate::context::ProvidedArguments;
use crate::registry::Registry;
use crate::resolver::ValueResolver;
use crate::signature::{Parameter, TypeHint};
use crate::values::Value;
use std::sync::Arc;

/// Supplies parameters from their declared capability type.
///
/// For each capability member of the declared type, in declared order:
/// registry lookup first, then a scan of the unconsumed named entries for a
/// value whose runtime type satisfies the capability (claimed on match),
/// then catalog instantiation. Registry NotFound and construction failures
/// decline that member only.
///
/// Union policy: a variadic parameter collects every member match into an
/// ordered vector; a non-variadic parameter keeps the *last* successful
/// match (later-declared members win).
///
/// Primitive declared types are never handled here; a union carrying a
/// primitive member defers the whole parameter to the other strategies.
#[derive(Debug, Default)]
pub struct TypeHintValueResolver {
    registry: Option<Arc<dyn Registry>>,
    catalog: Option<Arc<dyn TypeCatalog>>,
}

impl TypeHintValueResolver {
    pub fn new(registry: Option<Arc<dyn Registry>>, catalog: Option<Arc<dyn TypeCatalog>>) -> Self {
        TypeHintValueResolver { registry, catalog }
    }

    fn lookup(&self, capability: &str, provided: &mut ProvidedArguments) -> Option<Value> {
        if let Some(registry) = &self.registry {
            if registry.has(capability) {
                // NotFound between has and get declines this member only.
                if let Ok(value) = registry.get(capability) {
                    return Some(value);
                }
            }
        }

        if let Some(value) = provided.take_satisfying(capability) {
            return Some(value);
        }

        if let Some(catalog) = &self.catalog {
            if catalog.is_instantiable(capability) {
                // A failing constructor leaves the parameter unresolved.
                if let Ok(value) = catalog.instantiate(capability) {
                    return Some(value);
                }
            }
        }

        None
    }
}

impl ValueResolver for TypeHintValueResolver {
    fn resolve(&self, parameter: &Parameter, provided: &mut ProvidedArguments) -> Option<Value> {
        let hint = parameter.type_hint()?;
        let members: &[TypeHint] = match hint {
            TypeHint::Union(members) => members,
            single => std::slice::from_ref(single),
        };

        // Validate the whole declaration before claiming anything from the
        // bag: declining must leave the bag untouched.
        let mut capabilities = Vec::with_capacity(members.len());
        for member in members {
            match member {
                TypeHint::Capability(name) => capabilities.push(name.as_str()),
                // Primitives (and malformed nested unions) are not
                // type-resolved; defer the whole parameter.
                _ => return None,
            }
        }

        let mut matches = Vec::new();
        for capability in capabilities {
            if let Some(value) = self.lookup(capability, provided) {
                matches.push(value);
            }
        }

        if matches.is_empty() {
            None
        } else if parameter.is_variadic() {
            Some(Value::Vector(matches))
        } else {
            // Later-declared union members win.
            matches.pop()
        }
    }
}
