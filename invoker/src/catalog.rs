//! Type catalog: explicit constructors for declared types.
//!
//! The type resolver's last resort is to construct a fresh instance of a
//! declared type. Reflection would do that in a dynamic language; here the
//! caller registers constructors by type name. Construction failures are
//! swallowed by the resolver, never propagated.

use crate::error::InstantiationError;
use crate::values::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Constructs instances of named types on demand.
pub trait TypeCatalog: fmt::Debug + Send + Sync {
    /// Whether the catalog can construct the named type.
    fn is_instantiable(&self, type_name: &str) -> bool;

    /// Constructs a fresh instance. A registered constructor may itself
    /// fail (e.g. the type needs arguments the catalog cannot supply).
    fn instantiate(&self, type_name: &str) -> Result<Value, InstantiationError>;
}

type Constructor = Arc<dyn Fn() -> Result<Value, InstantiationError> + Send + Sync>;

/// A name-keyed map of constructor closures.
#[derive(Default, Clone)]
pub struct ConstructorCatalog {
    constructors: HashMap<String, Constructor>,
}

impl ConstructorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        constructor: impl Fn() -> Result<Value, InstantiationError> + Send + Sync + 'static,
    ) {
        self.constructors
            .insert(type_name.into(), Arc::new(constructor));
    }

    /// Fluent form of [`register`](Self::register).
    pub fn with(
        mut self,
        type_name: impl Into<String>,
        constructor: impl Fn() -> Result<Value, InstantiationError> + Send + Sync + 'static,
    ) -> Self {
        self.register(type_name, constructor);
        self
    }
}

impl fmt::Debug for ConstructorCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ConstructorCatalog")
            .field("types", &names)
            .finish()
    }
}

impl TypeCatalog for ConstructorCatalog {
    fn is_instantiable(&self, type_name: &str) -> bool {
        self.constructors.contains_key(type_name)
    }

    fn instantiate(&self, type_name: &str) -> Result<Value, InstantiationError> {
        match self.constructors.get(type_name) {
            Some(constructor) => constructor(),
            None => Err(InstantiationError::UnknownType(type_name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Instance;

    #[test]
    fn constructs_registered_types() {
        let catalog = ConstructorCatalog::new().with("Clock", || {
            Ok(Value::Instance(Instance::new("Clock")))
        });

        assert!(catalog.is_instantiable("Clock"));
        assert_eq!(
            catalog.instantiate("Clock"),
            Ok(Value::Instance(Instance::new("Clock")))
        );
    }

    #[test]
    fn unknown_types_are_not_instantiable() {
        let catalog = ConstructorCatalog::new();

        assert!(!catalog.is_instantiable("Mailer"));
        assert_eq!(
            catalog.instantiate("Mailer"),
            Err(InstantiationError::UnknownType("Mailer".to_string()))
        );
    }

    #[test]
    fn constructors_may_fail() {
        let catalog = ConstructorCatalog::new().with("NeedsArgs", || {
            Err(InstantiationError::Constructor(
                "NeedsArgs".to_string(),
                "required constructor arguments".to_string(),
            ))
        });

        assert!(catalog.is_instantiable("NeedsArgs"));
        assert!(catalog.instantiate("NeedsArgs").is_err());
    }
}
