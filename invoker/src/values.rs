//! Dynamic values passed to and returned from callables.
//!
//! Rust has no runtime reflection, so argument resolution operates on a
//! dynamic [`Value`] enum. Non-primitive "objects" are represented by
//! [`Instance`]: a tagged record carrying its concrete type name plus the
//! capability (interface) names it satisfies, which is what type-directed
//! resolution matches against.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A runtime value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Nil,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Vector(Vec<Value>),
    Map(HashMap<String, Value>),
    Instance(Instance),
}

impl Value {
    /// The builtin name for primitives, or the instance's concrete type name.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Nil => "nil",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Vector(_) => "vector",
            Value::Map(_) => "map",
            Value::Instance(instance) => instance.type_name(),
        }
    }

    /// True when this value can stand in for the named capability.
    ///
    /// Only instances carry capability tags; a primitive never satisfies a
    /// capability, so type-directed resolution skips over them.
    pub fn satisfies(&self, capability: &str) -> bool {
        match self {
            Value::Instance(instance) => instance.satisfies(capability),
            _ => false,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Vector(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => write!(f, "{{map of {} entries}}", map.len()),
            Value::Instance(instance) => write!(f, "#<{}>", instance.type_name()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Vector(items)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Instance(instance)
    }
}

/// A tagged record standing in for "an object of type T".
///
/// `capabilities` lists the interface names the instance satisfies in
/// addition to its concrete type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    type_name: String,
    capabilities: Vec<String>,
    fields: HashMap<String, Value>,
}

impl Instance {
    pub fn new(type_name: impl Into<String>) -> Self {
        Instance {
            type_name: type_name.into(),
            capabilities: Vec::new(),
            fields: HashMap::new(),
        }
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// True when `name` is the concrete type name or a listed capability.
    pub fn satisfies(&self, name: &str) -> bool {
        self.type_name == name || self.capabilities.iter().any(|c| c == name)
    }
}
