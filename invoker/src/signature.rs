//! Callable signatures.
//!
//! A [`Signature`] is the caller-supplied description of a callable's
//! formal parameters, one [`Parameter`] per position. Since Rust offers no
//! runtime reflection, signatures are built explicitly through
//! [`SignatureBuilder`] (or deserialized as data) and handed to the
//! resolution chain alongside the provided values.

use crate::error::SignatureError;
use crate::values::Value;
use serde::{Deserialize, Serialize};

/// Builtin types a parameter can declare. Type-directed resolution never
/// handles these; they exist so a signature can state them and defer to the
/// other strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveType {
    Integer,
    Float,
    Boolean,
    String,
    Vector,
    Map,
}

/// The declared type of a parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeHint {
    /// A builtin type; opted out of type-directed resolution.
    Primitive(PrimitiveType),
    /// A capability (interface) or concrete type name.
    Capability(String),
    /// Several acceptable declarations, attempted in declared order.
    Union(Vec<TypeHint>),
}

impl TypeHint {
    pub fn capability(name: impl Into<String>) -> Self {
        TypeHint::Capability(name.into())
    }

    pub fn union(members: impl IntoIterator<Item = TypeHint>) -> Self {
        TypeHint::Union(members.into_iter().collect())
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeHint::Primitive(_))
    }
}

/// What the signature knows about a parameter's default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum DefaultValue {
    /// Required parameter, no default.
    #[default]
    None,
    /// An introspectable default. `Value(Value::Nil)` is the explicit-null
    /// default: resolving it records a real entry in the result map, which
    /// is how "no argument needed" stays distinguishable from "unresolved".
    Value(Value),
    /// The parameter is optional but its default cannot be read (opaque or
    /// native targets). Resolution leaves such a parameter unresolved.
    Unavailable,
}

/// One formal parameter of a callable. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    name: String,
    position: usize,
    type_hint: Option<TypeHint>,
    variadic: bool,
    default: DefaultValue,
}

impl Parameter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn type_hint(&self) -> Option<&TypeHint> {
        self.type_hint.as_ref()
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    pub fn default_value(&self) -> &DefaultValue {
        &self.default
    }

    /// True when the parameter may legitimately be left without a value:
    /// it carries a default, or is declared optional without one.
    pub fn is_optional(&self) -> bool {
        !matches!(self.default, DefaultValue::None)
    }
}

/// Ordered parameter list for one callable.
///
/// Parameter positions are exactly `0..n-1`, guaranteed by construction:
/// the builder assigns positions in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    parameters: Vec<Parameter>,
}

impl Signature {
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    /// A signature with no parameters.
    pub fn empty() -> Self {
        Signature { parameters: Vec::new() }
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter(&self, position: usize) -> Option<&Parameter> {
        self.parameters.get(position)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Fluent builder for [`Signature`].
///
/// Positions are assigned in declaration order. `build` rejects duplicate
/// parameter names and anything declared after a variadic parameter.
#[derive(Debug, Default)]
pub struct SignatureBuilder {
    parameters: Vec<Parameter>,
}

impl SignatureBuilder {
    /// A required, untyped parameter.
    pub fn param(self, name: impl Into<String>) -> Self {
        self.push(name.into(), None, false, DefaultValue::None)
    }

    /// A required parameter with a declared type.
    pub fn typed_param(self, name: impl Into<String>, hint: TypeHint) -> Self {
        self.push(name.into(), Some(hint), false, DefaultValue::None)
    }

    /// An untyped parameter with an introspectable default.
    pub fn param_with_default(self, name: impl Into<String>, default: Value) -> Self {
        self.push(name.into(), None, false, DefaultValue::Value(default))
    }

    /// A typed parameter with an introspectable default.
    pub fn typed_param_with_default(
        self,
        name: impl Into<String>,
        hint: TypeHint,
        default: Value,
    ) -> Self {
        self.push(name.into(), Some(hint), false, DefaultValue::Value(default))
    }

    /// An optional parameter whose default cannot be read.
    pub fn optional_param(self, name: impl Into<String>) -> Self {
        self.push(name.into(), None, false, DefaultValue::Unavailable)
    }

    /// A trailing variadic parameter.
    pub fn variadic(self, name: impl Into<String>) -> Self {
        self.push(name.into(), None, true, DefaultValue::None)
    }

    /// A trailing variadic parameter with a declared type.
    pub fn variadic_typed(self, name: impl Into<String>, hint: TypeHint) -> Self {
        self.push(name.into(), Some(hint), true, DefaultValue::None)
    }

    fn push(
        mut self,
        name: String,
        type_hint: Option<TypeHint>,
        variadic: bool,
        default: DefaultValue,
    ) -> Self {
        let position = self.parameters.len();
        self.parameters.push(Parameter {
            name,
            position,
            type_hint,
            variadic,
            default,
        });
        self
    }

    pub fn build(self) -> Result<Signature, SignatureError> {
        for (index, parameter) in self.parameters.iter().enumerate() {
            if self.parameters[..index]
                .iter()
                .any(|earlier| earlier.name == parameter.name)
            {
                return Err(SignatureError::DuplicateParameter(parameter.name.clone()));
            }
            if self.parameters[..index].iter().any(|earlier| earlier.variadic) {
                return Err(SignatureError::ParameterAfterVariadic(
                    parameter.name.clone(),
                ));
            }
        }
        Ok(Signature {
            parameters: self.parameters,
        })
    }
}
