//! Signature-default resolution.

use crate::context::ProvidedArguments;
use crate::resolver::ValueResolver;
use crate::signature::{DefaultValue, Parameter};
use crate::values::Value;

/// Falls back to the default recorded in the signature when no strategy
/// before it supplied a value.
///
/// A nil default is a real resolution: the result map gains an entry for
/// the position, so "no argument needed" stays distinguishable from
/// "unresolved". A parameter that is optional but whose default cannot be
/// read is left unresolved.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultValueResolver;

impl ValueResolver for DefaultValueResolver {
    fn resolve(&self, parameter: &Parameter, _provided: &mut ProvidedArguments) -> Option<Value> {
        match parameter.default_value() {
            DefaultValue::Value(value) => Some(value.clone()),
            DefaultValue::Unavailable | DefaultValue::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::Signature;

    #[test]
    fn supplies_recorded_defaults_including_explicit_nil() {
        let signature = Signature::builder()
            .param("required")
            .param_with_default("num", Value::Integer(23))
            .param_with_default("maybe", Value::Nil)
            .optional_param("opaque")
            .build()
            .unwrap();
        let mut provided = ProvidedArguments::new();

        let resolver = DefaultValueResolver;
        assert_eq!(
            resolver.resolve(&signature.parameters()[0], &mut provided),
            None
        );
        assert_eq!(
            resolver.resolve(&signature.parameters()[1], &mut provided),
            Some(Value::Integer(23))
        );
        assert_eq!(
            resolver.resolve(&signature.parameters()[2], &mut provided),
            Some(Value::Nil)
        );
        // Optional but unreadable default: left unresolved.
        assert_eq!(
            resolver.resolve(&signature.parameters()[3], &mut provided),
            None
        );
    }
}
