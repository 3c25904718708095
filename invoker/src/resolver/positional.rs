//! Position-keyed resolution.

use crate::context::ProvidedArguments;
use crate::resolver::ValueResolver;
use crate::signature::Parameter;
use crate::values::Value;

/// Claims the provided entry keyed by the parameter's position.
///
/// Lets callers pass a plain ordered argument list without naming
/// parameters. The canonical chain covers this case by promoting
/// position-keyed entries onto parameter names before any strategy runs,
/// so this resolver ships for custom pipelines built with
/// [`ResolutionChain::without_positional_promotion`](crate::chain::ResolutionChain::without_positional_promotion).
/// Name-keyed entries are ignored here.
#[derive(Debug, Default, Clone, Copy)]
pub struct PositionalValueResolver;

impl ValueResolver for PositionalValueResolver {
    fn resolve(&self, parameter: &Parameter, provided: &mut ProvidedArguments) -> Option<Value> {
        provided.take_positional(parameter.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::Signature;

    #[test]
    fn claims_the_entry_at_the_parameter_position() {
        let signature = Signature::builder()
            .param("name")
            .param("num")
            .build()
            .unwrap();

        let mut provided = ProvidedArguments::new();
        provided.insert_positional(1, Value::Integer(23));
        provided.insert_named("name", Value::from("ignored by this strategy"));

        let resolver = PositionalValueResolver;
        assert_eq!(
            resolver.resolve(&signature.parameters()[1], &mut provided),
            Some(Value::Integer(23))
        );
        assert_eq!(
            resolver.resolve(&signature.parameters()[0], &mut provided),
            None
        );
        // The named entry is untouched.
        assert!(provided.has_named("name"));
    }
}
