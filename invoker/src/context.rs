//! The bag of caller-provided argument values.
//!
//! Entries are keyed either by parameter position (a plain ordered list of
//! arguments) or by name. Resolvers *claim* entries: a consumed entry is
//! removed from the bag so it cannot be reused for another parameter. The
//! bag is created fresh per resolution pass and never shared.

use crate::signature::Signature;
use crate::values::Value;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Mixed positional/named argument values supplied by the caller.
///
/// Named entries keep insertion order (capability scans are deterministic);
/// positional entries are kept sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProvidedArguments {
    named: IndexMap<String, Value>,
    positional: BTreeMap<usize, Value>,
}

impl ProvidedArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bag holding a plain ordered argument list: values keyed `0..n`.
    pub fn from_positional(values: impl IntoIterator<Item = Value>) -> Self {
        let mut provided = Self::new();
        for (position, value) in values.into_iter().enumerate() {
            provided.insert_positional(position, value);
        }
        provided
    }

    pub fn from_named<S: Into<String>>(entries: impl IntoIterator<Item = (S, Value)>) -> Self {
        let mut provided = Self::new();
        for (name, value) in entries {
            provided.insert_named(name, value);
        }
        provided
    }

    pub fn insert_named(&mut self, name: impl Into<String>, value: Value) {
        self.named.insert(name.into(), value);
    }

    pub fn insert_positional(&mut self, position: usize, value: Value) {
        self.positional.insert(position, value);
    }

    pub fn len(&self) -> usize {
        self.named.len() + self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional.is_empty()
    }

    pub fn has_named(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Claims the entry stored under `name`, removing it from the bag.
    pub fn take_named(&mut self, name: &str) -> Option<Value> {
        self.named.shift_remove(name)
    }

    /// Claims the entry stored under `position`, removing it from the bag.
    pub fn take_positional(&mut self, position: usize) -> Option<Value> {
        self.positional.remove(&position)
    }

    /// Claims the first named entry (in insertion order) whose value
    /// satisfies the capability, removing it from the bag.
    pub fn take_satisfying(&mut self, capability: &str) -> Option<Value> {
        let key = self
            .named
            .iter()
            .find(|(_, value)| value.satisfies(capability))
            .map(|(key, _)| key.clone())?;
        self.named.shift_remove(&key)
    }

    /// Reconciles positional entries with the signature, once, up front.
    ///
    /// Every positional entry whose index matches a parameter position is
    /// re-keyed under that parameter's name, overwriting any same-named
    /// entry: an explicit positional argument outranks a named one.
    /// Positional entries beyond the signature's arity stay in place.
    pub fn promote_positional(&mut self, signature: &Signature) {
        for parameter in signature.parameters() {
            if let Some(value) = self.positional.remove(&parameter.position()) {
                self.named.insert(parameter.name().to_string(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::Signature;

    #[test]
    fn promotion_rekeys_positional_entries_onto_parameter_names() {
        let signature = Signature::builder()
            .param("name")
            .param("num")
            .build()
            .unwrap();

        let mut provided = ProvidedArguments::new();
        provided.insert_positional(1, Value::Integer(23));
        provided.insert_positional(0, Value::from("Divine"));

        provided.promote_positional(&signature);

        assert_eq!(provided.take_named("name"), Some(Value::from("Divine")));
        assert_eq!(provided.take_named("num"), Some(Value::Integer(23)));
        assert!(provided.is_empty());
    }

    #[test]
    fn promotion_overwrites_a_same_named_entry() {
        let signature = Signature::builder().param("foo").build().unwrap();

        let mut provided = ProvidedArguments::from_named([("foo", Value::from("named"))]);
        provided.insert_positional(0, Value::from("positional"));

        provided.promote_positional(&signature);

        assert_eq!(provided.take_named("foo"), Some(Value::from("positional")));
    }

    #[test]
    fn promotion_leaves_out_of_range_entries_in_place() {
        let signature = Signature::builder().param("only").build().unwrap();

        let mut provided = ProvidedArguments::new();
        provided.insert_positional(0, Value::from("a"));
        provided.insert_positional(5, Value::from("stray"));

        provided.promote_positional(&signature);

        assert_eq!(provided.take_positional(5), Some(Value::from("stray")));
        assert_eq!(provided.take_positional(0), None);
    }

    #[test]
    fn take_satisfying_claims_first_match_in_insertion_order() {
        use crate::values::Instance;

        let first = Instance::new("FileLogger").with_capability("Logger");
        let second = Instance::new("SyslogLogger").with_capability("Logger");

        let mut provided = ProvidedArguments::from_named([
            ("a", Value::Instance(first.clone())),
            ("b", Value::Instance(second.clone())),
        ]);

        assert_eq!(
            provided.take_satisfying("Logger"),
            Some(Value::Instance(first))
        );
        // First match was claimed; the second remains available.
        assert_eq!(
            provided.take_satisfying("Logger"),
            Some(Value::Instance(second))
        );
        assert_eq!(provided.take_satisfying("Logger"), None);
    }
}
