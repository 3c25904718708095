//! Invocation facade tests.

use invoker::values::Instance;
use invoker::{
    Callable, Invoker, InvokerError, ProvidedArguments, Registry, RegistryError, Signature,
    TypeHint, Value,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct MapRegistry {
    entries: HashMap<String, Value>,
}

impl MapRegistry {
    fn with(mut self, name: &str, value: Value) -> Self {
        self.entries.insert(name.to_string(), value);
        self
    }
}

impl Registry for MapRegistry {
    fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn get(&self, name: &str) -> Result<Value, RegistryError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }
}

fn greet() -> Callable {
    let signature = Signature::builder()
        .param("name")
        .param_with_default("num", Value::Integer(23))
        .build()
        .unwrap();
    Callable::new("greet", signature, |args| {
        let name = match &args[0] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let num = match &args[1] {
            Value::Integer(n) => *n,
            _ => 0,
        };
        Ok(Value::String(format!("{}:{}", name, num)))
    })
}

#[test]
fn calls_with_a_plain_positional_list() {
    let invoker = Invoker::new(None, None);

    let result = invoker
        .call(
            &greet(),
            ProvidedArguments::from_positional([Value::from("Divine"), Value::Integer(42)]),
        )
        .unwrap();

    assert_eq!(result, Value::from("Divine:42"));
}

#[test]
fn defaults_fill_in_for_missing_arguments() {
    let invoker = Invoker::new(None, None);

    let result = invoker
        .call(
            &greet(),
            ProvidedArguments::from_named([("name", Value::from("Divine"))]),
        )
        .unwrap();

    assert_eq!(result, Value::from("Divine:23"));
}

#[test]
fn missing_required_parameter_fails_before_invoking() {
    let invoker = Invoker::new(None, None);

    let err = invoker.call(&greet(), ProvidedArguments::new()).unwrap_err();

    assert_eq!(
        err,
        InvokerError::NotEnoughArguments {
            position: 0,
            name: "name".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "unable to invoke the callable because no value was given for parameter 1 ($name)"
    );
}

#[test]
fn registry_injects_typed_parameters() {
    let logger = Value::Instance(Instance::new("FileLogger").with_capability("Logger"));
    let registry = MapRegistry::default().with("Logger", logger.clone());

    let signature = Signature::builder()
        .typed_param("logger", TypeHint::capability("Logger"))
        .build()
        .unwrap();
    let callable = Callable::new("log_something", signature, move |args| {
        assert_eq!(args.len(), 1);
        assert!(args[0].satisfies("Logger"));
        Ok(Value::Nil)
    });

    let invoker = Invoker::new(Some(Arc::new(registry)), None);
    let result = invoker.call(&callable, ProvidedArguments::new()).unwrap();

    assert_eq!(result, Value::Nil);
}

#[test]
fn variadic_matches_are_splatted_into_the_call() {
    let a = Value::Instance(Instance::new("AImpl").with_capability("A"));
    let b = Value::Instance(Instance::new("BImpl").with_capability("B"));

    let signature = Signature::builder()
        .param("first")
        .variadic_typed(
            "rest",
            TypeHint::union([TypeHint::capability("A"), TypeHint::capability("B")]),
        )
        .build()
        .unwrap();
    let callable = Callable::new("collect", signature, |args| {
        Ok(Value::Integer(args.len() as i64))
    });

    let invoker = Invoker::new(None, None);
    let mut provided = ProvidedArguments::from_named([("x", a), ("y", b)]);
    provided.insert_positional(0, Value::from("head"));

    let result = invoker.call(&callable, provided).unwrap();

    // One fixed argument plus two splatted variadic matches.
    assert_eq!(result, Value::Integer(3));
}

#[test]
fn an_unresolved_variadic_contributes_nothing() {
    let signature = Signature::builder()
        .param("first")
        .variadic("rest")
        .build()
        .unwrap();
    let callable = Callable::new("collect", signature, |args| {
        Ok(Value::Integer(args.len() as i64))
    });

    let invoker = Invoker::new(None, None);
    let result = invoker
        .call(
            &callable,
            ProvidedArguments::from_positional([Value::from("head")]),
        )
        .unwrap();

    assert_eq!(result, Value::Integer(1));
}

#[test]
fn trailing_optional_with_unreadable_default_is_omitted() {
    let signature = Signature::builder()
        .param("first")
        .optional_param("opaque")
        .build()
        .unwrap();
    let callable = Callable::new("takes_one_or_two", signature, |args| {
        Ok(Value::Integer(args.len() as i64))
    });

    let invoker = Invoker::new(None, None);
    let result = invoker
        .call(
            &callable,
            ProvidedArguments::from_positional([Value::from("only")]),
        )
        .unwrap();

    assert_eq!(result, Value::Integer(1));
}

#[test]
fn explicit_nil_default_is_passed_as_an_argument() {
    let signature = Signature::builder()
        .param("first")
        .param_with_default("maybe", Value::Nil)
        .build()
        .unwrap();
    let callable = Callable::new("takes_two", signature, |args| {
        assert_eq!(args.len(), 2);
        assert!(args[1].is_nil());
        Ok(Value::Nil)
    });

    let invoker = Invoker::new(None, None);
    invoker
        .call(
            &callable,
            ProvidedArguments::from_positional([Value::from("x")]),
        )
        .unwrap();
}

#[test]
fn callable_failures_propagate() {
    let signature = Signature::builder().param("input").build().unwrap();
    let callable = Callable::new("fails", signature, |_args| {
        Err(InvokerError::Invocation(
            "fails".to_string(),
            "boom".to_string(),
        ))
    });

    let invoker = Invoker::new(None, None);
    let err = invoker
        .call(
            &callable,
            ProvidedArguments::from_positional([Value::Nil]),
        )
        .unwrap_err();

    assert_eq!(
        err,
        InvokerError::Invocation("fails".to_string(), "boom".to_string())
    );
}

#[test]
fn a_prepended_strategy_overrides_the_canonical_ones() {
    use invoker::{ProvidedArguments as Bag, ValueResolver};

    #[derive(Debug)]
    struct Pin;

    impl ValueResolver for Pin {
        fn resolve(&self, parameter: &invoker::Parameter, _provided: &mut Bag) -> Option<Value> {
            (parameter.name() == "name").then(|| Value::from("pinned"))
        }
    }

    let mut invoker = Invoker::new(None, None);
    invoker.chain_mut().prepend_resolver(Box::new(Pin));

    let result = invoker
        .call(
            &greet(),
            ProvidedArguments::from_named([("name", Value::from("ignored"))]),
        )
        .unwrap();

    assert_eq!(result, Value::from("pinned:23"));
}
