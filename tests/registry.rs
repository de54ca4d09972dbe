use tally::{
    Environment, FunctionRegistry, RuntimeError, Session, VariableRegistry, calculate,
    interpreter::evaluator::{function::builtin::BUILTIN_FUNCTIONS, variables::GOLDEN_RATIO},
};

#[test]
fn builtins_are_registered_with_their_arity() {
    let registry = FunctionRegistry::new();
    let expected = [("pow", 2),
                    ("sqrt", 1),
                    ("root", 2),
                    ("sin", 1),
                    ("cos", 1),
                    ("tan", 1),
                    ("asin", 1),
                    ("acos", 1),
                    ("atan", 1),
                    ("min", 2),
                    ("max", 2),
                    ("floor", 1),
                    ("ceil", 1)];

    assert_eq!(BUILTIN_FUNCTIONS.len(), expected.len());
    for (name, arity) in expected {
        let function = registry.get(name)
                               .unwrap_or_else(|| panic!("{name} is not registered"));
        assert_eq!(function.arity(), arity, "{name}");
    }

    let names = registry.names();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn missing_function_is_not_an_error() {
    let registry = FunctionRegistry::new();
    assert!(registry.get("nope").is_none());
    assert!(FunctionRegistry::empty().get("sqrt").is_none());
}

#[test]
fn duplicate_function_names_are_rejected() {
    let mut registry = FunctionRegistry::new();

    assert_eq!(registry.define_unary("sqrt", f64::sqrt),
               Err(RuntimeError::FunctionAlreadyDefined { name: "sqrt".to_string() }));

    registry.define_binary("hypot", f64::hypot).unwrap();
    assert_eq!(registry.define("hypot", 2, |_| 0.0),
               Err(RuntimeError::FunctionAlreadyDefined { name: "hypot".to_string() }));
}

#[test]
fn function_names_must_be_identifiers() {
    let mut registry = FunctionRegistry::new();

    for name in ["", "log2", "my_fn", "ÿ"] {
        assert_eq!(registry.define_unary(name, f64::ln),
                   Err(RuntimeError::InvalidIdentifier { name: name.to_string() }),
                   "{name:?}");
    }
}

#[test]
fn runtime_functions_are_callable_from_expressions() {
    let mut env = Environment::new();
    env.functions.define_unary("double", |x| x * 2.0).unwrap();
    env.functions.define_binary("hypot", f64::hypot).unwrap();
    env.define_function("answer", 0, |_| 42.0).unwrap();
    env.define_function("avg", 3, |args| args.iter().sum::<f64>() / 3.0).unwrap();

    assert_eq!(calculate("double(4) + 1", &env), 9.0);
    assert_eq!(calculate("hypot(3, 4)", &env), 5.0);
    assert_eq!(calculate("answer() / 2", &env), 21.0);
    assert_eq!(calculate("avg(1, 2, 6)", &env), 3.0);
    assert!(calculate("avg(1, 2)", &env).is_nan());
}

#[test]
fn calling_with_the_wrong_slice_length_is_nan() {
    let registry = FunctionRegistry::new();
    let pow = registry.get("pow").unwrap();

    assert_eq!(pow.call(&[2.0, 10.0]), 1024.0);
    assert!(pow.call(&[2.0]).is_nan());
}

#[test]
fn default_constants() {
    let vars = VariableRegistry::new();

    assert_eq!(vars.try_get("pi"), Some(std::f64::consts::PI));
    assert_eq!(vars.try_get("tau"), Some(std::f64::consts::TAU));
    assert_eq!(vars.try_get("e"), Some(std::f64::consts::E));
    assert_eq!(vars.try_get("gold"), Some(GOLDEN_RATIO));
    assert!((GOLDEN_RATIO - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);

    for name in ["pi", "tau", "e", "gold"] {
        assert!(vars.is_defined(name));
        assert!(vars.is_constant(name));
    }
    assert!(!VariableRegistry::empty().is_defined("pi"));
}

#[test]
fn variables_are_inserted_and_overwritten() {
    let mut vars = VariableRegistry::new();
    assert!(!vars.is_defined("x"));

    vars.set_variable("x", 1.5);
    assert!(vars.is_defined("x"));
    assert!(!vars.is_constant("x"));
    assert_eq!(vars.try_get("x"), Some(1.5));

    vars.set_variable("x", -2.0);
    assert_eq!(vars.get("x"), Ok(-2.0));
    assert_eq!(vars["x"], -2.0);
}

#[test]
fn constants_take_precedence_over_variables() {
    let mut vars = VariableRegistry::empty();
    vars.add_constant("pi", std::f64::consts::PI).unwrap();
    vars.set_variable("pi", 1.0);

    assert_eq!(vars.try_get("pi"), Some(std::f64::consts::PI));
    assert_eq!(vars["pi"], std::f64::consts::PI);
    assert!(vars.variables().any(|(name, value)| name == "pi" && value == 1.0));
}

#[test]
fn duplicate_constants_are_rejected() {
    let mut vars = VariableRegistry::new();

    assert_eq!(vars.add_constant("e", 2.0),
               Err(RuntimeError::ConstantAlreadyDefined { name: "e".to_string() }));

    vars.add_constant("c", 299_792_458.0).unwrap();
    assert_eq!(vars.try_get("c"), Some(299_792_458.0));
    assert_eq!(vars.add_constant("c", 1.0),
               Err(RuntimeError::ConstantAlreadyDefined { name: "c".to_string() }));
    assert_eq!(vars.add_constant("c2", 1.0),
               Err(RuntimeError::InvalidIdentifier { name: "c2".to_string() }));
}

#[test]
fn reading_an_undefined_variable_fails() {
    let vars = VariableRegistry::new();

    assert_eq!(vars.try_get("missing"), None);
    assert_eq!(vars.get("missing"),
               Err(RuntimeError::UnknownVariable { name: "missing".to_string() }));
}

#[test]
#[should_panic(expected = "Variable missing is not defined.")]
fn indexing_an_undefined_variable_panics() {
    let vars = VariableRegistry::new();
    let _ = vars["missing"];
}

#[test]
fn session_keeps_history_and_environment() {
    let mut session = Session::new();

    let entry = session.submit("1 + 2 * 3");
    assert_eq!(entry.parsed, Ok("1 + 2 × 3".to_string()));
    assert_eq!(entry.value, 7.0);

    session.environment_mut()
           .functions
           .define_unary("half", |x| x / 2.0)
           .unwrap();
    assert_eq!(session.submit("half(9)").value, 4.5);

    let entry = session.submit("half(");
    assert!(!entry.is_valid());
    assert!(entry.value.is_nan());

    let entry = session.submit("nope(1)");
    assert!(entry.is_valid());
    assert!(entry.value.is_nan());

    let inputs: Vec<&str> = session.history().iter().map(|e| e.input.as_str()).collect();
    assert_eq!(inputs, ["1 + 2 * 3", "half(9)", "half(", "nope(1)"]);
    assert!(session.environment().functions.contains("half"));

    session.clear_history();
    assert!(session.history().is_empty());
}

#[test]
fn session_marks_overly_deep_input_invalid() {
    let mut session = Session::new();

    let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let entry = session.submit(&deep);
    assert!(!entry.is_valid());
    assert!(entry.value.is_nan());

    assert_eq!(session.submit("2 + 2").value, 4.0);
    assert_eq!(session.history().len(), 2);
}
