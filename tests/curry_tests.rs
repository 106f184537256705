use pipelinr::adapter::JsonDocument;
use pipelinr::config::TraceConfig;
use pipelinr::transform::builtins::control_flow::default_value;
use pipelinr::transform::builtins::list::join;
use pipelinr::transform::Applied;
use pipelinr::{EvalContext, Kind, Trace, Transformation, Value};
use serde_json::json;

fn add3() -> Transformation {
    Transformation::new("add3", 3, |_, args| {
        let sum: f64 = args.iter().filter_map(Value::as_f64).sum();
        Ok(Value::Number(sum))
    })
}

#[test]
fn test_partial_call_returns_bound_transformation() {
    let doc = JsonDocument::new(json!({}));
    let trace = Trace::new();
    let config = TraceConfig::default();
    let ctx = EvalContext::new(&doc, &trace, &config);

    let partial = match add3().call(&ctx, vec![Value::from(1.0)]).unwrap() {
        Applied::Partial(t) => t,
        Applied::Value(v) => panic!("expected partial application, got {}", v),
    };
    assert_eq!(partial.applied_args(), &[Value::from(1.0)]);
    assert_eq!(partial.remaining_arity(), 2);

    let result = partial
        .call(&ctx, vec![Value::from(2.0), Value::from(3.0)])
        .unwrap();
    assert_eq!(result, Applied::Value(Value::from(6.0)));
}

#[test]
fn test_call_in_pieces_matches_call_at_once() {
    let doc = JsonDocument::new(json!({}));
    let trace = Trace::new();
    let config = TraceConfig::default();
    let ctx = EvalContext::new(&doc, &trace, &config);

    let at_once = add3()
        .call(&ctx, vec![Value::from(1.0), Value::from(2.0), Value::from(4.0)])
        .unwrap();
    let in_pieces = add3()
        .bind([Value::from(1.0)])
        .bind([Value::from(2.0)])
        .call(&ctx, vec![Value::from(4.0)])
        .unwrap();
    assert_eq!(at_once, in_pieces);
}

#[test]
fn test_bind_preserves_flags_and_body() {
    let bound = default_value().bind([Value::from("fallback")]);
    assert!(bound.accepts_errors());
    assert_eq!(bound.name(), "default_value");
    assert_eq!(bound.body(), default_value().body());
    assert_eq!(bound.arity(), 2);
    assert_eq!(bound.remaining_arity(), 1);

    let joined = join().bind([Value::from(", ")]);
    assert_eq!(joined.kind(), Kind::ManyToOne);
    assert!(!joined.accepts_errors());
}

#[test]
fn test_bind_does_not_touch_original() {
    let original = add3();
    let _bound = original.bind([Value::from(1.0), Value::from(2.0)]);
    assert!(original.applied_args().is_empty());
    assert_eq!(original.remaining_arity(), 3);
}

#[test]
fn test_over_application_is_tracked() {
    let over = default_value().bind([Value::from("a"), Value::from("b"), Value::from("c")]);
    assert!(over.is_over_applied());
    assert_eq!(over.remaining_arity(), 0);
}

#[test]
fn test_equality_follows_the_wrapped_function() {
    let a = add3();
    assert_eq!(a.bind([Value::from(1.0)]), a.bind([Value::from(1.0)]));
    assert_ne!(a.bind([Value::from(1.0)]), a.bind([Value::from(2.0)]));

    // same name and arity, different closure
    assert_ne!(a, add3());
}

#[test]
fn test_invoke_passes_slot_index_when_two_parameters_remain() {
    let doc = JsonDocument::new(json!({}));
    let trace = Trace::new();
    let config = TraceConfig::default();
    let ctx = EvalContext::new(&doc, &trace, &config);

    let index_of = Transformation::new("index_of", 2, |_, args| Ok(args[1].clone()));
    assert_eq!(
        index_of.invoke(&ctx, Value::from("x"), 4).unwrap(),
        Value::from(4.0)
    );

    let value_of = Transformation::new("value_of", 1, |_, args| Ok(args[0].clone()));
    assert_eq!(
        value_of.invoke(&ctx, Value::from("x"), 4).unwrap(),
        Value::from("x")
    );
}

#[test]
fn test_invoke_rejects_unusable_arity() {
    let doc = JsonDocument::new(json!({}));
    let trace = Trace::new();
    let config = TraceConfig::default();
    let ctx = EvalContext::new(&doc, &trace, &config);

    assert!(add3().invoke(&ctx, Value::Null, 0).is_err());
}

#[test]
fn test_display_lists_bound_arguments() {
    assert_eq!(join().to_string(), "join");
    assert_eq!(join().bind([Value::from(", ")]).to_string(), "join(\", \")");
}
