use pipelinr::adapter::JsonDocument;
use pipelinr::{Evaluator, Pipe, PipelineError, TransformRegistry, Transformation, Value};
use serde_json::json;

fn run(doc: serde_json::Value, pipeline: &str) -> Result<Value, PipelineError> {
    let registry = TransformRegistry::new();
    let pipeline = Pipe::parse_json(pipeline, &registry)?;
    Evaluator::new(JsonDocument::new(doc)).evaluate(&pipeline)
}

#[test]
fn test_describe_pipeline_in_json() {
    let pipeline = r#"["title", {"fn": "trim"}, {"fn": "default_value", "args": ["untitled"]}]"#;

    assert_eq!(
        run(json!({"title": "  Post  "}), pipeline).unwrap(),
        Value::from("Post")
    );
    assert_eq!(run(json!({}), pipeline).unwrap(), Value::from("untitled"));
}

#[test]
fn test_zipped_step_in_json() {
    let pipeline = r#"[
        ["first", "last"],
        [{"fn": "trim"}, {"fn": "to_upper_case"}],
        {"fn": "join", "args": [" "]}
    ]"#;
    let doc = json!({"first": " Ada ", "last": "lovelace"});
    assert_eq!(run(doc, pipeline).unwrap(), Value::from("Ada LOVELACE"));
}

#[test]
fn test_single_argument_need_not_be_wrapped() {
    let pipeline = r#"[["a", "b"], {"fn": "join", "args": "-"}]"#;
    let doc = json!({"a": "x", "b": "y"});
    assert_eq!(run(doc, pipeline).unwrap(), Value::from("x-y"));
}

#[test]
fn test_nested_selectors_use_dots() {
    let pipeline = r#""post.author.name""#;
    let doc = json!({"post": {"author": {"name": "Grace"}}});
    assert_eq!(run(doc, pipeline).unwrap(), Value::from("Grace"));
}

#[test]
fn test_unknown_transformation() {
    let err = run(json!({}), r#"["a", {"fn": "shout"}]"#).unwrap_err();
    match err {
        PipelineError::InvalidDescription(message) => assert!(message.contains("shout")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_malformed_json() {
    let err = run(json!({}), r#"["a", "#).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidDescription(_)));
}

#[test]
fn test_plain_values_fail_validation() {
    let err = run(json!({"a": "x"}), r#"["a", 42]"#).unwrap_err();
    assert!(matches!(err, PipelineError::Validation { step: 1, .. }));

    let err = run(json!({"a": "x"}), r#"["a", {"not_fn": true}]"#).unwrap_err();
    assert!(matches!(err, PipelineError::Validation { step: 1, .. }));
}

#[test]
fn test_custom_transformations_can_be_registered() {
    let mut registry = TransformRegistry::new();
    let shout = Transformation::new("shout", 1, |_, args| {
        let text = args[0].as_str().unwrap_or_default();
        Ok(Value::from(format!("{}!", text.to_uppercase())))
    });
    assert!(registry.register("shout", shout).is_none());
    assert!(registry.names().contains(&"shout"));

    let pipeline = Pipe::parse_json(r#"["a", {"fn": "shout"}]"#, &registry).unwrap();
    let result = Evaluator::new(JsonDocument::new(json!({"a": "hey"})))
        .evaluate(&pipeline)
        .unwrap();
    assert_eq!(result, Value::from("HEY!"));
}

#[test]
fn test_registry_names_are_sorted() {
    let registry = TransformRegistry::new();
    let names = registry.names();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert!(TransformRegistry::empty().names().is_empty());
}
