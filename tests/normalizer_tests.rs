use pipelinr::pipeline::normalize;
use pipelinr::transform::builtins::string::{to_upper_case, trim};
use pipelinr::{Pipe, PipelineError, Transformation, Value};

fn expanded_selector(step: &Pipe) -> &Transformation {
    match step {
        Pipe::Transform(t) => t,
        other => panic!("expected an expanded selector, got {:?}", other),
    }
}

fn first_step(steps: &[Pipe]) -> &[Pipe] {
    match steps.first() {
        Some(Pipe::List(items)) => items,
        other => panic!("expected a selector list, got {:?}", other),
    }
}

#[test]
fn test_bare_selector_becomes_single_slot_pipeline() {
    let steps = normalize(&Pipe::selector("hello")).unwrap();
    assert_eq!(steps.len(), 1);

    let first = first_step(&steps);
    assert_eq!(first.len(), 1);

    let flow = expanded_selector(&first[0]);
    assert_eq!(flow.name(), "flow");
    let stages: Vec<&str> = flow.stages().iter().map(Transformation::name).collect();
    assert_eq!(stages, vec!["get", "node_text"]);
    assert_eq!(flow.stages()[0].applied_args(), &[Value::from("hello")]);
}

#[test]
fn test_leading_selectors_are_gathered() {
    let trim = trim();
    let pipeline = Pipe::list(vec![
        Pipe::selector("a"),
        Pipe::selector("b"),
        trim.clone().into(),
    ]);
    let steps = normalize(&pipeline).unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(first_step(&steps).len(), 2);
    assert_eq!(steps[1], Pipe::Transform(trim));
}

#[test]
fn test_non_selectors_in_first_step_are_kept() {
    let upper = to_upper_case();
    let pipeline = Pipe::list(vec![Pipe::list(vec![
        Pipe::selector("hello"),
        upper.clone().into(),
        Pipe::selector("hello2"),
    ])]);
    let steps = normalize(&pipeline).unwrap();
    let first = first_step(&steps);
    assert_eq!(first.len(), 3);
    assert_eq!(first[1], Pipe::Transform(upper));
    assert_eq!(expanded_selector(&first[0]).name(), "flow");
    assert_eq!(expanded_selector(&first[2]).name(), "flow");
}

#[test]
fn test_normalization_is_idempotent() {
    let pipeline = Pipe::list(vec![
        Pipe::selector("a"),
        Pipe::selector("b"),
        trim().into(),
    ]);
    let once = normalize(&pipeline).unwrap();
    let twice = normalize(&Pipe::List(once.clone())).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_input_is_left_untouched() {
    let pipeline = Pipe::list(vec![Pipe::selector("a"), trim().into()]);
    let before = pipeline.clone();
    normalize(&pipeline).unwrap();
    assert_eq!(pipeline, before);
}

#[test]
fn test_bare_transformation_is_rejected() {
    let err = normalize(&Pipe::Transform(trim())).unwrap_err();
    match err {
        PipelineError::InvalidDescription(message) => {
            assert!(message.contains("selector, array, or nested structure"))
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_pipeline_must_start_with_selectors() {
    let err = normalize(&Pipe::list(vec![Pipe::Transform(trim())])).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidDescription(_)));

    let err = normalize(&Pipe::List(Vec::new())).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidDescription(_)));
}
