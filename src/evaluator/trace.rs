//! Execution trace.
//!
//! One entry per executed step, in execution order. The rendered trace is the
//! message of a `Required` fault, so the format favors reading over parsing.

use crate::config::TraceConfig;
use crate::pipeline::Pipe;
use crate::transform::Kind;
use crate::Value;
use std::fmt;

/// What kind of step produced an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum StepDescriptor {
    /// One transformation applied to every slot
    Broadcast { name: String, kind: Kind },
    /// One transformation fed the whole vector
    Collapse { name: String, kind: Kind },
    /// One transformation per slot
    Zipped { names: Vec<String> },
}

impl StepDescriptor {
    pub(crate) fn of(step: &Pipe) -> StepDescriptor {
        match step {
            Pipe::Transform(t) => match t.kind() {
                Kind::ManyToOne | Kind::ManyToMany => StepDescriptor::Collapse {
                    name: t.name().to_string(),
                    kind: t.kind(),
                },
                kind => StepDescriptor::Broadcast {
                    name: t.name().to_string(),
                    kind,
                },
            },
            Pipe::List(items) => StepDescriptor::Zipped {
                names: items.iter().map(Pipe::label).collect(),
            },
            other => StepDescriptor::Broadcast {
                name: other.label(),
                kind: Kind::OneToOne,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntry {
    /// Index of the step in the normalized pipeline; 0 is the seeding step
    pub step: usize,
    /// Vector before the step
    pub input: Vec<Value>,
    /// Vector after the step
    pub output: Vec<Value>,
    pub descriptor: StepDescriptor,
}

impl TraceEntry {
    pub fn render(&self, config: &TraceConfig) -> String {
        let value = |v: Option<&Value>| match v {
            Some(v) => truncate(v.to_string(), config.max_value_chars),
            None => "-".to_string(),
        };

        let mut lines = vec![
            "-------------------".to_string(),
            format!("-- Evaluation step: {}", self.step),
        ];
        match &self.descriptor {
            StepDescriptor::Collapse { name, .. } => {
                lines.push(format!("-- {}", name));
                if config.include_inputs {
                    for (i, input) in self.input.iter().enumerate() {
                        lines.push(format!("Input #{}: {}", i, value(Some(input))));
                    }
                }
                match self.output.as_slice() {
                    [single] => lines.push(format!("Output: {}", value(Some(single)))),
                    many => {
                        for (i, output) in many.iter().enumerate() {
                            lines.push(format!("Output #{}: {}", i, value(Some(output))));
                        }
                    }
                }
            }
            StepDescriptor::Zipped { names } => {
                for (i, name) in names.iter().enumerate() {
                    lines.push(format!("-- {}", name));
                    if config.include_inputs {
                        lines.push(format!("Input: {}", value(self.input.get(i))));
                    }
                    lines.push(format!("Output: {}\n", value(self.output.get(i))));
                }
            }
            StepDescriptor::Broadcast { name, .. } => {
                for (i, input) in self.input.iter().enumerate() {
                    lines.push(format!("-- {}", name));
                    if config.include_inputs {
                        lines.push(format!("Input: {}", value(Some(input))));
                    }
                    lines.push(format!("Output: {}\n", value(self.output.get(i))));
                }
            }
        }
        lines.join("\n")
    }
}

fn truncate(text: String, max_chars: usize) -> String {
    if max_chars == 0 || text.chars().count() <= max_chars {
        return text;
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

/// Ordered record of the steps of one evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TraceEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TraceEntry> {
        self.entries.last()
    }

    pub fn render(&self, config: &TraceConfig) -> String {
        let body: Vec<String> = self.entries.iter().map(|e| e.render(config)).collect();
        format!("\n{}\n", body.join("\n"))
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&TraceConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_values() {
        assert_eq!(truncate("abcdef".to_string(), 3), "abc...");
        assert_eq!(truncate("abc".to_string(), 3), "abc");
        assert_eq!(truncate("abcdef".to_string(), 0), "abcdef");
    }

    #[test]
    fn collapse_entry_lists_every_input() {
        let entry = TraceEntry {
            step: 2,
            input: vec![Value::from("x"), Value::Absent],
            output: vec![Value::Absent],
            descriptor: StepDescriptor::Collapse {
                name: "join".to_string(),
                kind: Kind::ManyToOne,
            },
        };
        let text = entry.render(&TraceConfig::default());
        assert!(text.contains("-- Evaluation step: 2"));
        assert!(text.contains("Input #0: \"x\""));
        assert!(text.contains("Input #1: NoValue"));
        assert!(text.contains("Output: NoValue"));
    }

    #[test]
    fn inputs_can_be_left_out() {
        let entry = TraceEntry {
            step: 1,
            input: vec![Value::from("in")],
            output: vec![Value::from("out")],
            descriptor: StepDescriptor::Broadcast {
                name: "trim".to_string(),
                kind: Kind::OneToOne,
            },
        };
        let config = TraceConfig {
            include_inputs: false,
            ..TraceConfig::default()
        };
        let text = entry.render(&config);
        assert!(!text.contains("Input"));
        assert!(text.contains("Output: \"out\""));
    }
}
