use serde::{Deserialize, Serialize, Serializer};

use super::measure::{Measurement, measure};

/// One section as shown on the display: a label and plain step strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySection {
    pub name: String,
    pub steps: Vec<String>,
}

/// Recipe reduced to what the e-paper display renders.
///
/// Serializes as the full webhook body, wrapped in `merge_variables`, so that
/// [`measure`] on a payload gives the exact number of bytes sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPayload {
    pub title: String,
    pub sections: Vec<DisplaySection>,
    /// Always the number of step strings in `sections`
    pub step_count: usize,
    /// Set once any compression stage has run
    pub truncated: bool,
}

impl DisplayPayload {
    /// Build a payload, deriving `step_count` from the sections.
    pub fn new(title: impl Into<String>, sections: Vec<DisplaySection>, truncated: bool) -> Self {
        let step_count = count_steps(&sections);
        Self {
            title: title.into(),
            sections,
            step_count,
            truncated,
        }
    }

    /// Serialize the webhook body and measure it
    pub fn measure(&self) -> Measurement {
        measure(self)
    }

    /// Iterate every step string in display order
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.steps.iter().map(String::as_str))
    }
}

pub(crate) fn count_steps(sections: &[DisplaySection]) -> usize {
    sections.iter().map(|s| s.steps.len()).sum()
}

#[derive(Serialize)]
struct WebhookBody<'a> {
    merge_variables: MergeVariables<'a>,
}

#[derive(Serialize)]
struct MergeVariables<'a> {
    recipe_title: &'a str,
    sections: &'a [DisplaySection],
    step_count: usize,
    truncated: bool,
}

impl Serialize for DisplayPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WebhookBody {
            merge_variables: MergeVariables {
                recipe_title: &self.title,
                sections: &self.sections,
                step_count: self.step_count,
                truncated: self.truncated,
            },
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let payload = DisplayPayload::new(
            "Toast",
            vec![DisplaySection {
                name: "Cook".to_string(),
                steps: vec!["Toast the bread".to_string()],
            }],
            false,
        );
        assert_eq!(
            payload.measure().serialized,
            r#"{"merge_variables":{"recipe_title":"Toast","sections":[{"name":"Cook","steps":["Toast the bread"]}],"step_count":1,"truncated":false}}"#
        );
    }

    #[test]
    fn test_new_counts_steps() {
        let payload = DisplayPayload::new(
            "X",
            vec![
                DisplaySection {
                    name: "Prep".to_string(),
                    steps: vec!["a".to_string(), "b".to_string()],
                },
                DisplaySection {
                    name: "Cook".to_string(),
                    steps: vec!["c".to_string()],
                },
            ],
            false,
        );
        assert_eq!(payload.step_count, 3);
        assert_eq!(payload.steps().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
