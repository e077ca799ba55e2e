use super::payload::{DisplayPayload, DisplaySection};
use super::{STEP_MAX_CHARS, TITLE_MAX_CHARS, clip};
use crate::recipe::Recipe;

/// Map a recipe onto the display schema.
///
/// - Ingredients are dropped (the steps imply them)
/// - Title is clipped to 40 chars
/// - Each step is clipped to 80 chars
///
/// No byte budget is applied here; see [`super::compress`].
pub fn project(recipe: &Recipe) -> DisplayPayload {
    let sections = recipe
        .sections
        .iter()
        .map(|section| DisplaySection {
            name: section.name.as_str().to_string(),
            steps: section
                .steps
                .iter()
                .map(|step| clip(&step.text, STEP_MAX_CHARS))
                .collect(),
        })
        .collect();

    DisplayPayload::new(clip(&recipe.title, TITLE_MAX_CHARS), sections, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Ingredient, Section, SectionName, Step};

    fn recipe_with(title: &str, sections: Vec<(SectionName, Vec<&str>)>) -> Recipe {
        let mut n = 0;
        Recipe {
            title: title.to_string(),
            sections: sections
                .into_iter()
                .map(|(name, texts)| Section {
                    name,
                    steps: texts
                        .into_iter()
                        .map(|text| {
                            n += 1;
                            Step::new(format!("step-{}", n), text)
                        })
                        .collect(),
                })
                .collect(),
            ingredients: vec![Ingredient {
                name: "salt".to_string(),
                quantity: Some("1 tsp".to_string()),
                notes: None,
            }],
        }
    }

    #[test]
    fn test_project_small_recipe() {
        let recipe = recipe_with(
            "Garlic Noodles",
            vec![
                (SectionName::Prep, vec!["Mince garlic"]),
                (SectionName::Cook, vec!["Boil noodles", "Fry garlic in butter"]),
            ],
        );
        let payload = project(&recipe);

        assert_eq!(payload.title, "Garlic Noodles");
        assert_eq!(payload.sections.len(), 2);
        assert_eq!(payload.sections[0].name, "Prep");
        assert_eq!(payload.sections[1].steps, vec!["Boil noodles", "Fry garlic in butter"]);
        assert_eq!(payload.step_count, 3);
        assert!(!payload.truncated);
    }

    #[test]
    fn test_project_omits_ingredients() {
        let recipe = recipe_with("Salted", vec![(SectionName::Cook, vec!["Season"])]);
        let body = project(&recipe).measure().serialized;
        assert!(!body.contains("ingredients"));
        assert!(!body.contains("salt\""));
    }

    #[test]
    fn test_project_clips_title_and_steps() {
        let long_title = "T".repeat(55);
        let long_step = "s".repeat(120);
        let recipe = recipe_with(&long_title, vec![(SectionName::Cook, vec![&long_step, "short"])]);
        let payload = project(&recipe);

        assert_eq!(payload.title.chars().count(), 40);
        assert_eq!(payload.sections[0].steps[0].chars().count(), 80);
        assert_eq!(payload.sections[0].steps[1], "short");
        // Clipping alone is not compression
        assert!(!payload.truncated);
    }

    #[test]
    fn test_project_clips_by_character() {
        let title = "é".repeat(50);
        let recipe = recipe_with(&title, vec![]);
        let payload = project(&recipe);
        assert_eq!(payload.title.chars().count(), 40);
        assert_eq!(payload.title.len(), 80);
    }

    #[test]
    fn test_project_keeps_empty_sections() {
        let recipe = recipe_with(
            "Empty",
            vec![(SectionName::Prep, vec![]), (SectionName::Cook, vec!["Heat"])],
        );
        let payload = project(&recipe);
        assert_eq!(payload.sections.len(), 2);
        assert!(payload.sections[0].steps.is_empty());
        assert_eq!(payload.step_count, 1);
    }
}
