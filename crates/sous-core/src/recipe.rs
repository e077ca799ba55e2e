//! Structured recipe model.
//!
//! This is the shape returned by the transcript extraction service: a title,
//! ordered sections of steps, and the ingredients mentioned anywhere in the
//! transcript.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;

use crate::error::RecipeError;

/// Stage label for a group of steps
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SectionName {
    Prep,
    Marinate,
    Cook,
    Assemble,
}

impl SectionName {
    /// Get the label as it appears on the wire and on the display
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Prep => "Prep",
            SectionName::Marinate => "Marinate",
            SectionName::Cook => "Cook",
            SectionName::Assemble => "Assemble",
        }
    }

    /// List all section labels in execution order
    pub fn all() -> &'static [SectionName] {
        &[
            SectionName::Prep,
            SectionName::Marinate,
            SectionName::Cook,
            SectionName::Assemble,
        ]
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SectionName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prep" => Ok(SectionName::Prep),
            "marinate" => Ok(SectionName::Marinate),
            "cook" => Ok(SectionName::Cook),
            "assemble" => Ok(SectionName::Assemble),
            _ => Err(format!(
                "Unknown section: {}. Available: Prep, Marinate, Cook, Assemble",
                s
            )),
        }
    }
}

/// A single instruction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Unique within a recipe, e.g. "step-1"
    pub id: String,
    pub text: String,
    /// Checklist state, owned by the UI
    #[serde(default)]
    pub completed: bool,
}

impl Step {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub name: SectionName,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Prep notes like "diced" or "room temperature"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub title: String,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Total number of steps across all sections
    pub fn step_count(&self) -> usize {
        self.sections.iter().map(|s| s.steps.len()).sum()
    }

    /// Check the fields the display pipeline relies on.
    ///
    /// Empty step text is allowed; empty titles and missing or repeated
    /// step ids are not.
    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.title.trim().is_empty() {
            return Err(RecipeError::EmptyTitle);
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            for step in &section.steps {
                if step.id.trim().is_empty() {
                    return Err(RecipeError::EmptyStepId {
                        section: section.name,
                    });
                }
                if !seen.insert(step.id.as_str()) {
                    return Err(RecipeError::DuplicateStepId(step.id.clone()));
                }
            }
        }

        Ok(())
    }

    /// Parse a recipe from its JSON form
    pub fn from_json(json: &str) -> Result<Self, RecipeError> {
        serde_json::from_str(json).map_err(RecipeError::Parse)
    }

    /// Read a recipe as JSON from any reader (file, stdin)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RecipeError> {
        serde_json::from_reader(reader).map_err(RecipeError::Parse)
    }
}
