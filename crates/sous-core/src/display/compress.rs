//! Fitting a display payload into the webhook byte budget.
//!
//! Each [`Stage`] is a pure transform from one payload to a new one. The
//! [`Planner`] measures before the first stage and after every stage, and
//! stops at the first measurement that fits.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::measure::Measurement;
use super::payload::{DisplayPayload, DisplaySection, count_steps};
use super::{BYTE_BUDGET, COMPRESSED_STEP_MAX_CHARS, clip};

/// A lossy reduction applied to a payload that is over budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum Stage {
    /// Clip every step to `max_chars` characters
    ShortenSteps { max_chars: usize },
    /// Keep only the first `max_steps` steps, in display order
    CapSteps { max_steps: usize },
}

/// Stages run, in order, when a payload does not fit
pub const DEFAULT_STAGES: [Stage; 3] = [
    Stage::ShortenSteps {
        max_chars: COMPRESSED_STEP_MAX_CHARS,
    },
    Stage::CapSteps { max_steps: 8 },
    Stage::CapSteps { max_steps: 6 },
];

impl Stage {
    /// Produce the reduced payload. Always marks the result as truncated.
    pub fn apply(&self, payload: &DisplayPayload) -> DisplayPayload {
        let sections = match *self {
            Stage::ShortenSteps { max_chars } => shorten_steps(&payload.sections, max_chars),
            Stage::CapSteps { max_steps } => cap_steps(&payload.sections, max_steps),
        };

        DisplayPayload {
            title: payload.title.clone(),
            step_count: count_steps(&sections),
            sections,
            truncated: true,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ShortenSteps { max_chars } => write!(f, "shortened steps to {} chars", max_chars),
            Stage::CapSteps { max_steps } => write!(f, "{} steps", max_steps),
        }
    }
}

fn shorten_steps(sections: &[DisplaySection], max_chars: usize) -> Vec<DisplaySection> {
    sections
        .iter()
        .map(|section| DisplaySection {
            name: section.name.clone(),
            steps: section.steps.iter().map(|s| clip(s, max_chars)).collect(),
        })
        .collect()
}

/// Greedy prefix across sections. Sections left without steps are dropped.
fn cap_steps(sections: &[DisplaySection], max_steps: usize) -> Vec<DisplaySection> {
    let mut remaining = max_steps;
    sections
        .iter()
        .filter_map(|section| {
            if remaining == 0 {
                return None;
            }
            let steps: Vec<String> = section.steps.iter().take(remaining).cloned().collect();
            remaining -= steps.len();
            if steps.is_empty() {
                None
            } else {
                Some(DisplaySection {
                    name: section.name.clone(),
                    steps,
                })
            }
        })
        .collect()
}

/// Outcome of a compression run
#[derive(Debug, Clone)]
pub struct CompressionReport {
    pub payload: DisplayPayload,
    /// Measurement of `payload` as it will be sent
    pub measurement: Measurement,
    /// Stages that ran, in order (empty if the input already fit)
    pub stages: Vec<Stage>,
    /// False only when every stage ran and the body is still over budget
    pub fits: bool,
}

/// Ordered compression stages against a byte budget
#[derive(Debug, Clone)]
pub struct Planner {
    budget: usize,
    stages: Vec<Stage>,
}

impl Default for Planner {
    fn default() -> Self {
        Self {
            budget: BYTE_BUDGET,
            stages: DEFAULT_STAGES.to_vec(),
        }
    }
}

impl Planner {
    pub fn new(budget: usize, stages: Vec<Stage>) -> Self {
        Self { budget, stages }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Run the least aggressive sequence of stages that fits the budget.
    ///
    /// If every stage runs and the body is still too large, the most reduced
    /// payload is returned with `fits: false`.
    pub fn plan(&self, payload: DisplayPayload) -> CompressionReport {
        let measurement = payload.measure();
        if measurement.bytes <= self.budget {
            return CompressionReport {
                payload,
                measurement,
                stages: Vec::new(),
                fits: true,
            };
        }

        debug!(
            bytes = measurement.bytes,
            budget = self.budget,
            "payload over budget, compressing"
        );

        let mut current = payload;
        let mut measurement = measurement;
        let mut applied = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            current = stage.apply(&current);
            measurement = current.measure();
            applied.push(*stage);

            debug!(
                bytes = measurement.bytes,
                steps = current.step_count,
                "compressed ({})",
                stage
            );

            if measurement.bytes <= self.budget {
                return CompressionReport {
                    payload: current,
                    measurement,
                    stages: applied,
                    fits: true,
                };
            }
        }

        debug!(
            bytes = measurement.bytes,
            budget = self.budget,
            "compression stages exhausted, sending most reduced payload"
        );

        CompressionReport {
            payload: current,
            measurement,
            stages: applied,
            fits: false,
        }
    }

    pub fn compress(&self, payload: DisplayPayload) -> DisplayPayload {
        self.plan(payload).payload
    }
}

/// Fit `payload` into the 2kb webhook budget using the default stages.
///
/// A payload that already fits is returned unchanged, so running this twice
/// is the same as running it once.
pub fn compress(payload: DisplayPayload) -> DisplayPayload {
    Planner::default().compress(payload)
}
