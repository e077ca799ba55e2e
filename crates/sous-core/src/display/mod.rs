//! TRMNL display payload: projection, measurement and compression.
//!
//! TRMNL custom plugins accept webhook bodies of at most 2kb. A recipe is
//! first projected onto the display schema (ingredients dropped, title and
//! steps clipped), then run through progressively more aggressive
//! compression stages until the serialized body fits:
//!
//! 1. Shorten step text to 60 chars
//! 2. Keep the first 8 steps
//! 3. Keep the first 6 steps
//!
//! The body sent on the wire has the shape expected by Liquid templates:
//!
//! ```json
//! {"merge_variables":{"recipe_title":"…","sections":[{"name":"Cook","steps":["…"]}],"step_count":1,"truncated":false}}
//! ```

mod compress;
mod measure;
mod payload;
mod project;

pub use compress::{CompressionReport, DEFAULT_STAGES, Planner, Stage, compress};
pub use measure::{Measurement, measure};
pub use payload::{DisplayPayload, DisplaySection};
pub use project::project;

use crate::recipe::Recipe;

/// Maximum webhook body size accepted by TRMNL, in UTF-8 bytes
pub const BYTE_BUDGET: usize = 2048;

/// Title length on the display, in characters
pub const TITLE_MAX_CHARS: usize = 40;

/// Step length after projection, in characters
pub const STEP_MAX_CHARS: usize = 80;

/// Step length once compression kicks in, in characters
pub const COMPRESSED_STEP_MAX_CHARS: usize = 60;

/// Project and compress `recipe` without sending anything.
///
/// The report's measurement holds the exact body a push would send.
pub fn preview(recipe: &Recipe) -> CompressionReport {
    Planner::default().plan(project(recipe))
}

/// Take at most `max_chars` characters from the front of `text`.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub(crate) fn clip(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
