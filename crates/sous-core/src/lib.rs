//! Fit voice-parsed recipes onto a TRMNL e-paper display.
//!
//! - [`recipe`]: the structured recipe produced by transcript extraction
//! - [`display`]: projection onto the display schema and byte-budget compression
//! - [`delivery`]: the single webhook push, with failures reported as warnings
//! - [`settings`]: persisted webhook configuration

pub mod delivery;
pub mod display;
pub mod error;
pub mod recipe;
pub mod settings;

pub use delivery::{DeliveryOutcome, DeliveryResult, PushConfig, push};
pub use display::{
    BYTE_BUDGET, CompressionReport, DisplayPayload, DisplaySection, Measurement, compress,
    measure, preview, project,
};
pub use error::{RecipeError, SettingsError, TransportError};
pub use recipe::{Ingredient, Recipe, Section, SectionName, Step};
pub use settings::Settings;
