//! Generative-AI features backed by Google Gemini
//!
//! - coaching insights from goals and the recent trend
//! - macro estimates from meal photos
//! - daily goal recommendations from biometrics

pub mod gemini;
pub mod image;
pub mod prompt;

use thiserror::Error;

pub use gemini::{GeminiClient, Part};
pub use image::InlineImage;
pub use prompt::{combine_suggestions, GoalRecommendation, MacroSuggestion};

#[derive(Debug, Error)]
pub enum InsightsError {
    #[error("GEMINI_API_KEY is not set; AI features are disabled")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    RateLimited(String),

    #[error("Gemini returned no content")]
    EmptyResponse,

    #[error("Could not parse Gemini reply: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Set your goals before requesting insights")]
    NoProfile,

    #[error("No meals logged in the last {0} days")]
    NoData(u32),
}

pub type InsightsResult<T> = Result<T, InsightsError>;
