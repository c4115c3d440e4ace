//! Synthesizes user feedback into themed insight cards using a hosted
//! generative model, then reports them as a console table with basic
//! completeness metrics.

pub mod cards;
pub mod clients;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod feedback;
pub mod pipeline;
pub mod prompts;
pub mod render;
pub mod synthesis;

pub use cards::{InsightCard, Sentiment};
pub use error::{Result, SynthError};
pub use synthesis::{SynthesisOutcome, request_insights};
