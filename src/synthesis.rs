use serde_json::Value;
use tracing::{error, info, warn};

use crate::cards::InsightCard;
use crate::clients::GenerativeModel;
use crate::error::{Result, SynthError};
use crate::prompts::build_insight_prompt;

pub use crate::config::DEFAULT_NUM_CARDS;

/// What came back from one synthesis call
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisOutcome {
    /// The reply was a JSON array; may legitimately be empty
    Cards(Vec<InsightCard>),
    /// The reply could not be read as a JSON array
    Unparseable { raw: String },
}

impl SynthesisOutcome {
    pub fn cards(&self) -> &[InsightCard] {
        match self {
            SynthesisOutcome::Cards(cards) => cards,
            SynthesisOutcome::Unparseable { .. } => &[],
        }
    }

    /// Surface an unparseable reply as an error for callers that need one
    pub fn into_cards(self) -> Result<Vec<InsightCard>> {
        match self {
            SynthesisOutcome::Cards(cards) => Ok(cards),
            SynthesisOutcome::Unparseable { raw } => Err(SynthError::UnparseableReply { raw }),
        }
    }
}

/// Ask the model for `num_cards` insight cards over the cleaned feedback.
///
/// Transport and provider failures are returned as errors. A reply that is not
/// a JSON array is not an error: it comes back as [`SynthesisOutcome::Unparseable`].
pub async fn request_insights<S: AsRef<str>>(
    model: &dyn GenerativeModel,
    feedback: &[S],
    num_cards: usize,
) -> Result<SynthesisOutcome> {
    if num_cards == 0 {
        return Err(SynthError::Validation {
            message: "num_cards must be at least 1".to_string(),
        });
    }

    let prompt = build_insight_prompt(feedback, num_cards);
    info!(
        "Requesting {} insight cards from {} ({} feedback items)",
        num_cards,
        model.model_name(),
        feedback.len()
    );

    let reply = model.generate(&prompt).await?;
    let outcome = parse_insight_reply(&reply);

    match &outcome {
        SynthesisOutcome::Cards(cards) if cards.len() != num_cards => {
            warn!(
                "Model returned {} insight cards, expected {}",
                cards.len(),
                num_cards
            );
        }
        SynthesisOutcome::Cards(_) => {}
        SynthesisOutcome::Unparseable { raw } => {
            error!("Error decoding JSON response: {}", raw);
        }
    }
    Ok(outcome)
}

/// Parse a model reply as a JSON array of cards, tolerating one Markdown fence
pub fn parse_insight_reply(text: &str) -> SynthesisOutcome {
    let body = strip_code_fence(text);
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => {
            SynthesisOutcome::Cards(items.iter().map(InsightCard::from_value).collect())
        }
        _ => SynthesisOutcome::Unparseable {
            raw: text.to_string(),
        },
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
