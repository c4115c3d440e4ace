//! Completeness metrics for a batch of insight cards

use std::fmt;
use std::io::{self, Write};

use tracing::warn;

use crate::cards::InsightCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationReport {
    pub generated: usize,
    pub well_formed: usize,
    pub expected: usize,
    /// Cards whose sentiment is present but not positive/negative/neutral
    pub unrecognized_sentiment: usize,
}

pub fn evaluate(cards: &[InsightCard], expected: usize) -> EvaluationReport {
    EvaluationReport {
        generated: cards.len(),
        well_formed: cards.iter().filter(|c| c.is_well_formed()).count(),
        expected,
        unrecognized_sentiment: cards
            .iter()
            .filter(|c| c.has_unrecognized_sentiment())
            .count(),
    }
}

/// Evaluate and write the metrics block
pub fn evaluate_insights<W: Write>(
    cards: &[InsightCard],
    expected: usize,
    out: &mut W,
) -> io::Result<EvaluationReport> {
    let report = evaluate(cards, expected);
    if report.unrecognized_sentiment > 0 {
        warn!(
            "{} card(s) carry a sentiment outside positive/negative/neutral",
            report.unrecognized_sentiment
        );
    }
    writeln!(out, "{}", report)?;
    Ok(report)
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "--- Evaluation Metrics ---")?;
        writeln!(
            f,
            "Number of Insights Generated: {}/{}",
            self.generated, self.expected
        )?;
        writeln!(
            f,
            "Number of Non-Empty Insights (Theme & Quotes): {}/{}",
            self.well_formed, self.expected
        )?;
        writeln!(f)?;
        write!(
            f,
            "Note: Quote relevance and sentiment consistency require manual inspection."
        )
    }
}
