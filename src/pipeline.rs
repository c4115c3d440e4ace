//! Request → present → evaluate, as run by the binary

use std::io::Write;

use tracing::info;

use crate::clients::GenerativeModel;
use crate::error::Result;
use crate::evaluation::{EvaluationReport, evaluate_insights};
use crate::render::write_insights;
use crate::synthesis::{SynthesisOutcome, request_insights};

/// Run one synthesis over cleaned feedback and write the table then the metrics.
///
/// Returns `Ok(None)` without writing anything when the model returned an empty
/// array. An unparseable reply becomes `SynthError::UnparseableReply`.
pub async fn run<W: Write>(
    model: &dyn GenerativeModel,
    feedback: &[String],
    num_cards: usize,
    out: &mut W,
) -> Result<Option<EvaluationReport>> {
    let outcome = request_insights(model, feedback, num_cards).await?;
    if let SynthesisOutcome::Cards(cards) = &outcome
        && cards.is_empty()
    {
        info!("Model returned no insight cards; nothing to display");
        return Ok(None);
    }

    let cards = outcome.into_cards()?;
    write_insights(&cards, &mut *out)?;
    let report = evaluate_insights(&cards, num_cards, &mut *out)?;
    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::CannedModel;
    use crate::error::SynthError;

    fn feedback() -> Vec<String> {
        vec!["Privacy is my biggest concern".to_string()]
    }

    #[tokio::test]
    async fn empty_array_skips_display_and_evaluation() {
        let model = CannedModel::new("[]");
        let mut out = Vec::new();
        let report = run(&model, &feedback(), 3, &mut out).await.unwrap();
        assert!(report.is_none());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn garbage_reply_is_an_unparseable_error() {
        let model = CannedModel::new("no JSON here");
        let mut out = Vec::new();
        let err = run(&model, &feedback(), 3, &mut out).await.unwrap_err();
        match err {
            SynthError::UnparseableReply { raw } => assert_eq!(raw, "no JSON here"),
            other => panic!("expected UnparseableReply, got {other:?}"),
        }
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn table_is_written_before_metrics() {
        let model = CannedModel::new(
            r#"[{"theme":"Privacy","quotes":["Privacy is my biggest concern"],"sentiment":"negative"}]"#,
        );
        let mut out = Vec::new();
        let report = run(&model, &feedback(), 3, &mut out).await.unwrap().unwrap();
        assert_eq!((report.generated, report.well_formed, report.expected), (1, 1, 3));

        let text = String::from_utf8(out).unwrap();
        let table_at = text.find("--- Generated Insight Cards ---").unwrap();
        let metrics_at = text.find("--- Evaluation Metrics ---").unwrap();
        assert!(table_at < metrics_at);
        assert!(text.contains("Number of Insights Generated: 1/3"));
        assert!(text.contains("Number of Non-Empty Insights (Theme & Quotes): 1/3"));
    }
}
