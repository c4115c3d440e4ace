use insight_synth::clients::CannedModel;
use insight_synth::evaluation::evaluate;
use insight_synth::feedback::{preprocess, sample_feedback};
use insight_synth::render::{build_table, write_insights};
use insight_synth::synthesis::{SynthesisOutcome, request_insights};

const PRIVACY_REPLY: &str =
    r#"[{"theme":"Privacy","quotes":["Privacy is my biggest concern"],"sentiment":"negative"}]"#;

#[tokio::test]
async fn single_card_reply_reports_one_of_three() {
    let model = CannedModel::new(PRIVACY_REPLY);
    let feedback = preprocess(&sample_feedback());

    let outcome = request_insights(&model, &feedback, 3).await.unwrap();
    let cards = outcome.cards();
    assert_eq!(cards.len(), 1);

    let report = evaluate(cards, 3);
    let metrics = report.to_string();
    assert!(metrics.contains("Number of Insights Generated: 1/3"));
    assert!(metrics.contains("Number of Non-Empty Insights (Theme & Quotes): 1/3"));

    let table = build_table(cards);
    assert_eq!(table.len(), 1);
    let mut buf = Vec::new();
    write_insights(cards, &mut buf).unwrap();
    let rendered = String::from_utf8(buf).unwrap();
    for field in ["Privacy", "Privacy is my biggest concern", "negative"] {
        assert!(rendered.contains(field), "table missing {field}:\n{rendered}");
    }
}

#[tokio::test]
async fn prompt_carries_the_whole_cleaned_corpus() {
    let model = CannedModel::new("[]");
    let feedback = preprocess(&["  Need better documentation.  ", "\tThe UI is very intuitive.\n"]);

    let outcome = request_insights(&model, &feedback, 3).await.unwrap();
    assert_eq!(outcome, SynthesisOutcome::Cards(vec![]));

    let prompt = model.last_prompt().unwrap();
    assert!(prompt.contains("Need better documentation. The UI is very intuitive."));
}

#[tokio::test]
async fn unparseable_reply_degrades_without_error() {
    let model = CannedModel::new("Sure! Here are three themes: privacy, pricing and docs.");
    let outcome = request_insights(&model, &sample_feedback(), 3).await.unwrap();

    match &outcome {
        SynthesisOutcome::Unparseable { raw } => assert!(raw.starts_with("Sure!")),
        other => panic!("expected unparseable outcome, got {other:?}"),
    }
    assert!(outcome.cards().is_empty());

    let mut buf = Vec::new();
    write_insights(outcome.cards(), &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "No insights to display.\n");
}

#[tokio::test]
async fn fenced_partial_cards_are_counted_honestly() {
    let reply = "```json\n[\n  {\"theme\": \"Integrations\", \"quotes\": [\"If this works with Gmail and Slack...\"], \"sentiment\": \"positive\"},\n  {\"theme\": \"Pricing\", \"quotes\": []},\n  {\"quotes\": [\"Need better documentation.\"]}\n]\n```";
    let model = CannedModel::new(reply);

    let outcome = request_insights(&model, &sample_feedback(), 3).await.unwrap();
    let report = evaluate(outcome.cards(), 3);
    assert_eq!(report.generated, 3);
    assert_eq!(report.well_formed, 1);

    let mut buf = Vec::new();
    write_insights(outcome.cards(), &mut buf).unwrap();
    let rendered = String::from_utf8(buf).unwrap();
    assert!(rendered.contains("N/A"));
    assert!(rendered.contains("Integrations"));
}
