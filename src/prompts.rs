//! Instruction template for insight-card synthesis

/// JSON shape the model is instructed to return
pub const CARD_SCHEMA_EXAMPLE: &str = r#"[
  {
    "theme": "...",
    "quotes": ["...", "..."],
    "sentiment": "positive | negative | neutral (optional)"
  }
]"#;

/// Join the cleaned feedback into one block and embed it with the card count
pub fn build_insight_prompt<S: AsRef<str>>(feedback: &[S], num_cards: usize) -> String {
    let corpus = feedback
        .iter()
        .map(|f| f.as_ref())
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "You are an insight engine that analyzes user feedback and extracts its key themes.\n\
         Read the survey responses below and produce {num_cards} distinct insight cards.\n\
         Each card needs a concise title naming the main theme and 1-2 supporting quotes \
         taken verbatim from the feedback that best illustrate it.\n\
         Optionally add a sentiment for the theme (positive, negative, or neutral) based on \
         its supporting quotes.\n\
         \n\
         Survey Responses:\n\
         ```\n\
         {corpus}\n\
         ```\n\
         \n\
         Respond with only a JSON array of insight card objects, using exactly this structure:\n\
         ```json\n\
         {schema}\n\
         ```\n",
        num_cards = num_cards,
        corpus = corpus,
        schema = CARD_SCHEMA_EXAMPLE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_is_joined_with_single_spaces() {
        let prompt = build_insight_prompt(&["Need better documentation.", "The UI is very intuitive."], 3);
        assert!(prompt.contains("Need better documentation. The UI is very intuitive."));
    }

    #[test]
    fn card_count_is_substituted() {
        let prompt = build_insight_prompt(&["x"], 5);
        assert!(prompt.contains("produce 5 distinct insight cards"));
    }

    #[test]
    fn schema_names_every_field() {
        let prompt = build_insight_prompt::<&str>(&[], 3);
        for field in ["\"theme\"", "\"quotes\"", "\"sentiment\""] {
            assert!(prompt.contains(field), "missing {field} in prompt");
        }
        assert!(prompt.contains("JSON array"));
    }
}
