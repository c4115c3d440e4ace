use std::io::{self, Write};

use prettytable::{Table, row};

use crate::cards::InsightCard;

pub const NO_INSIGHTS_NOTICE: &str = "No insights to display.";

/// One row per card; missing theme/sentiment shown as the placeholder
pub fn build_table(cards: &[InsightCard]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Theme", "Quotes", "Sentiment (Optional)"]);
    for card in cards {
        table.add_row(row![
            card.theme_or_placeholder(),
            card.joined_quotes(),
            card.sentiment_or_placeholder(),
        ]);
    }
    table
}

pub fn write_insights<W: Write>(cards: &[InsightCard], out: &mut W) -> io::Result<()> {
    if cards.is_empty() {
        writeln!(out, "{}", NO_INSIGHTS_NOTICE)?;
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "--- Generated Insight Cards ---")?;
    build_table(cards).print(out)?;
    Ok(())
}
