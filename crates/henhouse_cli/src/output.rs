//! Plain-text and JSON rendering for command results.

use henhouse_core::{Chicken, DailySummary, EggRecord};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Prints `value` as pretty JSON, or `text` verbatim.
pub fn print_value<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => println!("{text}"),
    }
    Ok(())
}

pub fn print_chicken(format: OutputFormat, chicken: &Chicken) -> anyhow::Result<()> {
    print_value(format, chicken, chicken_line(chicken))
}

pub fn print_chickens(format: OutputFormat, chickens: &[Chicken]) -> anyhow::Result<()> {
    let text = lines_or(chickens.iter().map(chicken_line), "no chickens registered");
    print_value(format, &chickens, text)
}

pub fn print_egg_record(format: OutputFormat, record: &EggRecord) -> anyhow::Result<()> {
    print_value(format, record, egg_record_line(record))
}

pub fn print_egg_records(format: OutputFormat, records: &[EggRecord]) -> anyhow::Result<()> {
    let text = lines_or(records.iter().map(egg_record_line), "no egg records");
    print_value(format, &records, text)
}

pub fn print_summary(format: OutputFormat, summary: &DailySummary) -> anyhow::Result<()> {
    print_value(format, summary, summary_line(summary))
}

pub fn print_summaries(format: OutputFormat, summaries: &[DailySummary]) -> anyhow::Result<()> {
    let text = lines_or(summaries.iter().map(summary_line), "no eggs in this window");
    print_value(format, &summaries, text)
}

pub fn print_removed(
    format: OutputFormat,
    kind: &str,
    id: i64,
    removed: bool,
) -> anyhow::Result<()> {
    let text = if removed {
        format!("removed {kind} #{id}")
    } else {
        format!("{kind} #{id} not found")
    };
    print_value(format, &json!({ "success": removed }), text)
}

fn chicken_line(chicken: &Chicken) -> String {
    format!("#{} {} ({})", chicken.id, chicken.name, chicken.breed)
}

fn egg_record_line(record: &EggRecord) -> String {
    format!(
        "#{} {} chicken #{}: {} egg(s)",
        record.id, record.date, record.chicken_id, record.quantity
    )
}

fn summary_line(summary: &DailySummary) -> String {
    format!(
        "{}: {} egg(s) from {} chicken(s)",
        summary.date, summary.total_eggs, summary.chickens_laid
    )
}

fn lines_or(lines: impl Iterator<Item = String>, empty: &str) -> String {
    let joined = lines.collect::<Vec<_>>().join("\n");
    if joined.is_empty() {
        empty.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::{lines_or, summary_line};
    use henhouse_core::{CalendarDate, DailySummary};

    #[test]
    fn summary_line_names_date_and_counts() {
        let summary = DailySummary {
            date: CalendarDate::parse("2024-01-15").unwrap(),
            total_eggs: 6,
            chickens_laid: 3,
        };
        assert_eq!(
            summary_line(&summary),
            "2024-01-15: 6 egg(s) from 3 chicken(s)"
        );
    }

    #[test]
    fn empty_listing_uses_placeholder() {
        assert_eq!(lines_or(std::iter::empty(), "nothing"), "nothing");
        assert_eq!(
            lines_or(["a".to_string(), "b".to_string()].into_iter(), "nothing"),
            "a\nb"
        );
    }
}
