//! Single-pass group-by-date primitive shared by both summary operations.

use crate::model::calendar_date::CalendarDate;
use crate::model::chicken::ChickenId;
use crate::model::daily_summary::DailySummary;
use crate::model::egg_record::EggRecord;
use std::collections::{BTreeMap, BTreeSet};

/// Running totals for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayTally {
    pub total_eggs: u64,
    /// Repeat contributions from one chicken collapse to one entry.
    pub chickens: BTreeSet<ChickenId>,
}

impl DayTally {
    fn add(&mut self, record: &EggRecord) {
        self.total_eggs += u64::from(record.quantity);
        self.chickens.insert(record.chicken_id);
    }

    pub fn into_summary(self, date: CalendarDate) -> DailySummary {
        DailySummary {
            date,
            total_eggs: self.total_eggs,
            chickens_laid: self.chickens.len() as u64,
        }
    }
}

/// Accumulates quantity and distinct chickens per date in one pass.
pub fn group_by_date<'a, I>(records: I) -> BTreeMap<CalendarDate, DayTally>
where
    I: IntoIterator<Item = &'a EggRecord>,
{
    let mut groups: BTreeMap<CalendarDate, DayTally> = BTreeMap::new();
    for record in records {
        groups.entry(record.date).or_default().add(record);
    }
    groups
}

/// Projects grouped tallies to summaries, most recent date first.
pub fn summaries_descending(groups: BTreeMap<CalendarDate, DayTally>) -> Vec<DailySummary> {
    groups
        .into_iter()
        .rev()
        .map(|(date, tally)| tally.into_summary(date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{group_by_date, summaries_descending};
    use crate::model::calendar_date::CalendarDate;
    use crate::model::egg_record::EggRecord;

    fn record(id: i64, chicken_id: i64, date: &str, quantity: u32) -> EggRecord {
        EggRecord {
            id,
            chicken_id,
            date: CalendarDate::parse(date).unwrap(),
            quantity,
            created_at: 0,
        }
    }

    #[test]
    fn repeated_chicken_counts_once_but_sums_every_time() {
        let records = vec![
            record(1, 7, "2024-01-15", 2),
            record(2, 7, "2024-01-15", 3),
        ];
        let groups = group_by_date(&records);
        let tally = &groups[&CalendarDate::parse("2024-01-15").unwrap()];
        assert_eq!(tally.total_eggs, 5);
        assert_eq!(tally.chickens.len(), 1);
    }

    #[test]
    fn summaries_are_descending_without_duplicates() {
        let records = vec![
            record(1, 1, "2024-01-13", 1),
            record(2, 2, "2024-01-15", 4),
            record(3, 1, "2024-01-14", 2),
            record(4, 3, "2024-01-15", 0),
        ];
        let summaries = summaries_descending(group_by_date(&records));
        let dates: Vec<String> = summaries.iter().map(|s| s.date.to_string()).collect();
        assert_eq!(dates, ["2024-01-15", "2024-01-14", "2024-01-13"]);
        assert_eq!(summaries[0].total_eggs, 4);
        assert_eq!(summaries[0].chickens_laid, 2);
    }

    #[test]
    fn totals_do_not_truncate_at_u32() {
        let records = vec![
            record(1, 1, "2024-01-15", u32::MAX),
            record(2, 2, "2024-01-15", u32::MAX),
        ];
        let summaries = summaries_descending(group_by_date(&records));
        assert_eq!(summaries[0].total_eggs, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_date(&Vec::<EggRecord>::new()).is_empty());
    }
}
