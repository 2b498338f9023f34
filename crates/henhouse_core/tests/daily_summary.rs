use henhouse_core::db::open_db_in_memory;
use henhouse_core::{
    CalendarDate, Chicken, ChickenService, Clock, DailySummary, EggRecordPatch, EggRecordService,
    FixedClock, SqliteChickenRepository, SqliteEggRecordRepository, SummaryEngine, SummaryError,
    UtcClock,
};
use rusqlite::Connection;

const TODAY: &str = "2024-01-15";

fn day(value: &str) -> CalendarDate {
    CalendarDate::parse(value).unwrap()
}

fn flock(conn: &Connection, names: &[&str]) -> Vec<Chicken> {
    let service = ChickenService::new(SqliteChickenRepository::try_new(conn).unwrap());
    names
        .iter()
        .map(|name| service.register(*name, "Leghorn").unwrap())
        .collect()
}

fn lay(conn: &Connection, chicken: &Chicken, date: CalendarDate, quantity: u32) {
    let service = EggRecordService::new(SqliteEggRecordRepository::try_new(conn).unwrap());
    service.record(chicken.id, date, quantity).unwrap();
}

fn engine(conn: &Connection) -> SummaryEngine<SqliteEggRecordRepository<'_>, FixedClock> {
    SummaryEngine::with_clock(
        SqliteEggRecordRepository::try_new(conn).unwrap(),
        FixedClock(day(TODAY)),
    )
}

#[test]
fn daily_summary_sums_quantities_and_counts_distinct_chickens() {
    let conn = open_db_in_memory().unwrap();
    let hens = flock(&conn, &["A", "B", "C"]);
    lay(&conn, &hens[0], day("2024-01-15"), 2);
    lay(&conn, &hens[1], day("2024-01-15"), 1);
    lay(&conn, &hens[2], day("2024-01-15"), 3);
    lay(&conn, &hens[0], day("2024-01-14"), 7);

    let summary = engine(&conn).daily_summary(day("2024-01-15")).unwrap();
    assert_eq!(
        summary,
        DailySummary {
            date: day("2024-01-15"),
            total_eggs: 6,
            chickens_laid: 3,
        }
    );
}

#[test]
fn repeated_records_for_one_chicken_count_it_once() {
    let conn = open_db_in_memory().unwrap();
    let hens = flock(&conn, &["A"]);
    lay(&conn, &hens[0], day("2024-01-15"), 2);
    lay(&conn, &hens[0], day("2024-01-15"), 3);

    let summary = engine(&conn).daily_summary(day("2024-01-15")).unwrap();
    assert_eq!(summary.total_eggs, 5);
    assert_eq!(summary.chickens_laid, 1);
}

#[test]
fn day_without_records_is_a_zero_summary() {
    let conn = open_db_in_memory().unwrap();
    let hens = flock(&conn, &["A"]);
    lay(&conn, &hens[0], day("2024-01-14"), 4);

    let summary = engine(&conn).daily_summary(day("2024-02-01")).unwrap();
    assert_eq!(summary, DailySummary::empty(day("2024-02-01")));
}

#[test]
fn zero_quantity_record_still_counts_the_chicken() {
    let conn = open_db_in_memory().unwrap();
    let hens = flock(&conn, &["A"]);
    lay(&conn, &hens[0], day("2024-01-15"), 0);

    let summary = engine(&conn).daily_summary(day("2024-01-15")).unwrap();
    assert_eq!(summary.total_eggs, 0);
    assert_eq!(summary.chickens_laid, 1);
}

#[test]
fn recent_summaries_are_sparse_bounded_and_descending() {
    let conn = open_db_in_memory().unwrap();
    let hens = flock(&conn, &["A", "B"]);
    lay(&conn, &hens[0], day("2024-01-15"), 2);
    lay(&conn, &hens[1], day("2024-01-15"), 1);
    lay(&conn, &hens[0], day("2024-01-14"), 3);
    lay(&conn, &hens[1], day("2024-01-05"), 9);

    let summaries = engine(&conn).recent_summaries(Some(7)).unwrap();
    assert_eq!(
        summaries,
        vec![
            DailySummary {
                date: day("2024-01-15"),
                total_eggs: 3,
                chickens_laid: 2,
            },
            DailySummary {
                date: day("2024-01-14"),
                total_eggs: 3,
                chickens_laid: 1,
            },
        ]
    );
}

#[test]
fn window_edges_are_inclusive_and_future_days_excluded() {
    let conn = open_db_in_memory().unwrap();
    let hens = flock(&conn, &["A"]);
    lay(&conn, &hens[0], day("2024-01-13"), 1);
    lay(&conn, &hens[0], day("2024-01-12"), 1);
    lay(&conn, &hens[0], day("2024-01-16"), 1);

    let summaries = engine(&conn).recent_summaries(Some(3)).unwrap();
    let dates: Vec<CalendarDate> = summaries.iter().map(|s| s.date).collect();
    assert_eq!(dates, vec![day("2024-01-13")]);

    let window = 5;
    let summaries = engine(&conn).recent_summaries(Some(window)).unwrap();
    assert!(summaries.len() <= window as usize);
    assert!(summaries
        .windows(2)
        .all(|pair| pair[0].date > pair[1].date));
    assert!(summaries
        .iter()
        .all(|s| day("2024-01-11") <= s.date && s.date <= day(TODAY)));
}

#[test]
fn default_window_covers_seven_days() {
    let conn = open_db_in_memory().unwrap();
    let hens = flock(&conn, &["A"]);
    lay(&conn, &hens[0], day("2024-01-09"), 1);
    lay(&conn, &hens[0], day("2024-01-08"), 1);

    let summaries = engine(&conn).recent_summaries(None).unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].date, day("2024-01-09"));
}

#[test]
fn empty_store_yields_empty_series() {
    let conn = open_db_in_memory().unwrap();
    assert!(engine(&conn).recent_summaries(Some(30)).unwrap().is_empty());
}

#[test]
fn non_positive_window_fails_with_invalid_window_size() {
    let conn = open_db_in_memory().unwrap();
    let engine = engine(&conn);

    assert!(matches!(
        engine.recent_summaries(Some(0)),
        Err(SummaryError::InvalidWindowSize(0))
    ));
    assert!(matches!(
        engine.recent_summaries(Some(-7)),
        Err(SummaryError::InvalidWindowSize(-7))
    ));
}

#[test]
fn summaries_reflect_current_records_and_repeat_identically() {
    let conn = open_db_in_memory().unwrap();
    let hens = flock(&conn, &["A"]);
    let eggs = EggRecordService::new(SqliteEggRecordRepository::try_new(&conn).unwrap());
    let record = eggs.record(hens[0].id, day("2024-01-15"), 2).unwrap();

    let engine = engine(&conn);
    let first = engine.recent_summaries(None).unwrap();
    assert_eq!(engine.recent_summaries(None).unwrap(), first);
    assert_eq!(
        engine.daily_summary(day("2024-01-15")).unwrap(),
        engine.daily_summary(day("2024-01-15")).unwrap()
    );

    eggs.update(
        record.id,
        &EggRecordPatch {
            date: Some(day("2024-01-14")),
            ..EggRecordPatch::default()
        },
    )
    .unwrap();
    assert_eq!(
        engine.daily_summary(day("2024-01-15")).unwrap(),
        DailySummary::empty(day("2024-01-15"))
    );
    assert_eq!(engine.recent_summaries(None).unwrap()[0].date, day("2024-01-14"));
}

#[test]
fn utc_clock_window_ends_on_current_utc_day() {
    let conn = open_db_in_memory().unwrap();
    let hens = flock(&conn, &["A"]);
    let seeded_on = UtcClock.today();
    lay(&conn, &hens[0], seeded_on, 1);
    lay(&conn, &hens[0], seeded_on.days_before(1).unwrap(), 1);
    lay(&conn, &hens[0], seeded_on.days_before(10).unwrap(), 1);

    let engine = SummaryEngine::new(SqliteEggRecordRepository::try_new(&conn).unwrap());
    // Retry if the call straddles UTC midnight. The expected dates hold
    // whether the engine saw `seeded_on` or the day after it.
    let (today, summaries) = loop {
        let before = UtcClock.today();
        let summaries = engine.recent_summaries(Some(7)).unwrap();
        if UtcClock.today() == before {
            break (before, summaries);
        }
    };

    assert!(today == seeded_on || Some(today) == seeded_on.days_after(1));
    let dates: Vec<CalendarDate> = summaries.iter().map(|s| s.date).collect();
    assert_eq!(dates, vec![seeded_on, seeded_on.days_before(1).unwrap()]);
}
