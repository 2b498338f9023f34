use henhouse_core::db::open_db_in_memory;
use henhouse_core::{
    CalendarDate, ChickenService, EggRecordPatch, EggRecordQuery, EggRecordRepository,
    EggRecordService, NewEggRecord, RepoError, SqliteChickenRepository, SqliteEggRecordRepository,
};
use rusqlite::Connection;

fn day(value: &str) -> CalendarDate {
    CalendarDate::parse(value).unwrap()
}

fn register(conn: &Connection, name: &str) -> i64 {
    let service = ChickenService::new(SqliteChickenRepository::try_new(conn).unwrap());
    service.register(name, "Leghorn").unwrap().id
}

#[test]
fn record_for_unknown_chicken_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEggRecordRepository::try_new(&conn).unwrap();

    let err = repo
        .create_egg_record(&NewEggRecord {
            chicken_id: 7,
            date: day("2024-01-15"),
            quantity: 1,
        })
        .unwrap_err();
    assert!(matches!(err, RepoError::ChickenNotFound(7)));
}

#[test]
fn same_chicken_and_day_are_stored_separately() {
    let conn = open_db_in_memory().unwrap();
    let hen = register(&conn, "Henrietta");
    let service = EggRecordService::new(SqliteEggRecordRepository::try_new(&conn).unwrap());

    let first = service.record(hen, day("2024-01-15"), 2).unwrap();
    let second = service.record(hen, day("2024-01-15"), 3).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(first.date, day("2024-01-15"));
    assert_eq!(first.quantity, 2);

    let listed = service.list_by_chicken(hen).unwrap();
    assert_eq!(listed, vec![first, second]);
}

#[test]
fn list_filters_by_inclusive_date_range_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let hen = register(&conn, "Henrietta");
    let service = EggRecordService::new(SqliteEggRecordRepository::try_new(&conn).unwrap());

    for date in ["2024-01-10", "2024-01-12", "2024-01-14", "2024-01-16"] {
        service.record(hen, day(date), 1).unwrap();
    }

    let bounded = service
        .list(&EggRecordQuery::between(day("2024-01-12"), day("2024-01-14")))
        .unwrap();
    let dates: Vec<String> = bounded.iter().map(|r| r.date.to_string()).collect();
    assert_eq!(dates, ["2024-01-14", "2024-01-12"]);

    let open_ended = service
        .list(&EggRecordQuery {
            start_date: Some(day("2024-01-14")),
            end_date: None,
        })
        .unwrap();
    assert_eq!(open_ended.len(), 2);

    assert_eq!(service.list(&EggRecordQuery::default()).unwrap().len(), 4);
}

#[test]
fn update_applies_patch_and_checks_new_chicken() {
    let conn = open_db_in_memory().unwrap();
    let hen = register(&conn, "Henrietta");
    let other = register(&conn, "Clucky");
    let service = EggRecordService::new(SqliteEggRecordRepository::try_new(&conn).unwrap());
    let created = service.record(hen, day("2024-01-15"), 2).unwrap();

    let moved = service
        .update(
            created.id,
            &EggRecordPatch {
                chicken_id: Some(other),
                quantity: Some(4),
                ..EggRecordPatch::default()
            },
        )
        .unwrap();
    assert_eq!(moved.chicken_id, other);
    assert_eq!(moved.quantity, 4);
    assert_eq!(moved.date, created.date);
    assert_eq!(service.get(created.id).unwrap(), Some(moved.clone()));

    let err = service
        .update(
            created.id,
            &EggRecordPatch {
                chicken_id: Some(999),
                ..EggRecordPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::ChickenNotFound(999)));

    let unchanged = service
        .update(created.id, &EggRecordPatch::default())
        .unwrap();
    assert_eq!(unchanged, moved);
}

#[test]
fn update_and_delete_unknown_record() {
    let conn = open_db_in_memory().unwrap();
    let hen = register(&conn, "Henrietta");
    let service = EggRecordService::new(SqliteEggRecordRepository::try_new(&conn).unwrap());

    let err = service
        .update(
            55,
            &EggRecordPatch {
                quantity: Some(1),
                ..EggRecordPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::EggRecordNotFound(55)));
    assert!(!service.remove(55).unwrap());

    let created = service.record(hen, day("2024-01-15"), 1).unwrap();
    assert!(service.remove(created.id).unwrap());
    assert!(service.get(created.id).unwrap().is_none());
}

#[test]
fn corrupt_rows_are_reported_instead_of_masked() {
    let conn = open_db_in_memory().unwrap();
    let hen = register(&conn, "Henrietta");
    conn.execute(
        "INSERT INTO egg_records (chicken_id, date, quantity) VALUES (?1, '2024-13-01', 1);",
        [hen],
    )
    .unwrap();

    let repo = SqliteEggRecordRepository::try_new(&conn).unwrap();
    let err = repo
        .list_egg_records(&EggRecordQuery::default())
        .unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
