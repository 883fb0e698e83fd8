use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use ledger::{Amount, Ledger, LedgerError};

fn ledger_path() -> std::path::PathBuf {
    let root =
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_ledgers");
    std::fs::create_dir_all(&root).unwrap();
    root.join(format!("ledger_{}.csv", Uuid::new_v4()))
}

fn ts(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn missing_file_initializes_empty() {
    let path = ledger_path();
    let ledger = Ledger::open(&path).unwrap();

    assert!(ledger.is_empty());
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.trim_end(), "id,date,amount,category,note");

    // Reopening keeps it empty rather than re-initializing.
    let ledger = Ledger::open(&path).unwrap();
    assert!(ledger.is_empty());
}

#[test]
fn append_then_read_yields_record_last() {
    let path = ledger_path();
    let mut ledger = Ledger::open(&path).unwrap();

    ledger
        .add_at(ts(2025, 3, 1, 9, 0, 0), Amount::new(500), "Food", "coffee")
        .unwrap();
    let added = ledger
        .add_at(ts(2025, 3, 2, 12, 30, 0), Amount::new(1250), "Travel", "bus")
        .unwrap();

    let reloaded = Ledger::open(&path).unwrap();
    assert_eq!(reloaded.len(), 2);
    let last = reloaded.records().last().unwrap();
    assert_eq!(last, &added);
}

#[test]
fn remove_keys_on_id_not_timestamp() {
    let path = ledger_path();
    let mut ledger = Ledger::open(&path).unwrap();

    // Two records in the same second; only the removed id may disappear.
    let when = ts(2025, 3, 1, 9, 0, 0);
    let first = ledger
        .add_at(when, Amount::new(100), "Food", "espresso")
        .unwrap();
    let second = ledger
        .add_at(when, Amount::new(200), "Food", "cornetto")
        .unwrap();

    let removed = ledger.remove(first.id).unwrap();
    assert_eq!(removed.id, first.id);
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.records()[0].id, second.id);

    let reloaded = Ledger::open(&path).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.records()[0].id, second.id);
}

#[test]
fn remove_unknown_id_is_key_not_found() {
    let path = ledger_path();
    let mut ledger = Ledger::open(&path).unwrap();

    let id = Uuid::new_v4();
    let err = ledger.remove(id).unwrap_err();
    assert_eq!(err, LedgerError::KeyNotFound(id.to_string()));
}

#[test]
fn totals_are_exact() {
    let path = ledger_path();
    let mut ledger = Ledger::open(&path).unwrap();

    // 10 cents logged three times sums to exactly 30 cents; no float drift.
    for day in 1..=3 {
        ledger
            .add_at(ts(2025, 3, day, 8, 0, 0), Amount::new(10), "Food", "")
            .unwrap();
    }
    assert_eq!(ledger.total(), Amount::new(30));
}

#[test]
fn month_total_filters_by_calendar_month() {
    let path = ledger_path();
    let mut ledger = Ledger::open(&path).unwrap();

    ledger
        .add_at(ts(2025, 2, 28, 23, 59, 59), Amount::new(100), "Bills", "")
        .unwrap();
    ledger
        .add_at(ts(2025, 3, 1, 0, 0, 0), Amount::new(250), "Bills", "")
        .unwrap();
    ledger
        .add_at(ts(2025, 3, 15, 12, 0, 0), Amount::new(750), "Food", "")
        .unwrap();

    assert_eq!(ledger.month_total(2025, 3), Amount::new(1000));
    assert_eq!(ledger.month_total(2025, 2), Amount::new(100));
    assert_eq!(ledger.month_total(2024, 3), Amount::ZERO);
}

#[test]
fn search_is_case_insensitive() {
    let path = ledger_path();
    let mut ledger = Ledger::open(&path).unwrap();

    ledger
        .add_at(ts(2025, 3, 1, 9, 0, 0), Amount::new(100), "Food", "lunch")
        .unwrap();
    ledger
        .add_at(ts(2025, 3, 1, 9, 0, 1), Amount::new(200), "travel", "train")
        .unwrap();

    let hits = ledger.search("FOOD");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].category, "Food");
    assert_eq!(ledger.search("Travel").len(), 1);
    assert!(ledger.search("Health").is_empty());
}

#[test]
fn notes_with_commas_and_quotes_round_trip() {
    let path = ledger_path();
    let mut ledger = Ledger::open(&path).unwrap();

    let note = "taxi, airport \"late\"";
    ledger
        .add_at(ts(2025, 3, 1, 9, 0, 0), Amount::new(3000), "Travel", note)
        .unwrap();

    let reloaded = Ledger::open(&path).unwrap();
    assert_eq!(reloaded.records()[0].note, note);
}

#[test]
fn zero_amount_and_empty_category_rejected() {
    let path = ledger_path();
    let mut ledger = Ledger::open(&path).unwrap();

    assert!(matches!(
        ledger.add_at(ts(2025, 3, 1, 9, 0, 0), Amount::ZERO, "Food", ""),
        Err(LedgerError::InvalidAmount(_))
    ));
    assert!(matches!(
        ledger.add_at(ts(2025, 3, 1, 9, 0, 0), Amount::new(100), "  ", ""),
        Err(LedgerError::InvalidRecord(_))
    ));
    assert!(ledger.is_empty());
}

#[test]
fn garbage_file_is_corrupt_not_empty() {
    let path = ledger_path();
    std::fs::write(&path, "this is not a ledger\n1,2\n").unwrap();

    match Ledger::open(&path) {
        Err(LedgerError::Corrupt { line, .. }) => assert_eq!(line, 1),
        other => panic!("expected corrupt, got {other:?}"),
    }
}

#[test]
fn bad_row_is_corrupt_with_line_number() {
    let path = ledger_path();
    std::fs::write(
        &path,
        format!(
            "id,date,amount,category,note\n{},2025-03-01 09:00:00,not-a-number,Food,\n",
            Uuid::new_v4()
        ),
    )
    .unwrap();

    match Ledger::open(&path) {
        Err(LedgerError::Corrupt { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected corrupt, got {other:?}"),
    }
}

#[test]
fn bad_timestamp_is_corrupt() {
    let path = ledger_path();
    std::fs::write(
        &path,
        format!(
            "id,date,amount,category,note\n{},yesterday,1.00,Food,\n",
            Uuid::new_v4()
        ),
    )
    .unwrap();

    assert!(matches!(
        Ledger::open(&path),
        Err(LedgerError::Corrupt { .. })
    ));
}
