use bakdag::core::checkin::CheckInLogic;
use bakdag::core::clock::FixedClock;
use bakdag::core::drinks::DrinkLogic;
use bakdag::core::engine::{SessionEngine, StatusBand, TARGET_UNITS};
use bakdag::models::drink::{DEFAULT_EMOJI, default_catalog};
use bakdag::store::{KvStore, MemoryStore, SqliteStore, records};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 7, 16, 0, 0).unwrap()
}

fn clock_at(offset_minutes: i64) -> FixedClock {
    FixedClock::utc(t0() + Duration::minutes(offset_minutes))
}

/// Start, check in 1.5 and 2 units, ask for stats.
fn run_session<S: KvStore>(store: &mut S) {
    DrinkLogic::add(store, "Dubbel", 2.0, None, DEFAULT_EMOJI).unwrap();

    let state = SessionEngine::new(clock_at(0)).start(store).unwrap();

    CheckInLogic::submit(store, &clock_at(20), Some("IPA"), None, None).unwrap();
    CheckInLogic::submit(store, &clock_at(50), Some("Dubbel"), None, None).unwrap();

    let log = records::load_check_ins(store).unwrap();
    let stats = SessionEngine::new(clock_at(60))
        .compute_stats(&log, &state)
        .expect("session is active");

    assert_eq!(stats.total_units, 3.5);
    assert_eq!(stats.checkin_count, 2);
    assert_eq!((stats.elapsed_hours, stats.elapsed_minutes), (1, 0));
    assert_eq!(stats.pace, 3.5);
    assert!(stats.projected_finish.is_known());
    // 20.5 units left at 3.5/h from 17:00 UTC
    let expected = t0() + Duration::minutes(60)
        + Duration::milliseconds(((TARGET_UNITS - 3.5) / 3.5 * 3_600_000.0).round() as i64);
    assert_eq!(
        stats.projected_finish.to_string(),
        expected.format("%H:%M").to_string()
    );
    assert_eq!(stats.status, StatusBand::WarmingUp);
}

#[test]
fn end_to_end_in_memory() {
    run_session(&mut MemoryStore::new());
}

#[test]
fn end_to_end_sqlite() {
    run_session(&mut SqliteStore::in_memory().unwrap());
}

#[test]
fn fresh_store_returns_builtin_catalog() {
    let store = SqliteStore::in_memory().unwrap();
    assert_eq!(records::load_drinks(&store).unwrap(), default_catalog());
}

#[test]
fn totals_ignore_later_catalog_changes() {
    let mut store = MemoryStore::new();
    let state = SessionEngine::new(clock_at(0)).start(&mut store).unwrap();
    CheckInLogic::submit(&mut store, &clock_at(5), Some("Stout"), None, None).unwrap();

    let mut drinks = records::load_drinks(&store).unwrap();
    drinks[2].units = 10.0;
    records::save_drinks(&mut store, &drinks).unwrap();

    let log = records::load_check_ins(&store).unwrap();
    let progress = SessionEngine::new(clock_at(30)).compute_progress(&log, &state);
    assert_eq!(progress.total_units, 1.5);
}
