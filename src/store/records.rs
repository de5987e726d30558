//! Typed access to the persisted records, with their documented defaults.

use super::{KEY_CHECKINS, KEY_DRINKS, KEY_SESSION, KvStore};
use crate::errors::AppResult;
use crate::models::drink::default_catalog;
use crate::models::{CheckIn, DrinkType, SessionState};

/// Drink catalog; the built-in entries when nothing was saved yet.
pub fn load_drinks<S: KvStore>(store: &S) -> AppResult<Vec<DrinkType>> {
    Ok(store.get(KEY_DRINKS)?.unwrap_or_else(default_catalog))
}

pub fn save_drinks<S: KvStore>(store: &mut S, drinks: &[DrinkType]) -> AppResult<()> {
    store.set(KEY_DRINKS, &drinks)
}

/// Check-in log, newest first.
pub fn load_check_ins<S: KvStore>(store: &S) -> AppResult<Vec<CheckIn>> {
    Ok(store.get(KEY_CHECKINS)?.unwrap_or_default())
}

pub fn save_check_ins<S: KvStore>(store: &mut S, check_ins: &[CheckIn]) -> AppResult<()> {
    store.set(KEY_CHECKINS, &check_ins)
}

/// Prepend `check_in` to the stored log.
pub fn add_check_in<S: KvStore>(store: &mut S, check_in: CheckIn) -> AppResult<()> {
    let mut log = load_check_ins(store)?;
    log.insert(0, check_in);
    save_check_ins(store, &log)
}

pub fn load_session<S: KvStore>(store: &S) -> AppResult<SessionState> {
    Ok(store.get(KEY_SESSION)?.unwrap_or_default())
}

pub fn save_session<S: KvStore>(store: &mut S, state: &SessionState) -> AppResult<()> {
    store.set(KEY_SESSION, state)
}
