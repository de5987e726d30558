pub mod backup;
pub mod checkin;
pub mod config;
pub mod drinks;
pub mod export;
pub mod feed;
pub mod init;
pub mod log;
pub mod session;

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SqliteStore;

/// Open the configured database, creating the schema when needed.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    if let Some(parent) = std::path::Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    SqliteStore::open(&cfg.database)
}

/// Stored session, or an inactive one when the record cannot be read.
/// `start` and `end` overwrite the record wholesale, so a broken one must
/// not block them.
pub(crate) fn session_or_inactive(store: &SqliteStore) -> crate::models::SessionState {
    match crate::store::records::load_session(store) {
        Ok(state) => state,
        Err(e) => {
            crate::ui::messages::warning(format!("Ignoring unreadable session: {e}"));
            crate::models::SessionState::inactive()
        }
    }
}
