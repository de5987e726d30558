use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The current tracking session.
///
/// `start_time` is present exactly when the session is active; the fields
/// are private so that invariant can only be built through `started` and
/// `inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord", into = "SessionRecord")]
pub struct SessionState {
    active: bool,
    start_time: Option<DateTime<Utc>>,
}

/// Wire shape of the session record.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    active: bool,
    #[serde(default)]
    start_time: Option<DateTime<Utc>>,
}

impl SessionState {
    pub fn started(at: DateTime<Utc>) -> Self {
        Self {
            active: true,
            start_time: Some(at),
        }
    }

    pub fn inactive() -> Self {
        Self {
            active: false,
            start_time: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::inactive()
    }
}

impl TryFrom<SessionRecord> for SessionState {
    type Error = String;

    fn try_from(r: SessionRecord) -> Result<Self, Self::Error> {
        match (r.active, r.start_time) {
            (true, Some(t)) => Ok(Self::started(t)),
            (false, None) => Ok(Self::inactive()),
            (true, None) => Err("active session without startTime".into()),
            (false, Some(_)) => Err("inactive session with a startTime".into()),
        }
    }
}

impl From<SessionState> for SessionRecord {
    fn from(s: SessionState) -> Self {
        Self {
            active: s.active,
            start_time: s.start_time,
        }
    }
}
