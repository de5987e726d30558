//! Session lifecycle and the live metrics derived from the check-in log.

use crate::core::clock::Clock;
use crate::errors::AppResult;
use crate::models::{CheckIn, SessionState};
use crate::store::KvStore;
use crate::store::records;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use std::fmt;

/// Units that complete a bakdag.
pub const TARGET_UNITS: f64 = 24.0;

/// Live progress bar figures.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    pub total_units: f64,
    /// Clamped to `[0, 100]`.
    pub percentage: f64,
    /// Units per hour.
    pub pace: f64,
}

/// Message band picked from the raw completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBand {
    Start,
    WarmingUp,
    Halfway,
    ThreeQuarters,
    FinalStretch,
    Champion,
}

impl StatusBand {
    /// `percentage` is not clamped: anything at or past 100 is a champion.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage <= 0.0 {
            StatusBand::Start
        } else if percentage < 25.0 {
            StatusBand::WarmingUp
        } else if percentage < 50.0 {
            StatusBand::Halfway
        } else if percentage < 75.0 {
            StatusBand::ThreeQuarters
        } else if percentage < 100.0 {
            StatusBand::FinalStretch
        } else {
            StatusBand::Champion
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            StatusBand::Start => "Get started! 🚀",
            StatusBand::WarmingUp => "Just getting warmed up! 🌡️",
            StatusBand::Halfway => "Halfway there! You're crushing it! 💪",
            StatusBand::ThreeQuarters => "More than 3/4 of the way! Almost there! 🏁",
            StatusBand::FinalStretch => "Final stretch! You've got this! 🎯",
            StatusBand::Champion => "BAKDAG CHAMPION! 👑",
        }
    }
}

impl fmt::Display for StatusBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Projected wall-clock time at which the target is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectedFinish {
    At(NaiveTime),
    Unknown,
}

impl ProjectedFinish {
    pub fn is_known(&self) -> bool {
        matches!(self, ProjectedFinish::At(_))
    }
}

impl fmt::Display for ProjectedFinish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectedFinish::At(t) => write!(f, "{}", t.format("%H:%M")),
            ProjectedFinish::Unknown => f.write_str("--:--"),
        }
    }
}

/// Full statistics panel of an active session.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total_units: f64,
    pub pace: f64,
    pub elapsed_hours: i64,
    pub elapsed_minutes: i64,
    pub checkin_count: usize,
    pub projected_finish: ProjectedFinish,
    pub status: StatusBand,
}

pub struct SessionEngine<C: Clock> {
    clock: C,
}

impl<C: Clock> SessionEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Start (or restart) the session clock. Always permitted.
    pub fn start<S: KvStore>(&self, store: &mut S) -> AppResult<SessionState> {
        let state = SessionState::started(self.clock.now());
        records::save_session(store, &state)?;
        Ok(state)
    }

    /// End the session. Always permitted, even when nothing is running.
    pub fn end<S: KvStore>(&self, store: &mut S) -> AppResult<SessionState> {
        let state = SessionState::inactive();
        records::save_session(store, &state)?;
        Ok(state)
    }

    /// Progress bar figures. Every stored check-in counts, including those
    /// recorded before the current session started.
    pub fn compute_progress(&self, check_ins: &[CheckIn], state: &SessionState) -> Progress {
        if !state.is_active() {
            return Progress::default();
        }

        let total_units = total_units(check_ins);
        let percentage = completion_percentage(total_units).min(100.0);

        let mut pace = 0.0;
        if !check_ins.is_empty()
            && let Some(start) = state.start_time()
        {
            let hours = elapsed(start, self.clock.now()).num_milliseconds() as f64 / 3_600_000.0;
            if hours > 0.0 {
                pace = total_units / hours;
            }
        }

        Progress {
            total_units,
            percentage,
            pace,
        }
    }

    /// Statistics panel; `None` while no session is active.
    pub fn compute_stats(&self, check_ins: &[CheckIn], state: &SessionState) -> Option<Stats> {
        if !state.is_active() {
            return None;
        }

        let now = self.clock.now();
        let total_units = total_units(check_ins);

        let whole_minutes = state
            .start_time()
            .map(|start| elapsed(start, now).num_minutes().max(0))
            .unwrap_or(0);

        let pace = if whole_minutes > 0 {
            total_units / (whole_minutes as f64 / 60.0)
        } else {
            0.0
        };

        Some(Stats {
            total_units,
            pace,
            elapsed_hours: whole_minutes / 60,
            elapsed_minutes: whole_minutes % 60,
            checkin_count: check_ins.len(),
            projected_finish: self.project_finish(total_units, pace, now),
            status: StatusBand::from_percentage(completion_percentage(total_units)),
        })
    }

    /// Past the target the remaining units go negative and the projection
    /// lands in the past.
    fn project_finish(&self, total_units: f64, pace: f64, now: DateTime<Utc>) -> ProjectedFinish {
        if pace <= 0.0 {
            return ProjectedFinish::Unknown;
        }

        let remaining_units = TARGET_UNITS - total_units;
        let minutes_to_finish = remaining_units / pace * 60.0;
        let millis = (minutes_to_finish * 60_000.0).round() as i64;

        match Duration::try_milliseconds(millis).and_then(|d| now.checked_add_signed(d)) {
            Some(finish) => {
                let offset = self.clock.local_offset(finish);
                ProjectedFinish::At(finish.with_timezone(&offset).time())
            }
            None => ProjectedFinish::Unknown,
        }
    }
}

pub fn total_units(check_ins: &[CheckIn]) -> f64 {
    check_ins.iter().map(|c| c.units).sum()
}

/// Unclamped share of the target, in percent.
pub fn completion_percentage(total_units: f64) -> f64 {
    total_units / TARGET_UNITS * 100.0
}

fn elapsed(start: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    now.signed_duration_since(start)
}
