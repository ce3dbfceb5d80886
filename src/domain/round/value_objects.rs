use crate::domain::errors::{ConfigurationError, DomainResult, ValidationError};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay};

/// A weekday plus a wall-clock time, e.g. Monday 12:00
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAnchor {
    pub weekday: Weekday,
    pub time: NaiveTime,
}

impl ScheduleAnchor {
    pub fn new(weekday: Weekday, time: NaiveTime) -> Self {
        Self { weekday, time }
    }
}

/// Weekly submission window of the prediction game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoundSchedule {
    pub open: ScheduleAnchor,
    pub close: ScheduleAnchor,
    /// Offset of the schedule's wall clock from UTC, used for epoch inputs
    pub utc_offset_minutes: i32,
}

impl Default for RoundSchedule {
    fn default() -> Self {
        // Monday 12:00:00.000 through Thursday 23:59:59.999
        Self {
            open: ScheduleAnchor::new(Weekday::Mon, NaiveTime::default() + Duration::hours(12)),
            close: ScheduleAnchor::new(Weekday::Thu, NaiveTime::default() - Duration::milliseconds(1)),
            utc_offset_minutes: 0,
        }
    }
}

impl RoundSchedule {
    pub fn new(open: ScheduleAnchor, close: ScheduleAnchor, utc_offset_minutes: i32) -> DomainResult<Self> {
        let schedule = Self { open, close, utc_offset_minutes };
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.open == self.close {
            return Err(ConfigurationError::InvalidSchedule(format!(
                "close anchor {:?} {} coincides with open anchor",
                self.close.weekday, self.close.time
            ))
            .into());
        }
        self.utc_offset()?;
        Ok(())
    }

    pub fn utc_offset(&self) -> DomainResult<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60)).ok_or_else(|| {
            ConfigurationError::InvalidSchedule(format!("UTC offset {} minutes is out of range", self.utc_offset_minutes))
                .into()
        })
    }

    /// Time from an open anchor to the close anchor that follows it; always
    /// within (0, 7 days)
    pub fn submission_window(&self) -> Duration {
        let days = days_forward(self.open.weekday, self.close.weekday);
        let window = Duration::days(days) + self.close.time.signed_duration_since(self.open.time);
        if window <= Duration::zero() { window + Duration::weeks(1) } else { window }
    }

    /// Most recent open anchor at or before `now`, `None` when it falls
    /// before the first representable date
    pub fn open_on_or_before(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let back = days_forward(self.open.weekday, now.weekday());
        let candidate = now.date().checked_sub_signed(Duration::days(back))?.and_time(self.open.time);
        if candidate > now { candidate.checked_sub_signed(Duration::weeks(1)) } else { Some(candidate) }
    }

    /// Convert an epoch-milliseconds instant to this schedule's wall clock
    pub fn wall_clock(&self, epoch_ms: i64) -> DomainResult<NaiveDateTime> {
        let offset = self.utc_offset()?;
        let utc = DateTime::from_timestamp_millis(epoch_ms)
            .ok_or_else(|| ValidationError::InvalidInstant(format!("epoch millis {epoch_ms} out of range")))?;
        Ok(utc.with_timezone(&offset).naive_local())
    }
}

/// Days to walk forward from `from` to reach `to` (0..=6)
fn days_forward(from: Weekday, to: Weekday) -> i64 {
    i64::from((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundPhase {
    #[strum(serialize = "open")]
    Open,
    #[strum(serialize = "closed")]
    Closed,
}

/// One weekly prediction cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// ISO week of the opening instant, e.g. `2026-W42`
    pub week_identifier: String,
    pub opens_at: NaiveDateTime,
    pub submission_deadline: NaiveDateTime,
    pub results_at: NaiveDateTime,
}

impl Round {
    pub fn new(opens_at: NaiveDateTime, submission_deadline: NaiveDateTime, results_at: NaiveDateTime) -> Self {
        let week = opens_at.iso_week();
        Self {
            week_identifier: format!("{}-W{:02}", week.year(), week.week()),
            opens_at,
            submission_deadline,
            results_at,
        }
    }
}

/// Time left until the next phase boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    pub target: NaiveDateTime,
    pub remaining_ms: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn until(now: NaiveDateTime, target: NaiveDateTime) -> Self {
        let remaining_ms = (target - now).num_milliseconds().max(0);
        let total_seconds = remaining_ms / 1000;
        Self {
            target,
            remaining_ms,
            days: total_seconds / 86_400,
            hours: total_seconds % 86_400 / 3_600,
            minutes: total_seconds % 3_600 / 60,
            seconds: total_seconds % 60,
        }
    }

    pub fn is_elapsed(&self) -> bool {
        self.remaining_ms == 0
    }
}

/// One calendar day on the rendered round strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMarker {
    pub date: NaiveDate,
    pub label: String,
    pub position_percent: f64,
    pub is_deadline: bool,
    pub is_result_day: bool,
}
