use super::value_objects::{Countdown, DayMarker, Round, RoundPhase, RoundSchedule};
use crate::domain::errors::{DomainResult, ValidationError};
use crate::domain::logging::LogComponent;
use crate::time_utils::format_day_label;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Everything the round strip needs for one reference instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundTimeline {
    pub now: NaiveDateTime,
    pub round: Round,
    pub phase: RoundPhase,
    pub is_submission_open: bool,
    pub progress_percent: f64,
    pub timeline_start: NaiveDateTime,
    pub timeline_end: NaiveDateTime,
    pub next_round_opens_at: NaiveDateTime,
    pub next_submission_deadline: NaiveDateTime,
    pub countdown: Countdown,
    pub markers: Vec<DayMarker>,
}

/// Derives round state from a reference instant and the weekly schedule.
///
/// The rendered span runs from this round's open anchor to the next round's
/// deadline, so the strip shows the current window, the waiting period and
/// the following window. Calling `recompute` again with the same `now`
/// returns the same timeline.
#[derive(Debug, Clone, Default)]
pub struct RoundTimelineCalculator {
    schedule: RoundSchedule,
}

impl RoundTimelineCalculator {
    pub fn new(schedule: RoundSchedule) -> DomainResult<Self> {
        schedule.validate()?;
        Ok(Self { schedule })
    }

    pub fn schedule(&self) -> &RoundSchedule {
        &self.schedule
    }

    /// Fails only for instants whose surrounding two weeks leave the
    /// calendar range chrono can represent
    pub fn recompute(&self, now: NaiveDateTime) -> DomainResult<RoundTimeline> {
        let out_of_range = || ValidationError::InvalidInstant(format!("{now} is too close to the calendar limits"));
        let this_open = self.schedule.open_on_or_before(now).ok_or_else(out_of_range)?;
        let this_close = this_open.checked_add_signed(self.schedule.submission_window()).ok_or_else(out_of_range)?;
        let next_open = this_open.checked_add_signed(Duration::weeks(1)).ok_or_else(out_of_range)?;
        let next_close = this_close.checked_add_signed(Duration::weeks(1)).ok_or_else(out_of_range)?;

        // `this_open` is the latest anchor at or before `now`, so `now < next_open`
        let is_submission_open = now <= this_close;
        let phase = if is_submission_open { RoundPhase::Open } else { RoundPhase::Closed };

        let span_ms = (next_close - this_open).num_milliseconds() as f64;
        let progress_percent = percent_of_span((now - this_open).num_milliseconds() as f64, span_ms);

        let countdown_target = match phase {
            RoundPhase::Open => this_close,
            RoundPhase::Closed => next_open,
        };

        let markers = Self::day_markers(this_open, this_close, next_open, next_close, span_ms);

        crate::log_trace!(
            LogComponent::Domain("Timeline"),
            "now={} phase={} progress={:.2}%",
            now,
            phase,
            progress_percent
        );

        Ok(RoundTimeline {
            now,
            round: Round::new(this_open, this_close, next_open),
            phase,
            is_submission_open,
            progress_percent,
            timeline_start: this_open,
            timeline_end: next_close,
            next_round_opens_at: next_open,
            next_submission_deadline: next_close,
            countdown: Countdown::until(now, countdown_target),
            markers,
        })
    }

    /// Convenience for callers holding an epoch-milliseconds clock reading
    pub fn recompute_at_epoch_ms(&self, epoch_ms: i64) -> DomainResult<RoundTimeline> {
        self.recompute(self.schedule.wall_clock(epoch_ms)?)
    }

    fn day_markers(
        this_open: NaiveDateTime,
        this_close: NaiveDateTime,
        next_open: NaiveDateTime,
        next_close: NaiveDateTime,
        span_ms: f64,
    ) -> Vec<DayMarker> {
        let day_count = (next_close.date() - this_open.date()).num_days();

        (0..=day_count)
            .map(|k| {
                // Markers sit at the open-anchor time of each day so the
                // result-day marker coincides with the reopening instant.
                let instant = this_open + Duration::days(k);
                let date = instant.date();
                DayMarker {
                    date,
                    label: format_day_label(date),
                    position_percent: percent_of_span(Duration::days(k).num_milliseconds() as f64, span_ms),
                    is_deadline: date == this_close.date() || date == next_close.date(),
                    is_result_day: date == next_open.date(),
                }
            })
            .collect()
    }
}

fn percent_of_span(elapsed_ms: f64, span_ms: f64) -> f64 {
    if span_ms <= 0.0 {
        return 0.0;
    }
    (elapsed_ms / span_ms * 100.0).clamp(0.0, 100.0)
}
