// libs/shared/models/src/interval.rs
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// ==============================================================================
// TIME WINDOW
// ==============================================================================

/// A time-of-day window. `end` is always strictly after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeWindow")]
pub struct TimeWindow {
    start: NaiveTime,
    end: NaiveTime,
}

#[derive(Deserialize)]
struct RawTimeWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl TryFrom<RawTimeWindow> for TimeWindow {
    type Error = CoreError;

    fn try_from(raw: RawTimeWindow) -> Result<Self, Self::Error> {
        TimeWindow::new(raw.start, raw.end)
    }
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> CoreResult<Self> {
        if end <= start {
            return Err(CoreError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end.signed_duration_since(self.start)
    }

    /// Inclusive overlap; windows touching at an endpoint overlap.
    pub fn overlaps_with(&self, other: &TimeWindow) -> bool {
        overlaps(self, other)
    }

    /// Widen the window by `buffer` on both sides, clamped to the same day.
    pub fn expanded_by(&self, buffer: Duration) -> TimeWindow {
        let (start, start_wrap) = self.start.overflowing_sub_signed(buffer);
        let (end, end_wrap) = self.end.overflowing_add_signed(buffer);

        let start = if start_wrap != 0 || start > self.start {
            NaiveTime::from_hms_opt(0, 0, 0).unwrap_or(self.start)
        } else {
            start
        };
        let end = if end_wrap != 0 || end < self.end {
            NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(self.end)
        } else {
            end
        };

        TimeWindow { start, end }
    }
}

/// `NOT(a.end < b.start) AND NOT(b.end < a.start)`.
///
/// Boundaries are inclusive: `09:00-12:00` and `12:00-14:00` overlap. Schedule
/// blocks and appointments both rely on this convention, so keep it in sync
/// with any stored data that was validated against it.
pub fn overlaps(a: &TimeWindow, b: &TimeWindow) -> bool {
    !(a.end < b.start) && !(b.end < a.start)
}

// ==============================================================================
// SPLIT SCHEDULE
// ==============================================================================

/// One or two disjoint windows on a single day, e.g. morning and afternoon
/// around a lunch break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSplitSchedule")]
pub struct SplitSchedule {
    primary: TimeWindow,
    secondary: Option<TimeWindow>,
}

#[derive(Deserialize)]
struct RawSplitSchedule {
    primary: TimeWindow,
    #[serde(default)]
    secondary: Option<TimeWindow>,
}

impl TryFrom<RawSplitSchedule> for SplitSchedule {
    type Error = CoreError;

    fn try_from(raw: RawSplitSchedule) -> Result<Self, Self::Error> {
        SplitSchedule::new(raw.primary, raw.secondary)
    }
}

impl SplitSchedule {
    pub fn new(primary: TimeWindow, secondary: Option<TimeWindow>) -> CoreResult<Self> {
        if let Some(second) = secondary {
            if second.start <= primary.end {
                return Err(CoreError::InvalidSchedule(format!(
                    "secondary window starting at {} must start after primary window ending at {}",
                    second.start, primary.end
                )));
            }
        }
        Ok(Self { primary, secondary })
    }

    pub fn single(window: TimeWindow) -> Self {
        Self {
            primary: window,
            secondary: None,
        }
    }

    pub fn primary(&self) -> TimeWindow {
        self.primary
    }

    pub fn secondary(&self) -> Option<TimeWindow> {
        self.secondary
    }

    pub fn windows(&self) -> impl Iterator<Item = TimeWindow> {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

/// True if any window of `a` overlaps any window of `b`.
pub fn split_overlap(a: &SplitSchedule, b: &SplitSchedule) -> bool {
    if overlaps(&a.primary, &b.primary) {
        return true;
    }
    if let Some(b_second) = &b.secondary {
        if overlaps(&a.primary, b_second) {
            return true;
        }
    }
    if let Some(a_second) = &a.secondary {
        if overlaps(a_second, &b.primary) {
            return true;
        }
        if let Some(b_second) = &b.secondary {
            return overlaps(a_second, b_second);
        }
    }
    false
}
