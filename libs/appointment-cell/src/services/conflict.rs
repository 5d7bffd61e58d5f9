use chrono::{Duration, NaiveDate};
use tracing::{debug, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::TimeWindow;

use crate::models::{Appointment, AppointmentError, ConflictCheckResponse};

/// Overlap check for a new appointment against a doctor's bookings on one date.
///
/// `existing` must already be narrowed to the doctor and date being booked;
/// `doctor_id` and `date` are only carried into logs and errors.
///
/// A `false` answer is only valid until someone else books. Two concurrent
/// requests for the same slot can both pass, so the write path needs its own
/// guard (a unique constraint on doctor + date + window, or per-doctor
/// serialization).
#[derive(Debug, Clone, Copy)]
pub struct AppointmentConflictChecker {
    buffer: Duration,
}

impl Default for AppointmentConflictChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentConflictChecker {
    pub fn new() -> Self {
        Self {
            buffer: Duration::zero(),
        }
    }

    pub fn with_buffer_minutes(buffer_minutes: u32) -> Self {
        Self {
            buffer: Duration::minutes(i64::from(buffer_minutes)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_buffer_minutes(config.appointment_buffer_minutes)
    }

    /// Inclusive-boundary overlap against each existing window; no buffer.
    pub fn has_conflict(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
        window: &TimeWindow,
        existing: &[TimeWindow],
    ) -> bool {
        debug!(
            "Checking conflicts for doctor {} on {} from {} to {}",
            doctor_id,
            date,
            window.start(),
            window.end()
        );

        existing.iter().any(|booked| window.overlaps_with(booked))
    }

    /// Same as [`has_conflict`](Self::has_conflict) after widening `window` by
    /// the configured buffer on both sides.
    pub fn has_conflict_with_buffer(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
        window: &TimeWindow,
        existing: &[TimeWindow],
    ) -> bool {
        let widened = window.expanded_by(self.buffer);
        self.has_conflict(doctor_id, date, &widened, existing)
    }

    /// Windows of `doctor_id`'s appointments on `date` that still hold a slot.
    /// Cancelled, completed and no-show bookings are dropped.
    pub fn booked_windows(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
        appointments: &[Appointment],
    ) -> Vec<TimeWindow> {
        appointments
            .iter()
            .filter(|appt| appt.doctor_id == doctor_id && appt.date == date && appt.status.is_active())
            .map(|appt| appt.window)
            .collect()
    }

    /// Every existing window the candidate overlaps, in input order.
    pub fn find_conflicts(&self, window: &TimeWindow, existing: &[TimeWindow]) -> Vec<TimeWindow> {
        existing
            .iter()
            .filter(|booked| window.overlaps_with(booked))
            .copied()
            .collect()
    }

    /// Full report using the configured buffer.
    pub fn check(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
        window: &TimeWindow,
        existing: &[TimeWindow],
    ) -> ConflictCheckResponse {
        let effective = window.expanded_by(self.buffer);
        let conflicting_windows = self.find_conflicts(&effective, existing);
        let has_conflict = !conflicting_windows.is_empty();

        if has_conflict {
            warn!(
                "Conflict detected for doctor {} on {} - {} conflicting appointments",
                doctor_id,
                date,
                conflicting_windows.len()
            );
        }

        ConflictCheckResponse {
            has_conflict,
            conflicting_windows,
        }
    }

    pub fn ensure_available(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
        window: &TimeWindow,
        existing: &[TimeWindow],
    ) -> Result<(), AppointmentError> {
        let response = self.check(doctor_id, date, window, existing);
        if response.has_conflict {
            return Err(AppointmentError::ConflictDetected {
                doctor_id,
                date,
                conflicts: response.conflicting_windows.len(),
            });
        }
        Ok(())
    }
}
