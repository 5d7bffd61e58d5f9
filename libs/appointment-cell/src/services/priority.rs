// libs/appointment-cell/src/services/priority.rs
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{
    Appointment, AppointmentCategory, ClinicalContext, PriorityLevel, Referral,
};

/// Additive urgency weights. Higher scores are more urgent; nothing caps the sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityWeights {
    pub urgent_base: i32,
    pub high_base: i32,
    pub medium_base: i32,
    pub low_base: i32,

    pub child_max_age: u32,
    pub senior_min_age: u32,
    pub age_bonus: i32,
    pub pregnancy_bonus: i32,
    pub medical_urgency_bonus: i32,
    pub waiting_points_per_day: i32,
    pub waiting_points_cap: i32,

    pub exam_bonus: i32,
    pub consultation_bonus: i32,
    pub imminent_days: i64,
    pub imminent_bonus: i32,
    pub upcoming_days: i64,
    pub upcoming_bonus: i32,
    pub referral_bonus: i32,
}

impl PriorityWeights {
    pub fn standard() -> Self {
        Self {
            urgent_base: 100,
            high_base: 70,
            medium_base: 40,
            low_base: 10,

            child_max_age: 12,
            senior_min_age: 65,
            age_bonus: 10,
            pregnancy_bonus: 15,
            medical_urgency_bonus: 20,
            waiting_points_per_day: 2,
            waiting_points_cap: 30,

            exam_bonus: 35,
            consultation_bonus: 20,
            imminent_days: 3,
            imminent_bonus: 30,
            upcoming_days: 7,
            upcoming_bonus: 15,
            referral_bonus: 25,
        }
    }

    pub fn base(&self, level: PriorityLevel) -> i32 {
        match level {
            PriorityLevel::Urgent => self.urgent_base,
            PriorityLevel::High => self.high_base,
            PriorityLevel::Medium => self.medium_base,
            PriorityLevel::Low => self.low_base,
        }
    }

    pub fn category_bonus(&self, category: AppointmentCategory) -> i32 {
        match category {
            AppointmentCategory::Exam => self.exam_bonus,
            AppointmentCategory::Consultation => self.consultation_bonus,
            AppointmentCategory::Other => 0,
        }
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// Pure scoring of referrals and appointments at a given instant.
#[derive(Debug, Clone, Default)]
pub struct PriorityScorer {
    weights: PriorityWeights,
}

impl PriorityScorer {
    pub fn new() -> Self {
        Self {
            weights: PriorityWeights::standard(),
        }
    }

    pub fn with_weights(weights: PriorityWeights) -> Self {
        Self { weights }
    }

    /// base + age + pregnancy + medical urgency + min(waiting_days * 2, 30).
    ///
    /// Recomputed on every read: the waiting component grows with `now`.
    pub fn score_referral(
        &self,
        referral: &Referral,
        context: &ClinicalContext,
        now: DateTime<Utc>,
    ) -> i32 {
        let w = &self.weights;
        let mut score = w.base(referral.priority);

        if let Some(age) = context.patient_age {
            if age < w.child_max_age || age > w.senior_min_age {
                score += w.age_bonus;
            }
        }
        if context.is_pregnant {
            score += w.pregnancy_bonus;
        }
        if context.has_medical_urgency {
            score += w.medical_urgency_bonus;
        }

        let waiting_days = Self::waiting_days(referral, now);
        let waiting_points = waiting_days
            .saturating_mul(i64::from(w.waiting_points_per_day))
            .min(i64::from(w.waiting_points_cap));
        score += waiting_points as i32;

        debug!(
            "Referral {} scored {} ({} waiting days)",
            referral.id, score, waiting_days
        );
        score
    }

    /// base(priority or LOW) + type bonus + proximity bonus + referral bonus.
    pub fn score_appointment(&self, appointment: &Appointment, now: DateTime<Utc>) -> i32 {
        let w = &self.weights;
        let mut score = w.base(appointment.priority.unwrap_or_default());

        score += w.category_bonus(appointment.appointment_type.category());

        let days_until = Self::days_until(appointment, now);
        if days_until <= w.imminent_days {
            score += w.imminent_bonus;
        } else if days_until <= w.upcoming_days {
            score += w.upcoming_bonus;
        }

        if appointment.is_from_referral() {
            score += w.referral_bonus;
        }

        debug!(
            "Appointment {} scored {} ({} days until)",
            appointment.id, score, days_until
        );
        score
    }

    /// Whole days since the referral was requested; never negative.
    pub fn waiting_days(referral: &Referral, now: DateTime<Utc>) -> i64 {
        now.signed_duration_since(referral.requested_at).num_days().max(0)
    }

    /// Calendar days from `now`'s date to the appointment date. Negative for past dates.
    pub fn days_until(appointment: &Appointment, now: DateTime<Utc>) -> i64 {
        appointment
            .date
            .signed_duration_since(now.date_naive())
            .num_days()
    }
}
