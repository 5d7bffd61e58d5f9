// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

use shared_models::{CoreError, TimeWindow};

// ==============================================================================
// PRIORITY & TYPE ENUMS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityLevel {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
    #[serde(alias = "urgent")]
    Urgent,
}

impl PriorityLevel {
    /// Unknown labels fall back to `Low` instead of failing.
    pub fn parse_lenient(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            warn!("Unknown priority level {:?}, treating as LOW", label);
            PriorityLevel::Low
        })
    }
}

impl Default for PriorityLevel {
    fn default() -> Self {
        PriorityLevel::Low
    }
}

impl FromStr for PriorityLevel {
    type Err = AppointmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "URGENT" => Ok(PriorityLevel::Urgent),
            "HIGH" => Ok(PriorityLevel::High),
            "MEDIUM" => Ok(PriorityLevel::Medium),
            "LOW" => Ok(PriorityLevel::Low),
            other => Err(AppointmentError::ValidationError(format!(
                "Unknown priority level: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityLevel::Urgent => write!(f, "URGENT"),
            PriorityLevel::High => write!(f, "HIGH"),
            PriorityLevel::Medium => write!(f, "MEDIUM"),
            PriorityLevel::Low => write!(f, "LOW"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AppointmentType {
    #[serde(alias = "consultation", alias = "general_consultation")]
    Consultation,

    #[serde(alias = "specialist_consultation", alias = "specialist")]
    SpecialistConsultation,

    #[serde(alias = "exam", alias = "examination")]
    Exam,

    #[serde(alias = "lab_test", alias = "lab")]
    LabTest,

    #[serde(alias = "follow_up", alias = "return")]
    FollowUp,

    #[serde(alias = "procedure")]
    Procedure,

    #[serde(alias = "vaccination")]
    Vaccination,
}

/// Coarse grouping used by the priority weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentCategory {
    Exam,
    Consultation,
    Other,
}

impl AppointmentType {
    pub fn category(&self) -> AppointmentCategory {
        match self {
            AppointmentType::Exam | AppointmentType::LabTest => AppointmentCategory::Exam,
            AppointmentType::Consultation | AppointmentType::SpecialistConsultation => {
                AppointmentCategory::Consultation
            }
            AppointmentType::FollowUp | AppointmentType::Procedure | AppointmentType::Vaccination => {
                AppointmentCategory::Other
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    /// Statuses that still hold a slot in the doctor's day.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Pending | AppointmentStatus::Confirmed | AppointmentStatus::InProgress
        )
    }
}

// ==============================================================================
// CORE SNAPSHOTS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    pub window: TimeWindow,
    pub appointment_type: AppointmentType,
    pub priority: Option<PriorityLevel>,
    pub referral_id: Option<Uuid>,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn is_from_referral(&self) -> bool {
        self.referral_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub requesting_doctor_id: Uuid,
    pub specialty: String,
    pub reason: Option<String>,
    pub priority: PriorityLevel,
    pub requested_at: DateTime<Utc>,
}

/// Patient attributes that adjust a referral's urgency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalContext {
    pub patient_age: Option<u32>,
    #[serde(default)]
    pub is_pregnant: bool,
    #[serde(default)]
    pub has_medical_urgency: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingReferral {
    pub referral: Referral,
    pub context: ClinicalContext,
}

// ==============================================================================
// DERIVED RESULTS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredItem<T> {
    pub item: T,
    pub score: i32,
    pub estimated_wait_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictCheckResponse {
    pub has_conflict: bool,
    pub conflicting_windows: Vec<TimeWindow>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppointmentError {
    #[error("Appointment for doctor {doctor_id} on {date} conflicts with {conflicts} existing booking(s)")]
    ConflictDetected {
        doctor_id: Uuid,
        date: NaiveDate,
        conflicts: usize,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
