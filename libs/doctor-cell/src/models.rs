use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

use shared_models::{CoreError, SplitSchedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// 0 = Sunday, 1 = Monday, etc.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(DayOfWeek::Sunday),
            1 => Some(DayOfWeek::Monday),
            2 => Some(DayOfWeek::Tuesday),
            3 => Some(DayOfWeek::Wednesday),
            4 => Some(DayOfWeek::Thursday),
            5 => Some(DayOfWeek::Friday),
            6 => Some(DayOfWeek::Saturday),
            _ => None,
        }
    }

    pub fn index(&self) -> i32 {
        match self {
            DayOfWeek::Sunday => 0,
            DayOfWeek::Monday => 1,
            DayOfWeek::Tuesday => 2,
            DayOfWeek::Wednesday => 3,
            DayOfWeek::Thursday => 4,
            DayOfWeek::Friday => 5,
            DayOfWeek::Saturday => 6,
        }
    }

    pub fn of_date(date: NaiveDate) -> Self {
        date.weekday().into()
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayOfWeek::Sunday,
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
        }
    }
}

impl TryFrom<i32> for DayOfWeek {
    type Error = DoctorError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        DayOfWeek::from_index(index).ok_or(DoctorError::InvalidDayOfWeek(index))
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayOfWeek::Sunday => "sunday",
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
        };
        write!(f, "{}", name)
    }
}

/// A doctor's recurring weekly availability on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorScheduleBlock {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub schedule: SplitSchedule,
}

impl DoctorScheduleBlock {
    pub fn new(doctor_id: Uuid, day_of_week: DayOfWeek, schedule: SplitSchedule) -> Self {
        Self {
            id: Uuid::new_v4(),
            doctor_id,
            day_of_week,
            schedule,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DoctorError {
    #[error("Schedule conflicts with existing block {conflicting_block_id} on {day_of_week}")]
    ScheduleConflict {
        day_of_week: DayOfWeek,
        conflicting_block_id: Uuid,
    },

    #[error("Invalid day of week index: {0}")]
    InvalidDayOfWeek(i32),

    #[error(transparent)]
    Core(#[from] CoreError),
}
