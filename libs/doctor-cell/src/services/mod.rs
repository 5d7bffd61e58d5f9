pub mod schedule_conflict;

pub use schedule_conflict::ScheduleConflictChecker;
