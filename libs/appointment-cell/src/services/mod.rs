pub mod conflict;
pub mod priority;
pub mod ranking;
pub mod queue;

pub use conflict::AppointmentConflictChecker;
pub use priority::{PriorityScorer, PriorityWeights};
pub use ranking::{estimated_wait_days, PriorityRanker};
pub use queue::PriorityQueueService;
