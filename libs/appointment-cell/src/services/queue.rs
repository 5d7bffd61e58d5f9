// libs/appointment-cell/src/services/queue.rs
use std::sync::Arc;

use tracing::info;

use shared_utils::Clock;

use crate::models::{Appointment, PendingReferral, ScoredItem};
use crate::services::priority::PriorityScorer;
use crate::services::ranking::PriorityRanker;

/// Ranks stored referrals and appointments against the injected clock.
pub struct PriorityQueueService {
    scorer: PriorityScorer,
    ranker: PriorityRanker,
    clock: Arc<dyn Clock>,
}

impl PriorityQueueService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_scorer(PriorityScorer::new(), clock)
    }

    pub fn with_scorer(scorer: PriorityScorer, clock: Arc<dyn Clock>) -> Self {
        Self {
            scorer,
            ranker: PriorityRanker::new(),
            clock,
        }
    }

    pub fn rank_referrals(&self, referrals: Vec<PendingReferral>) -> Vec<ScoredItem<PendingReferral>> {
        let now = self.clock.now();
        let ranked = self.ranker.rank(referrals, |pending| {
            self.scorer.score_referral(&pending.referral, &pending.context, now)
        });

        if let Some(top) = ranked.first() {
            info!(
                "Ranked {} pending referrals, top referral {} with score {}",
                ranked.len(),
                top.item.referral.id,
                top.score
            );
        }
        ranked
    }

    pub fn next_referral(&self, referrals: Vec<PendingReferral>) -> Option<ScoredItem<PendingReferral>> {
        let now = self.clock.now();
        self.ranker.next_highest(referrals, |pending| {
            self.scorer.score_referral(&pending.referral, &pending.context, now)
        })
    }

    pub fn rank_appointments(&self, appointments: Vec<Appointment>) -> Vec<ScoredItem<Appointment>> {
        let now = self.clock.now();
        let ranked = self
            .ranker
            .rank(appointments, |appointment| self.scorer.score_appointment(appointment, now));

        info!("Ranked {} scheduled appointments", ranked.len());
        ranked
    }

    pub fn next_appointment(&self, appointments: Vec<Appointment>) -> Option<ScoredItem<Appointment>> {
        let now = self.clock.now();
        self.ranker
            .next_highest(appointments, |appointment| self.scorer.score_appointment(appointment, now))
    }
}
