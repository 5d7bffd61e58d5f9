use tracing::debug;

use crate::models::ScoredItem;

/// Waiting-time bucket for a score: >=100 -> 1 day, >=70 -> 3, >=40 -> 7, else 14.
pub fn estimated_wait_days(score: i32) -> u32 {
    match score {
        s if s >= 100 => 1,
        s if s >= 70 => 3,
        s if s >= 40 => 7,
        _ => 14,
    }
}

impl<T> ScoredItem<T> {
    pub fn new(item: T, score: i32) -> Self {
        Self {
            item,
            score,
            estimated_wait_days: estimated_wait_days(score),
        }
    }
}

/// Orders items by descending score. Equal scores keep their input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct PriorityRanker;

impl PriorityRanker {
    pub fn new() -> Self {
        Self
    }

    pub fn rank<T, I, F>(&self, items: I, scorer: F) -> Vec<ScoredItem<T>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> i32,
    {
        let mut scored: Vec<ScoredItem<T>> = items
            .into_iter()
            .map(|item| {
                let score = scorer(&item);
                ScoredItem::new(item, score)
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        debug!("Ranked {} items", scored.len());
        scored
    }

    /// The first element `rank` would return, or `None` for empty input.
    pub fn next_highest<T, I, F>(&self, items: I, scorer: F) -> Option<ScoredItem<T>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> i32,
    {
        let mut best: Option<(T, i32)> = None;
        for item in items {
            let score = scorer(&item);
            let is_better = match &best {
                Some((_, best_score)) => score > *best_score,
                None => true,
            };
            if is_better {
                best = Some((item, score));
            }
        }
        best.map(|(item, score)| ScoredItem::new(item, score))
    }

    pub fn top_n<T, I, F>(&self, items: I, scorer: F, n: usize) -> Vec<ScoredItem<T>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> i32,
    {
        let mut ranked = self.rank(items, scorer);
        ranked.truncate(n);
        ranked
    }
}
