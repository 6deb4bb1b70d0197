use crate::engine::{Aligner, Strategy};
use crate::params::ScoreParams;
use crate::traits::{MaybeSync, Score, ScoringFunction};

pub struct AlignerBuilder<T, S, F> {
    scoring: F,
    gap_marker: T,
    gap_penalty: Option<S>,
    score_bound: Option<S>,
    strategy: Option<Strategy>,
}

impl<T, S, F> AlignerBuilder<T, S, F>
where
    T: Clone + MaybeSync,
    S: Score,
    F: ScoringFunction<T, S> + MaybeSync,
{
    pub fn new(scoring: F, gap_marker: T) -> Self {
        Self {
            scoring,
            gap_marker,
            gap_penalty: None,
            score_bound: None,
            strategy: None,
        }
    }
    pub fn with_gap_penalty(mut self, gap_penalty: S) -> Self {
        self.gap_penalty = Some(gap_penalty);
        self
    }
    pub fn with_score_bound(mut self, bound: S) -> Self {
        self.score_bound = Some(bound);
        self
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn build(self) -> Aligner<T, S, F> {
        let mut params = match self.gap_penalty {
            Some(gap) => ScoreParams::new(gap),
            None => ScoreParams::default(),
        };
        params.score_bound = self.score_bound;
        Aligner::with_params(
            self.scoring,
            self.gap_marker,
            params,
            self.strategy.unwrap_or_default(),
        )
    }
}
