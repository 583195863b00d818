use crate::models::{SurveyResponse, UserSurvey, RankedMatch, ScoringWeights, RescaleCurve};
use crate::core::{scoring::calculate_match_score, tags::looking_for};

/// Result of ranking a candidate pool
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Roommate matching orchestrator
///
/// Holds the scoring parameters and ranks a candidate pool:
/// 1. Drop the current user from the pool
/// 2. Score each candidate against the current user
/// 3. Drop candidates under `min_score`
/// 4. Stable sort by score, highest first
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    curve: RescaleCurve,
    min_score: u8,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, curve: RescaleCurve) -> Self {
        Self {
            weights,
            curve,
            min_score: 0,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default(), RescaleCurve::default())
    }

    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = min_score;
        self
    }

    /// Compatibility of two surveys (0-100)
    #[inline]
    pub fn score(&self, a: &SurveyResponse, b: &SurveyResponse) -> u8 {
        calculate_match_score(a, b, &self.weights, &self.curve)
    }

    /// Rank candidates for the current user
    ///
    /// # Arguments
    /// * `current` - The user asking for matches
    /// * `candidates` - Candidate pool, in store order
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// RankResult with matches sorted by descending score. Equal scores keep
    /// their pool order.
    pub fn rank(
        &self,
        current: &UserSurvey,
        candidates: Vec<UserSurvey>,
        limit: usize,
    ) -> RankResult {
        let pool: Vec<UserSurvey> = candidates
            .into_iter()
            .filter(|candidate| candidate.user_id != current.user_id)
            .collect();
        let total_candidates = pool.len();

        let mut ranked: Vec<RankedMatch> = pool
            .into_iter()
            .filter_map(|candidate| {
                let score = self.score(&current.responses, &candidate.responses);
                if score < self.min_score {
                    return None;
                }

                Some(RankedMatch {
                    looking_for: looking_for(&candidate.responses),
                    user_id: candidate.user_id,
                    score,
                    survey: candidate.responses,
                })
            })
            .collect();

        tracing::debug!(
            "Scored {} of {} candidates for {}",
            ranked.len(),
            total_candidates,
            current.user_id
        );

        // sort_by is stable
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(limit);

        RankResult {
            matches: ranked,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
