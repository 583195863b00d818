// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{SurveyResponse, UserSurvey, MatchResult, RankedMatch, ScoringWeights, RescaleCurve};
pub use requests::{FindMatchesRequest, ScorePairRequest};
pub use responses::{FindMatchesResponse, PairScoreResponse, HealthResponse, ErrorResponse};
