pub mod basic;
pub mod category;
pub mod extended;
pub mod question;
pub mod session;
pub mod validation;

pub use basic::{basic_questions, recommend_stream, StreamProfile, StreamRecommendation, CONFIDENCE_MAX};
pub use category::{Aptitude, Category, ScoreMap, Stream};
pub use extended::{
    evaluate, premium_questions, CareerMatch, ExtendedResult, OverallScoreMode, MAX_WEIGHT,
};
pub use question::{max_attainable, Question};
pub use session::{score_answers, tally, Progress, QuizError, QuizSession};
pub use validation::validate_questions;
