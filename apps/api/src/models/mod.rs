pub mod listing;
pub mod seeker;
