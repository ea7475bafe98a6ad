pub mod recommender;
pub mod transitions;
pub mod types;
