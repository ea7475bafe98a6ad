// src/lib.rs

pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod logging;
pub mod routine;

pub use crate::config::{RecommenderConfig, Settings};
pub use crate::core::recommender::{recommend, Recommender};
pub use crate::core::types::{SkillToken, TieBreak, Turn};
pub use crate::corpus::Corpus;
