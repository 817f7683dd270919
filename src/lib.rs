//! Koans: a tiny harness for fill-in-the-blank exercises.
//!
//! Episodes register their koans with a [`KoanHandler`], the handler greets
//! the learner with the grand total, and each episode is walked in order
//! until the first koan fails.

pub use crate::episode::{walk_the_path, Episode, Koan};
pub use crate::failure::{KoanFailure, KoanResult};
pub use crate::harness::{HarnessError, KoanHandler};

pub mod banner;
pub mod cli;
pub mod config;
pub mod episode;
pub mod failure;
pub mod harness;
pub mod lessons;
