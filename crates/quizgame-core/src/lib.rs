//! quizgame-core — Question model, session state, and play loop.
//!
//! This crate holds everything the quiz does apart from talking to a real
//! terminal: loading questions, scoring, results, and the engine that drives
//! a game through the [`traits::Console`] seam.

pub mod config;
pub mod engine;
pub mod error;
pub mod mock;
pub mod model;
pub mod parser;
pub mod report;
pub mod selection;
pub mod session;
pub mod traits;
