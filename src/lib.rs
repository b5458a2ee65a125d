//! aiready Library
//!
//! This crate provides the core functionality for validating repositories
//! and preparing them for AI coding assistants: a bounded-time secret
//! detection engine and an ordered catalog of fixable readiness rules.

pub mod cli;
pub mod config;
pub mod error;
pub mod project;
pub mod rules;
pub mod secrets;
pub mod utils;

pub use error::AiReadyError;
