//! termdeck-core — Glossary record store and quiz engine.
//!
//! This crate owns the on-disk glossary format and the true/false quiz
//! logic. The `termdeck` binary is a thin shell around it.

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod quiz;
pub mod store;
