//! Workout plan generation and external-inference reconciliation engine.
//!
//! The engine turns a free-text request (or a profession name) into a
//! schema-valid workout plan, using a deterministic rules engine over a
//! curated exercise catalog plus an optional call to an external
//! text-generation service whose output is parsed, validated, and replaced
//! by the deterministic path whenever it cannot be trusted.

pub mod api;
pub mod config;
pub mod data;
pub mod models;
pub mod services;
