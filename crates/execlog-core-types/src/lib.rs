//! Core types shared across the execlog crates
//!
//! This crate provides the small vocabulary used by both the logging
//! engine and the tracing mirror it emits:
//!
//! - **Correlation types**: LoggerId, one per logger instance
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::LoggerId;
