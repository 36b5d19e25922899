//! Core logic for the allocation categorizer.
//!
//! Provides the record parser, the frequency aggregator, the typed
//! allocation-label model, display formatting helpers, the error type,
//! and CLI settings handling.

pub mod aggregator;
pub mod error;
pub mod formatting;
pub mod models;
pub mod parser;
pub mod settings;
