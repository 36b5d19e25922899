//! Terminal UI layer for the allocation categorizer.
//!
//! Provides themes, the multi-line input editor, the percentage-bar
//! component, summary table and bar-chart views, and the main
//! application event loop built on top of [`ratatui`].

pub mod app;
pub mod chart_view;
pub mod components;
pub mod editor;
pub mod summary_view;
pub mod themes;

pub use allocsum_core as core;
