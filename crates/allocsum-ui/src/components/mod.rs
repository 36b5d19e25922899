//! Reusable rendering components.

pub mod percent_bar;
