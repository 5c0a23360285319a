//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`Spinner`] - Rotating loading indicator using Canvas
//! - [`LineChart`] - Single-series line chart with hover tooltip

pub mod line_chart;
pub mod spinner;

pub use line_chart::LineChart;
pub use spinner::{Spinner, view_spinner};
