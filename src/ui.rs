//! UI module for Tubelens
//! Dark gray gradient backdrop with blue and purple accents
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Primitives** (`primitives`): Canvas programs (spinner, line chart)
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling

pub mod animation;
pub mod components;
pub mod icons;
pub mod primitives;
pub mod theme;
pub mod widgets;
