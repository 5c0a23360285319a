//! UI Components module - page sections bound to application messages
//!
//! Components combine widgets and primitives with application logic.
//! They are the only layer that should import from `crate::app`.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): Canvas programs
//! - **Widgets** (`crate::ui::widgets`): Composable UI patterns (no business logic)
//! - **Components** (this module): Page sections with Message handling

pub mod empty_state;
pub mod loading_panel;
pub mod url_form;
pub mod video_list;
pub mod views_chart;

pub use url_form::URL_INPUT_ID;
