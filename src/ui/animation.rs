//! Animation support for Tubelens
//!
//! Hover transitions for list rows are driven by `iced_anim` and ticked from
//! the window frame subscription.

mod hover;

pub use hover::HoverAnimations;
