//! Custom Yew hooks for the frontend application.
//!
//! These hooks encapsulate reusable state logic to keep components clean and focused.

mod use_layout;
mod use_session_resolver;

pub use use_layout::{use_layout, use_viewport_layout, Layout, LayoutInfo};
pub use use_session_resolver::{use_session_resolver, LookupStatus};
