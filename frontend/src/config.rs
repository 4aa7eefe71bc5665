//! UI tunables shared across components.

/// Viewport widths at or above this (CSS px) use the desktop layout
pub const DESKTOP_MIN_WIDTH: f64 = 640.0;

/// Delay before re-pinning the mobile list after the input gains focus,
/// long enough for the on-screen keyboard to finish opening
pub const MOBILE_FOCUS_SCROLL_DELAY_MS: u32 = 200;

/// How long the "link copied" toast stays visible
pub const TOAST_DURATION_MS: u32 = 1000;

/// Longest accepted user name on the intro form
pub const MAX_NAME_LENGTH: usize = 20;

/// Accepted age range on the intro form
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;
