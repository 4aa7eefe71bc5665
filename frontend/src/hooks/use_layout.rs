//! Responsive layout query, measured once and shared through context.

use crate::config::DESKTOP_MIN_WIDTH;
use gloo::events::EventListener;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Mobile,
    Desktop,
}

impl Layout {
    pub fn from_viewport_width(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Layout::Desktop
        } else {
            Layout::Mobile
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Layout::Mobile
    }
}

/// Current layout plus the height the on-screen keyboard leaves us
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInfo {
    pub layout: Layout,
    pub viewport_height: f64,
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self {
            layout: Layout::Desktop,
            viewport_height: 0.0,
        }
    }
}

fn measure() -> LayoutInfo {
    let Some(window) = web_sys::window() else {
        return LayoutInfo::default();
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(DESKTOP_MIN_WIDTH);
    // The visual viewport shrinks when the keyboard opens; innerHeight doesn't
    let viewport_height = window
        .visual_viewport()
        .map(|v| v.height())
        .or_else(|| window.inner_height().ok().and_then(|h| h.as_f64()))
        .unwrap_or_default();
    LayoutInfo {
        layout: Layout::from_viewport_width(width),
        viewport_height,
    }
}

/// Measure the viewport and keep the measurement current across resizes.
///
/// Call this once near the root and hand the value down with a
/// `ContextProvider<LayoutInfo>`; components read it with [`use_layout`].
#[hook]
pub fn use_viewport_layout() -> LayoutInfo {
    let info = use_state(measure);

    {
        let info = info.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            if let Some(window) = web_sys::window() {
                let on_window_resize = {
                    let info = info.clone();
                    EventListener::new(&window, "resize", move |_| info.set(measure()))
                };
                listeners.push(on_window_resize);

                if let Some(viewport) = window.visual_viewport() {
                    listeners.push(EventListener::new(&viewport, "resize", move |_| {
                        info.set(measure())
                    }));
                }
            }
            move || drop(listeners)
        });
    }

    *info
}

/// Layout provided by the nearest `ContextProvider<LayoutInfo>`
#[hook]
pub fn use_layout() -> LayoutInfo {
    use_context::<LayoutInfo>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(Layout::from_viewport_width(639.0), Layout::Mobile);
        assert_eq!(Layout::from_viewport_width(640.0), Layout::Desktop);
        assert_eq!(Layout::from_viewport_width(1920.0), Layout::Desktop);
        assert!(Layout::from_viewport_width(320.0).is_mobile());
    }
}
