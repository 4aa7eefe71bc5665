//! Active conversation: session header, transcript, composer.
//!
//! The transcript scrolls in one of two containers. On desktop the outer
//! page container scrolls; on mobile the inner list scrolls while the outer
//! container is pinned to the visual viewport height so the composer stays
//! above the on-screen keyboard.

use super::message_list::MessageList;
use super::typing_panel::TypingPanel;
use crate::components::{SessionInfoPanel, ShareButton};
use crate::config::MOBILE_FOCUS_SCROLL_DELAY_MS;
use crate::hooks::{use_layout, Layout};
use crate::store::use_chat;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Scroll offset that shows the bottom of the content
pub fn bottom_offset(scroll_height: i32, client_height: i32) -> i32 {
    (scroll_height - client_height).max(0)
}

fn scroll_to_bottom(container: &NodeRef) {
    let Some(element) = container.cast::<Element>() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_top(bottom_offset(element.scroll_height(), element.client_height()) as f64);
    element.scroll_to_with_scroll_to_options(&options);
}

/// Deferred scroll work; dropping a handle cancels it
#[derive(Default)]
struct PendingScroll {
    frame: Option<AnimationFrame>,
    delay: Option<Timeout>,
}

#[function_component(ChatView)]
pub fn chat_view() -> Html {
    let chat = use_chat();
    let layout_info = use_layout();
    let is_mobile = layout_info.layout == Layout::Mobile;

    let desktop_scroll_ref = use_node_ref();
    let mobile_scroll_ref = use_node_ref();
    let pending = use_mut_ref(PendingScroll::default);

    let active_container = if is_mobile {
        mobile_scroll_ref.clone()
    } else {
        desktop_scroll_ref.clone()
    };

    // Pin to the newest message once layout has settled
    let message_count = chat.as_ref().map_or(0, |c| c.state.messages.len());
    {
        let pending = pending.clone();
        let container = active_container.clone();
        use_effect_with(message_count, move |_| {
            schedule_frame(&pending, container);
            || ()
        });
    }

    // Keyboard opening on mobile shrinks the viewport after focus
    let on_typing_focus = {
        let pending = pending.clone();
        let container = active_container.clone();
        Callback::from(move |_: ()| {
            if !is_mobile {
                return;
            }
            let container = container.clone();
            let delay = Timeout::new(MOBILE_FOCUS_SCROLL_DELAY_MS, move || {
                scroll_to_bottom(&container)
            });
            pending.borrow_mut().delay = Some(delay);
        })
    };

    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                let mut pending = pending.borrow_mut();
                pending.frame.take();
                pending.delay.take();
            }
        });
    }

    let Some(info) = chat.as_ref().and_then(|c| c.state.session_info.clone()) else {
        return html! {};
    };

    let container_style = is_mobile.then(|| {
        let height = layout_info.viewport_height;
        format!(
            "max-height: {h}px; height: {h}px; min-height: {h}px;",
            h = height
        )
    });

    html! {
        <div class="turn-list-container" style={container_style} ref={desktop_scroll_ref}>
            <SessionInfoPanel session_id={info.session_id} name={info.name} age={info.age}>
                <ShareButton />
            </SessionInfoPanel>
            <div class="turn-list container" ref={mobile_scroll_ref}>
                <MessageList />
            </div>
            <TypingPanel on_focus={on_typing_focus} />
        </div>
    }
}

fn schedule_frame(pending: &Rc<RefCell<PendingScroll>>, container: NodeRef) {
    let frame = request_animation_frame(move |_| scroll_to_bottom(&container));
    pending.borrow_mut().frame = Some(frame);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_offset_never_negative() {
        assert_eq!(bottom_offset(1200, 800), 400);
        assert_eq!(bottom_offset(800, 800), 0);
        assert_eq!(bottom_offset(300, 800), 0);
    }
}
