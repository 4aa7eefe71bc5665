//! Transient notifications
//!
//! A toast with the same text as one already on screen is dropped, so
//! hammering a button doesn't stack identical messages.

use crate::config::TOAST_DURATION_MS;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Show(Toast),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(toast) => {
                if self.toasts.iter().any(|t| t.text == toast.text) {
                    return self;
                }
                let mut toasts = self.toasts.clone();
                toasts.push(toast);
                Rc::new(ToastQueue { toasts })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                let toasts = self.toasts.iter().filter(|t| t.id != id).cloned().collect();
                Rc::new(ToastQueue { toasts })
            }
        }
    }
}

/// Lets any component below `ToastHost` raise a toast
#[derive(Clone, PartialEq)]
pub struct Toaster {
    pub notify: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_mut_ref(|| 0u32);

    let notify = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |text: String| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next = next.wrapping_add(1);
                *next
            };
            dispatcher.dispatch(ToastAction::Show(Toast { id, text }));

            let dispatcher = dispatcher.clone();
            Timeout::new(TOAST_DURATION_MS, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    html! {
        <ContextProvider<Toaster> context={Toaster { notify }}>
            { props.children.clone() }
            <div class="toast-stack" aria-live="polite">
                { for queue.toasts.iter().map(|toast| html! {
                    <div key={toast.id.to_string()} class="toast">{ &toast.text }</div>
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[hook]
pub fn use_toaster() -> Option<Toaster> {
    use_context::<Toaster>()
}
