//! Session header with the share-link button

use super::toast::use_toaster;
use crate::store::use_chat;
use crate::utils;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

const COPIED_MESSAGE: &str = "링크가 클립보드에 복사되었습니다.";

#[derive(Properties, PartialEq)]
pub struct SessionInfoPanelProps {
    pub session_id: AttrValue,
    pub name: AttrValue,
    pub age: u32,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SessionInfoPanel)]
pub fn session_info_panel(props: &SessionInfoPanelProps) -> Html {
    html! {
        <div class="session-info-panel">
            <div class="session-info-fields">
                <span class="session-info-name">{ &props.name }</span>
                <span class="session-info-age">{ format!("{}세", props.age) }</span>
                <span class="session-info-id" title="Session ID">{ &props.session_id }</span>
            </div>
            { props.children.clone() }
        </div>
    }
}

/// Write `text` to the system clipboard
async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = window().ok_or("no window")?;
    let navigator = window.navigator();
    // navigator.clipboard is missing on insecure origins
    let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into())
        .ok()
        .and_then(|v| v.dyn_into::<web_sys::Clipboard>().ok())
        .ok_or("clipboard unavailable")?;
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// Copies the public transcript link for the loaded session
#[function_component(ShareButton)]
pub fn share_button() -> Html {
    let chat = use_chat();
    let toaster = use_toaster();
    let origin = use_memo((), |_| utils::get_origin());

    let session_id = chat
        .as_ref()
        .and_then(|c| c.state.session_id().map(str::to_string));
    let Some(session_id) = session_id else {
        return html! {};
    };
    let share_url = utils::share_url(&origin, &session_id);

    let on_click = Callback::from(move |_: MouseEvent| {
        let share_url = share_url.clone();
        let toaster = toaster.clone();
        spawn_local(async move {
            match copy_to_clipboard(&share_url).await {
                Ok(()) => {
                    if let Some(toaster) = toaster {
                        toaster.notify.emit(COPIED_MESSAGE.to_string());
                    }
                }
                Err(e) => log::warn!("Copy to clipboard failed: {}", e),
            }
        });
    });

    html! {
        <button class="button-clear button-tiny button-with-icon share-button" onclick={on_click}>
            <span class="share-icon">
                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect>
                    <path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path>
                </svg>
            </span>
            <span>{ "링크 공유하기" }</span>
        </button>
    }
}
