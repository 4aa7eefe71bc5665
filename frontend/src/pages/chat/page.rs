//! Chat route: resolves the session id, then shows the intro or the chat

use super::chat_view::ChatView;
use crate::hooks::use_session_resolver;
use crate::pages::intro::IntroView;
use crate::store::{use_chat, ChatState};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView {
    Intro,
    Chat,
}

/// The chat view renders only when the route names a session and that
/// exact session is loaded
pub fn select_view(state: &ChatState, route_id: Option<&str>) -> PageView {
    match route_id {
        Some(id) if state.session_id() == Some(id) => PageView::Chat,
        _ => PageView::Intro,
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatPageProps {
    #[prop_or_default]
    pub session_id: Option<AttrValue>,
}

#[function_component(ChatPage)]
pub fn chat_page(props: &ChatPageProps) -> Html {
    let session_id = props.session_id.as_ref().map(|id| id.to_string());
    let lookup = use_session_resolver(session_id.clone());
    let chat = use_chat();

    let view = chat
        .as_ref()
        .map_or(PageView::Intro, |c| select_view(&c.state, session_id.as_deref()));

    html! {
        <>
            {
                match view {
                    PageView::Chat => html! { <ChatView /> },
                    PageView::Intro => html! { <IntroView session_id={session_id} lookup={lookup} /> },
                }
            }
            <div class="background-panel" />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::state_support::{loaded, reduce_all};
    use crate::store::ChatAction;

    #[test]
    fn no_session_shows_intro() {
        assert_eq!(select_view(&ChatState::default(), None), PageView::Intro);
        assert_eq!(select_view(&ChatState::default(), Some("abc")), PageView::Intro);
    }

    #[test]
    fn loaded_session_shows_chat() {
        let state = reduce_all(loaded("abc", vec![]));
        assert_eq!(select_view(&state, Some("abc")), PageView::Chat);
    }

    #[test]
    fn route_without_id_never_shows_chat() {
        let state = reduce_all(loaded("abc", vec![]));
        assert_eq!(select_view(&state, None), PageView::Intro);
    }

    #[test]
    fn mismatched_route_shows_intro() {
        let state = reduce_all(loaded("abc", vec![]));
        assert_eq!(select_view(&state, Some("xyz")), PageView::Intro);
    }

    #[test]
    fn leaving_a_session_returns_to_intro() {
        let mut actions = loaded("abc", vec![]);
        actions.push(ChatAction::RouteChanged(None));
        let state = reduce_all(actions);
        assert_eq!(select_view(&state, Some("abc")), PageView::Intro);
    }
}
