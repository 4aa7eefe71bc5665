//! Transcript rendering and the regenerate gesture

use crate::components::{EmotionPicker, MessageView};
use crate::store::{use_chat, ChatCommand, MessageStore};
use shared::Turn;
use yew::prelude::*;

const REGENERATE_PROMPT: &str = "차차의 마지막 메시지를 다시 요청할래?";
const SYSTEM_AVATAR: &str = "차차";

/// A turn to render and whether it is the last turn of the transcript.
///
/// Last-ness is positional over the whole transcript, hidden turns included:
/// when the final turn is hidden, no rendered row is last.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRow<'a> {
    pub turn: &'a Turn,
    pub is_last: bool,
}

pub fn turn_rows(messages: &MessageStore) -> Vec<TurnRow<'_>> {
    let count = messages.len();
    messages
        .iter()
        .enumerate()
        .map(|(index, turn)| TurnRow {
            turn,
            is_last: index + 1 == count,
        })
        .filter(|row| !row.turn.is_hidden())
        .collect()
}

/// Handle a double-click on a turn's avatar.
///
/// Only the final system turn can be regenerated; `confirm` is asked first
/// and nothing happens unless it returns true.
pub fn regenerate_request(
    turn: &Turn,
    is_last: bool,
    confirm: impl FnOnce(&str) -> bool,
) -> Option<ChatCommand> {
    if turn.is_user || !is_last {
        return None;
    }
    confirm(REGENERATE_PROMPT).then_some(ChatCommand::RegenerateLastSystemMessage)
}

#[derive(Properties, PartialEq)]
pub struct SessionMessageViewProps {
    pub turn: Turn,
    pub is_last: bool,
}

#[function_component(SessionMessageView)]
pub fn session_message_view(props: &SessionMessageViewProps) -> Html {
    let chat = use_chat();
    let user_name = chat
        .as_ref()
        .and_then(|c| c.state.session_info.as_ref().map(|s| s.name.clone()))
        .unwrap_or_default();

    let on_avatar_double_click = {
        let turn = props.turn.clone();
        let is_last = props.is_last;
        let commands = chat.as_ref().map(|c| c.commands.clone());
        Callback::from(move |_: ()| {
            let command = regenerate_request(&turn, is_last, gloo::dialogs::confirm);
            if let (Some(command), Some(commands)) = (command, &commands) {
                commands.emit(command);
            }
        })
    };

    let avatar_label: AttrValue = if props.turn.is_user {
        user_name.into()
    } else {
        SYSTEM_AVATAR.into()
    };

    html! {
        <MessageView
            turn={props.turn.clone()}
            avatar_label={avatar_label}
            on_avatar_double_click={on_avatar_double_click}
        >
            if props.turn.requests_emotion_selection() {
                <EmotionPicker message_id={props.turn.id.clone()} disabled={!props.is_last} />
            }
        </MessageView>
    }
}

/// Every visible turn of the loaded session
#[function_component(MessageList)]
pub fn message_list() -> Html {
    let Some(chat) = use_chat() else {
        return html! {};
    };

    html! {
        <>
            { for turn_rows(&chat.state.messages).into_iter().map(|row| html! {
                <SessionMessageView key={row.turn.id.clone()} turn={row.turn.clone()} is_last={row.is_last} />
            }) }
        </>
    }
}
