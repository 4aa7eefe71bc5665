//! Chat store: one reducer-backed state container shared through context.
//!
//! - `state.rs` - `ChatState`, the transcript and the reducer actions
//! - `commands.rs` - Requests from the views and the API calls behind them

mod commands;
mod state;

pub use commands::{run_command, ChatCommand};
pub use state::{ChatAction, ChatState, MessageStore};

#[cfg(test)]
pub(crate) use commands::test_support as command_support;
#[cfg(test)]
pub(crate) use state::test_support as state_support;

use crate::client::HttpChatApi;
use yew::prelude::*;

/// Handle given to every chat component through context
#[derive(Clone, PartialEq)]
pub struct ChatContext {
    pub state: UseReducerHandle<ChatState>,
    pub commands: Callback<ChatCommand>,
}

#[derive(Properties, PartialEq)]
pub struct ChatProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the chat reducer and runs commands against the HTTP API
#[function_component(ChatProvider)]
pub fn chat_provider(props: &ChatProviderProps) -> Html {
    let state = use_reducer(ChatState::default);

    let commands = {
        let state = state.clone();
        Callback::from(move |command: ChatCommand| {
            let dispatcher = state.dispatcher();
            let snapshot = (*state).clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = HttpChatApi::from_location();
                run_command(&api, &dispatcher, &snapshot, command).await;
            });
        })
    };

    let context = ChatContext { state, commands };

    html! {
        <ContextProvider<ChatContext> context={context}>
            { props.children.clone() }
        </ContextProvider<ChatContext>>
    }
}

/// Access the chat store from a component below `ChatProvider`
#[hook]
pub fn use_chat() -> Option<ChatContext> {
    use_context::<ChatContext>()
}
