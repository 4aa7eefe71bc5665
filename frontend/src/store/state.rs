//! Chat state container and the actions that mutate it.

use shared::{SessionInfo, Turn};
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;

/// Ordered transcript: `ids` is display order, `entities` holds the turns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageStore {
    ids: Vec<String>,
    entities: HashMap<String, Turn>,
}

impl MessageStore {
    pub fn from_turns(turns: Vec<Turn>) -> Self {
        let mut store = Self::default();
        for turn in turns {
            store.upsert(turn);
        }
        store
    }

    /// Insert a turn, or replace it in place if the id is already known
    pub fn upsert(&mut self, turn: Turn) {
        if !self.entities.contains_key(&turn.id) {
            self.ids.push(turn.id.clone());
        }
        self.entities.insert(turn.id.clone(), turn);
    }

    pub fn pop(&mut self) -> Option<Turn> {
        let id = self.ids.pop()?;
        self.entities.remove(&id)
    }

    #[cfg(test)]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Turn> {
        self.entities.get(id)
    }

    pub fn last(&self) -> Option<&Turn> {
        self.ids.last().and_then(|id| self.entities.get(id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Turns in display order
    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.ids.iter().filter_map(|id| self.entities.get(id))
    }
}

/// Everything the chat page reads. Only `reduce` changes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    /// Session id of the current route; loads for any other id are dropped
    pub route_session_id: Option<String>,
    pub session_info: Option<SessionInfo>,
    pub is_loading_message: bool,
    pub messages: MessageStore,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    /// The route now points at this session id (or at none)
    RouteChanged(Option<String>),
    /// Replace the session and its transcript, if it belongs to the route
    SessionLoaded { info: SessionInfo, turns: Vec<Turn> },
    /// Add a turn (user turns are appended before the server sees them)
    AppendTurn(Turn),
    /// A system reply is being generated
    ResponsePending,
    /// The system reply arrived
    ResponseReceived(Turn),
    /// Generating the system reply failed
    ResponseFailed,
    /// Drop the final turn if the system wrote it
    DiscardLastSystemTurn,
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::RouteChanged(route_id) => {
                if next.needs_reset(route_id.as_deref()) {
                    next = ChatState::default();
                }
                next.route_session_id = route_id;
            }
            ChatAction::SessionLoaded { info, turns } => {
                if next.route_session_id.as_deref() != Some(info.session_id.as_str()) {
                    log::debug!("Dropping late load of session {}", info.session_id);
                    return self;
                }
                // A reload of the open session must not drop a reply in flight
                let same_session = next.session_id() == Some(info.session_id.as_str());
                next.is_loading_message = same_session && next.is_loading_message;
                next.session_info = Some(info);
                next.messages = MessageStore::from_turns(turns);
            }
            ChatAction::AppendTurn(turn) => next.messages.upsert(turn),
            ChatAction::ResponsePending => next.is_loading_message = true,
            ChatAction::ResponseReceived(turn) => {
                next.messages.upsert(turn);
                next.is_loading_message = false;
            }
            ChatAction::ResponseFailed => next.is_loading_message = false,
            ChatAction::DiscardLastSystemTurn => {
                if next.messages.last().is_some_and(Turn::is_system) {
                    next.messages.pop();
                }
            }
        }
        next.into()
    }
}

impl ChatState {
    pub fn has_session(&self) -> bool {
        self.session_info.is_some()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_info.as_ref().map(|s| s.session_id.as_str())
    }

    /// Whether moving to `route_id` must clear the loaded session, its
    /// transcript and the pending flag
    pub fn needs_reset(&self, route_id: Option<&str>) -> bool {
        self.has_session() && self.session_id() != route_id
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.messages.last()
    }

    /// The composer gives way to the emotion picker when the system's latest
    /// turn asks for an emotion
    pub fn should_hide_composer(&self) -> bool {
        self.last_turn()
            .is_some_and(|t| t.is_system() && t.requests_emotion_selection())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use shared::TurnMetadata;

    pub fn turn(id: &str, is_user: bool) -> Turn {
        Turn {
            id: id.to_string(),
            message: format!("message {}", id),
            is_user,
            metadata: None,
            timestamp: 0,
        }
    }

    pub fn with_metadata(mut turn: Turn, metadata: TurnMetadata) -> Turn {
        turn.metadata = Some(metadata);
        turn
    }

    pub fn session(id: &str) -> SessionInfo {
        SessionInfo {
            session_id: id.to_string(),
            name: "Mina".to_string(),
            age: 11,
        }
    }

    /// Point the route at `id` and load it
    pub fn loaded(id: &str, turns: Vec<Turn>) -> Vec<ChatAction> {
        vec![
            ChatAction::RouteChanged(Some(id.to_string())),
            ChatAction::SessionLoaded {
                info: session(id),
                turns,
            },
        ]
    }

    pub fn reduce_all(actions: Vec<ChatAction>) -> Rc<ChatState> {
        actions
            .into_iter()
            .fold(Rc::new(ChatState::default()), |state, action| {
                state.reduce(action)
            })
    }
}
