//! Requests issued by the chat views and the async work behind them.
//!
//! Views never touch `ChatState` directly. They emit a [`ChatCommand`],
//! [`run_command`] talks to the backend and feeds [`ChatAction`]s back
//! through a [`Dispatch`] handle.

use super::state::{ChatAction, ChatState};
use shared::{ChatApi, Turn};
use yew::functional::UseReducerDispatcher;

#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    LoadChatSession(String),
    SendUserMessage(Turn),
    RegenerateLastSystemMessage,
}

/// Single entry point for state mutation
pub trait Dispatch {
    fn dispatch(&self, action: ChatAction);
}

impl Dispatch for UseReducerDispatcher<ChatState> {
    fn dispatch(&self, action: ChatAction) {
        UseReducerDispatcher::dispatch(self, action);
    }
}

/// Execute one command against the API.
///
/// `snapshot` is the state the command was issued from; it decides whether
/// send and regenerate are allowed at all.
pub async fn run_command<A, D>(api: &A, dispatcher: &D, snapshot: &ChatState, command: ChatCommand)
where
    A: ChatApi,
    D: Dispatch,
{
    match command {
        ChatCommand::LoadChatSession(session_id) => {
            load_chat_session(api, dispatcher, &session_id).await
        }
        ChatCommand::SendUserMessage(turn) => {
            let Some(session_id) = snapshot.session_id() else {
                log::warn!("Dropping message {}: no session loaded", turn.id);
                return;
            };
            send_user_message(api, dispatcher, session_id, turn).await
        }
        ChatCommand::RegenerateLastSystemMessage => {
            let Some(session_id) = snapshot.session_id() else {
                return;
            };
            if snapshot.is_loading_message || !snapshot.last_turn().is_some_and(Turn::is_system) {
                log::debug!("Regenerate ignored: nothing to regenerate");
                return;
            }
            regenerate_last_system_message(api, dispatcher, session_id).await
        }
    }
}

async fn load_chat_session<A: ChatApi, D: Dispatch>(api: &A, dispatcher: &D, session_id: &str) {
    let info = match api.load_session_info(session_id).await {
        Ok(info) => info,
        Err(e) => {
            log::error!("Failed to load session {}: {}", session_id, e);
            return;
        }
    };
    match api.load_messages(session_id).await {
        Ok(turns) => dispatcher.dispatch(ChatAction::SessionLoaded { info, turns }),
        Err(e) => log::error!("Failed to load messages for {}: {}", session_id, e),
    }
}

async fn send_user_message<A: ChatApi, D: Dispatch>(
    api: &A,
    dispatcher: &D,
    session_id: &str,
    turn: Turn,
) {
    dispatcher.dispatch(ChatAction::AppendTurn(turn.clone()));
    dispatcher.dispatch(ChatAction::ResponsePending);
    match api.send_message(session_id, &turn).await {
        Ok(reply) => dispatcher.dispatch(ChatAction::ResponseReceived(reply)),
        Err(e) => {
            log::error!("Failed to send message: {}", e);
            dispatcher.dispatch(ChatAction::ResponseFailed);
        }
    }
}

async fn regenerate_last_system_message<A: ChatApi, D: Dispatch>(
    api: &A,
    dispatcher: &D,
    session_id: &str,
) {
    dispatcher.dispatch(ChatAction::DiscardLastSystemTurn);
    dispatcher.dispatch(ChatAction::ResponsePending);
    match api.regenerate(session_id).await {
        Ok(reply) => dispatcher.dispatch(ChatAction::ResponseReceived(reply)),
        Err(e) => {
            log::error!("Failed to regenerate reply: {}", e);
            dispatcher.dispatch(ChatAction::ResponseFailed);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use shared::{ApiError, CreateSessionRequest, SessionInfo};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Records every dispatched action
    #[derive(Default)]
    pub struct RecordingDispatcher {
        pub actions: RefCell<Vec<ChatAction>>,
    }

    impl Dispatch for RecordingDispatcher {
        fn dispatch(&self, action: ChatAction) {
            self.actions.borrow_mut().push(action);
        }
    }

    impl RecordingDispatcher {
        pub fn take(&self) -> Vec<ChatAction> {
            std::mem::take(&mut *self.actions.borrow_mut())
        }
    }

    /// In-memory backend with a fixed set of sessions
    #[derive(Default)]
    pub struct FakeApi {
        pub sessions: HashMap<String, (SessionInfo, Vec<Turn>)>,
        pub reply: Option<Turn>,
        pub fail_sends: bool,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        pub fn with_session(info: SessionInfo, turns: Vec<Turn>) -> Self {
            let mut api = Self::default();
            api.sessions.insert(info.session_id.clone(), (info, turns));
            api
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }

        fn reply(&self) -> Result<Turn, ApiError> {
            if self.fail_sends {
                return Err(ApiError::Server {
                    status: 500,
                    message: "generator crashed".into(),
                });
            }
            self.reply
                .clone()
                .ok_or_else(|| ApiError::Parse("no reply configured".into()))
        }
    }

    impl ChatApi for FakeApi {
        async fn load_session_info(&self, session_id: &str) -> Result<SessionInfo, ApiError> {
            self.record(format!("info {}", session_id));
            self.sessions
                .get(session_id)
                .map(|(info, _)| info.clone())
                .ok_or_else(|| ApiError::NotFound(session_id.to_string()))
        }

        async fn load_messages(&self, session_id: &str) -> Result<Vec<Turn>, ApiError> {
            self.record(format!("messages {}", session_id));
            self.sessions
                .get(session_id)
                .map(|(_, turns)| turns.clone())
                .ok_or_else(|| ApiError::NotFound(session_id.to_string()))
        }

        async fn send_message(&self, session_id: &str, turn: &Turn) -> Result<Turn, ApiError> {
            self.record(format!("send {} {}", session_id, turn.id));
            self.reply()
        }

        async fn regenerate(&self, session_id: &str) -> Result<Turn, ApiError> {
            self.record(format!("regenerate {}", session_id));
            self.reply()
        }

        async fn create_session(
            &self,
            req: &CreateSessionRequest,
        ) -> Result<SessionInfo, ApiError> {
            self.record(format!("create {}", req.name));
            Ok(SessionInfo {
                session_id: "new-session".into(),
                name: req.name.clone(),
                age: req.age,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::pages::chat::{select_view, PageView};
    use crate::store::state::test_support::{loaded, reduce_all, session, turn};
    use futures::executor::block_on;
    use yew::functional::Reducible;

    #[test]
    fn load_dispatches_session_and_turns() {
        let api = FakeApi::with_session(session("abc"), vec![turn("s1", false)]);
        let dispatcher = RecordingDispatcher::default();
        block_on(run_command(
            &api,
            &dispatcher,
            &ChatState::default(),
            ChatCommand::LoadChatSession("abc".into()),
        ));
        assert_eq!(
            dispatcher.take(),
            vec![ChatAction::SessionLoaded {
                info: session("abc"),
                turns: vec![turn("s1", false)],
            }]
        );
    }

    #[test]
    fn late_load_after_leaving_route_changes_nothing() {
        let api = FakeApi::with_session(session("abc"), vec![turn("s1", false)]);
        let dispatcher = RecordingDispatcher::default();
        let mut actions = loaded("abc", vec![turn("s1", false)]);
        actions.push(ChatAction::RouteChanged(None));
        let home = reduce_all(actions);

        block_on(run_command(
            &api,
            &dispatcher,
            &home,
            ChatCommand::LoadChatSession("abc".into()),
        ));
        let after = dispatcher
            .take()
            .into_iter()
            .fold(home, |state, action| state.reduce(action));

        assert!(!after.has_session());
        assert_eq!(select_view(&after, None), PageView::Intro);
    }

    #[test]
    fn load_of_unknown_session_dispatches_nothing() {
        let api = FakeApi::default();
        let dispatcher = RecordingDispatcher::default();
        block_on(run_command(
            &api,
            &dispatcher,
            &ChatState::default(),
            ChatCommand::LoadChatSession("missing".into()),
        ));
        assert!(dispatcher.take().is_empty());
    }

    #[test]
    fn send_appends_then_receives_reply() {
        let mut api = FakeApi::with_session(session("abc"), vec![]);
        api.reply = Some(turn("s2", false));
        let snapshot = reduce_all(loaded("abc", vec![]));
        let dispatcher = RecordingDispatcher::default();
        block_on(run_command(
            &api,
            &dispatcher,
            &snapshot,
            ChatCommand::SendUserMessage(turn("u1", true)),
        ));
        assert_eq!(
            dispatcher.take(),
            vec![
                ChatAction::AppendTurn(turn("u1", true)),
                ChatAction::ResponsePending,
                ChatAction::ResponseReceived(turn("s2", false)),
            ]
        );
        assert_eq!(*api.calls.borrow(), vec!["send abc u1".to_string()]);
    }

    #[test]
    fn failed_send_clears_pending() {
        let mut api = FakeApi::with_session(session("abc"), vec![]);
        api.fail_sends = true;
        let snapshot = reduce_all(loaded("abc", vec![]));
        let dispatcher = RecordingDispatcher::default();
        block_on(run_command(
            &api,
            &dispatcher,
            &snapshot,
            ChatCommand::SendUserMessage(turn("u1", true)),
        ));
        let actions = dispatcher.take();
        assert_eq!(actions.last(), Some(&ChatAction::ResponseFailed));
    }

    #[test]
    fn send_without_session_is_dropped() {
        let api = FakeApi::default();
        let dispatcher = RecordingDispatcher::default();
        block_on(run_command(
            &api,
            &dispatcher,
            &ChatState::default(),
            ChatCommand::SendUserMessage(turn("u1", true)),
        ));
        assert!(dispatcher.take().is_empty());
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn regenerate_replaces_last_system_turn() {
        let mut api = FakeApi::with_session(session("abc"), vec![]);
        api.reply = Some(turn("s2", false));
        let snapshot = reduce_all(loaded("abc", vec![turn("u1", true), turn("s1", false)]));
        let dispatcher = RecordingDispatcher::default();
        block_on(run_command(
            &api,
            &dispatcher,
            &snapshot,
            ChatCommand::RegenerateLastSystemMessage,
        ));
        let actions = dispatcher.take();
        assert_eq!(
            actions,
            vec![
                ChatAction::DiscardLastSystemTurn,
                ChatAction::ResponsePending,
                ChatAction::ResponseReceived(turn("s2", false)),
            ]
        );

        let after = actions
            .into_iter()
            .fold(snapshot, |state, action| state.reduce(action));
        assert_eq!(after.messages.ids(), ["u1", "s2"]);
    }

    #[test]
    fn regenerate_ignored_while_pending_or_after_user_turn() {
        let api = FakeApi::with_session(session("abc"), vec![]);
        let dispatcher = RecordingDispatcher::default();

        let pending = reduce_all(
            loaded("abc", vec![turn("s1", false)])
                .into_iter()
                .chain([ChatAction::ResponsePending])
                .collect(),
        );
        block_on(run_command(
            &api,
            &dispatcher,
            &pending,
            ChatCommand::RegenerateLastSystemMessage,
        ));

        let user_last = reduce_all(loaded("abc", vec![turn("s1", false), turn("u1", true)]));
        block_on(run_command(
            &api,
            &dispatcher,
            &user_last,
            ChatCommand::RegenerateLastSystemMessage,
        ));

        assert!(dispatcher.take().is_empty());
        assert!(api.calls.borrow().is_empty());
    }
}
