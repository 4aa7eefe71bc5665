//! Hook that turns the route's session id into a loaded chat session.

use crate::client::HttpChatApi;
use crate::liveness::Liveness;
use crate::store::{use_chat, ChatAction, ChatCommand};
use shared::{ChatApi, SessionInfo};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Outcome of one existence lookup
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(SessionInfo),
    Missing,
    /// The view that asked went away before the answer came back
    Abandoned,
}

/// Where the lookup for the current route stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    NoSession,
    Checking,
    Found,
    Missing,
}

/// Ask the backend whether `session_id` exists.
///
/// Failures of any kind collapse into `Missing`; the caller shows the intro
/// view instead of an error.
pub async fn resolve_session<A: ChatApi>(
    api: &A,
    session_id: &str,
    liveness: &Liveness,
) -> Resolution {
    let result = api.load_session_info(session_id).await;
    if !liveness.is_alive() {
        return Resolution::Abandoned;
    }
    match result {
        Ok(info) => Resolution::Found(info),
        Err(e) => {
            log::debug!("Session {} not resolved: {}", session_id, e);
            Resolution::Missing
        }
    }
}

/// Resolve the route's session id and load it into the chat store.
///
/// Re-runs whenever `session_id` changes. The store learns the new route
/// first, which resets it when a different session was loaded.
#[hook]
pub fn use_session_resolver(session_id: Option<String>) -> LookupStatus {
    let status = use_state(|| LookupStatus::NoSession);
    let chat = use_chat();

    {
        let status = status.clone();
        use_effect_with(session_id, move |session_id| {
            let liveness = Liveness::new();

            // Clears the store when the id differs and fences off late loads
            if let Some(chat) = &chat {
                chat.state.dispatch(ChatAction::RouteChanged(session_id.clone()));
            }

            match (session_id.clone(), chat) {
                (Some(id), Some(chat)) => {
                    status.set(LookupStatus::Checking);
                    let task_liveness = liveness.clone();
                    spawn_local(async move {
                        let api = HttpChatApi::from_location();
                        match resolve_session(&api, &id, &task_liveness).await {
                            Resolution::Found(_) => {
                                status.set(LookupStatus::Found);
                                chat.commands.emit(ChatCommand::LoadChatSession(id));
                            }
                            Resolution::Missing => status.set(LookupStatus::Missing),
                            Resolution::Abandoned => {}
                        }
                    });
                }
                (Some(_), None) => log::error!("use_session_resolver needs a ChatProvider"),
                (None, _) => status.set(LookupStatus::NoSession),
            }

            move || liveness.revoke()
        });
    }

    *status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::command_support::FakeApi;
    use crate::store::state_support::session;
    use futures::executor::block_on;
    use shared::{ApiError, CreateSessionRequest, Turn};

    #[test]
    fn existing_session_is_found() {
        let api = FakeApi::with_session(session("abc"), vec![]);
        let result = block_on(resolve_session(&api, "abc", &Liveness::new()));
        assert_eq!(result, Resolution::Found(session("abc")));
    }

    #[test]
    fn lookup_failure_is_swallowed() {
        let api = FakeApi::default();
        let result = block_on(resolve_session(&api, "nope", &Liveness::new()));
        assert_eq!(result, Resolution::Missing);
    }

    /// Tears the view down while the request is in flight
    struct TeardownDuringLookup {
        inner: FakeApi,
        liveness: Liveness,
    }

    impl ChatApi for TeardownDuringLookup {
        async fn load_session_info(&self, session_id: &str) -> Result<SessionInfo, ApiError> {
            self.liveness.revoke();
            self.inner.load_session_info(session_id).await
        }

        async fn load_messages(&self, session_id: &str) -> Result<Vec<Turn>, ApiError> {
            self.inner.load_messages(session_id).await
        }

        async fn send_message(&self, session_id: &str, turn: &Turn) -> Result<Turn, ApiError> {
            self.inner.send_message(session_id, turn).await
        }

        async fn regenerate(&self, session_id: &str) -> Result<Turn, ApiError> {
            self.inner.regenerate(session_id).await
        }

        async fn create_session(
            &self,
            req: &CreateSessionRequest,
        ) -> Result<SessionInfo, ApiError> {
            self.inner.create_session(req).await
        }
    }

    #[test]
    fn result_for_abandoned_view_is_dropped() {
        let liveness = Liveness::new();
        let api = TeardownDuringLookup {
            inner: FakeApi::with_session(session("abc"), vec![]),
            liveness: liveness.clone(),
        };
        let result = block_on(resolve_session(&api, "abc", &liveness));
        assert_eq!(result, Resolution::Abandoned);
    }
}
