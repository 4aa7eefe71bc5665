//! Read-only transcript reached through a shared link

use crate::client::HttpChatApi;
use crate::components::{EmotionPicker, MessageView, SessionInfoPanel};
use crate::liveness::Liveness;
use crate::pages::chat::turn_rows;
use crate::store::MessageStore;
use shared::{ChatApi, SessionInfo};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum Transcript {
    Loading,
    Loaded(SessionInfo, MessageStore),
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct SharePageProps {
    pub session_id: AttrValue,
}

#[function_component(SharePage)]
pub fn share_page(props: &SharePageProps) -> Html {
    let transcript = use_state(|| Transcript::Loading);

    {
        let transcript = transcript.clone();
        use_effect_with(props.session_id.clone(), move |session_id| {
            let liveness = Liveness::new();
            let task_liveness = liveness.clone();
            let session_id = session_id.to_string();
            transcript.set(Transcript::Loading);

            spawn_local(async move {
                let api = HttpChatApi::from_location();
                let loaded = match api.load_session_info(&session_id).await {
                    Ok(info) => api
                        .load_messages(&session_id)
                        .await
                        .map(|turns| (info, turns)),
                    Err(e) => Err(e),
                };
                if !task_liveness.is_alive() {
                    return;
                }
                match loaded {
                    Ok((info, turns)) => {
                        transcript.set(Transcript::Loaded(info, MessageStore::from_turns(turns)))
                    }
                    Err(e) => {
                        log::debug!("Shared session {} unavailable: {}", session_id, e);
                        transcript.set(Transcript::NotFound);
                    }
                }
            });

            move || liveness.revoke()
        });
    }

    match &*transcript {
        Transcript::Loading => html! {
            <div class="share-page loading">{ "불러오는 중..." }</div>
        },
        Transcript::NotFound => html! {
            <div class="share-page not-found">{ "대화를 찾을 수 없어." }</div>
        },
        Transcript::Loaded(info, messages) => html! {
            <div class="share-page turn-list-container">
                <SessionInfoPanel
                    session_id={info.session_id.clone()}
                    name={info.name.clone()}
                    age={info.age}
                />
                <div class="turn-list container">
                    { for turn_rows(messages).into_iter().map(|row| {
                        let avatar: AttrValue = if row.turn.is_user {
                            info.name.clone().into()
                        } else {
                            "차차".into()
                        };
                        html! {
                            <MessageView key={row.turn.id.clone()} turn={row.turn.clone()} avatar_label={avatar}>
                                if row.turn.requests_emotion_selection() {
                                    <EmotionPicker message_id={row.turn.id.clone()} disabled={true} />
                                }
                            </MessageView>
                        }
                    }) }
                </div>
            </div>
        },
    }
}
