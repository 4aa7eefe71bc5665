//! Emotion Picker Component
//!
//! Shown under a system turn that asks the user to name their feelings.
//! Only the picker on the latest turn is interactive.

use crate::store::{use_chat, ChatCommand};
use crate::utils;
use shared::{Emotion, Turn, TurnMetadata, EMOTIONS};
use std::collections::BTreeSet;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmotionPickerProps {
    /// Turn the picker belongs to
    pub message_id: AttrValue,
    #[prop_or(false)]
    pub disabled: bool,
}

/// Build the user turn that answers an emotion request.
///
/// `selected` holds indices into `EMOTIONS`; labels keep picker order.
/// Returns None when nothing is selected.
pub fn emotion_answer(selected: &BTreeSet<usize>, id: String, timestamp: i64) -> Option<Turn> {
    let emotions: Vec<&Emotion> = selected.iter().filter_map(|&i| EMOTIONS.get(i)).collect();
    if emotions.is_empty() {
        return None;
    }
    let message = emotions
        .iter()
        .map(|e| e.label)
        .collect::<Vec<_>>()
        .join(", ");
    Some(Turn {
        id,
        message,
        is_user: true,
        metadata: Some(TurnMetadata {
            selected_emotions: Some(emotions.iter().map(|e| e.key.to_string()).collect()),
            ..Default::default()
        }),
        timestamp,
    })
}

#[function_component(EmotionPicker)]
pub fn emotion_picker(props: &EmotionPickerProps) -> Html {
    let chat = use_chat();
    let selected = use_state(BTreeSet::<usize>::new);

    let is_loading = chat
        .as_ref()
        .is_some_and(|c| c.state.is_loading_message);
    let disabled = props.disabled || is_loading;

    let on_confirm = {
        let selected = selected.clone();
        let commands = chat.map(|c| c.commands);
        Callback::from(move |_: MouseEvent| {
            if disabled {
                return;
            }
            let answer = emotion_answer(&selected, Uuid::new_v4().to_string(), utils::now_millis());
            if let (Some(turn), Some(commands)) = (answer, commands.as_ref()) {
                commands.emit(ChatCommand::SendUserMessage(turn));
                selected.set(BTreeSet::new());
            }
        })
    };

    html! {
        <div class={classes!("emotion-picker", disabled.then_some("disabled"))} data-message-id={props.message_id.clone()}>
            <div class="emotion-options">
                { for EMOTIONS.iter().enumerate().map(|(index, emotion)| {
                    let is_selected = selected.contains(&index);
                    let on_toggle = {
                        let selected = selected.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*selected).clone();
                            if !next.remove(&index) {
                                next.insert(index);
                            }
                            selected.set(next);
                        })
                    };
                    html! {
                        <button
                            type="button"
                            key={emotion.key}
                            class={classes!("emotion-option", is_selected.then_some("selected"))}
                            onclick={on_toggle}
                            disabled={disabled}
                        >
                            { emotion.label }
                        </button>
                    }
                }) }
            </div>
            <button
                type="button"
                class="button-main emotion-confirm"
                onclick={on_confirm}
                disabled={disabled || selected.is_empty()}
            >
                { "선택 완료" }
            </button>
        </div>
    }
}
