//! Message composer pinned under the transcript

use crate::hooks::{use_layout, Layout};
use crate::store::{use_chat, ChatCommand};
use crate::utils;
use shared::Turn;
use uuid::Uuid;
use web_sys::{HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

/// Trim, squeeze runs of spaces to one space and runs of line breaks to one
/// `\n`. Returns None when nothing is left.
pub fn normalize_message(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.trim().chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ' ' => {
                while chars.peek() == Some(&' ') {
                    chars.next();
                }
                out.push(' ');
            }
            '\r' | '\n' => {
                while matches!(chars.peek(), Some('\r' | '\n')) {
                    chars.next();
                }
                out.push('\n');
            }
            _ => out.push(c),
        }
    }
    (!out.is_empty()).then_some(out)
}

/// Text to send for a submit attempt, or None if the submit is a no-op
pub fn prepare_submission(raw: &str, is_loading_message: bool) -> Option<String> {
    if is_loading_message {
        return None;
    }
    normalize_message(raw)
}

pub fn user_turn(message: String, id: String, timestamp: i64) -> Turn {
    Turn {
        id,
        message,
        is_user: true,
        metadata: None,
        timestamp,
    }
}

/// Plain Enter sends on desktop. Mobile keyboards keep Enter for newlines.
pub fn enter_submits(layout: Layout, key: &str, shift: bool) -> bool {
    layout == Layout::Desktop && key == "Enter" && !shift
}

#[derive(Properties, PartialEq)]
pub struct TypingPanelProps {
    #[prop_or_default]
    pub on_focus: Option<Callback<()>>,
    #[prop_or_default]
    pub on_blur: Option<Callback<()>>,
}

#[function_component(TypingPanel)]
pub fn typing_panel(props: &TypingPanelProps) -> Html {
    let chat = use_chat();
    let layout = use_layout().layout;
    let input_value = use_state(String::new);
    let input_ref = use_node_ref();

    let is_loading = chat.as_ref().is_some_and(|c| c.state.is_loading_message);
    let hidden = chat
        .as_ref()
        .is_some_and(|c| c.state.should_hide_composer());

    let focus_input = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: ()| {
            if let Some(input) = input_ref.cast::<HtmlTextAreaElement>() {
                let _ = input.focus();
            }
        })
    };

    // Grab focus on mount and whenever the input reappears after a reply
    {
        let focus_input = focus_input.clone();
        use_effect_with((hidden, is_loading), move |_| {
            focus_input.emit(());
            || ()
        });
    }

    let submit = {
        let input_value = input_value.clone();
        let commands = chat.as_ref().map(|c| c.commands.clone());
        let focus_input = focus_input.clone();
        Callback::from(move |_: ()| {
            let Some(message) = prepare_submission(&input_value, is_loading) else {
                return;
            };
            let Some(commands) = &commands else {
                return;
            };
            input_value.set(String::new());
            let turn = user_turn(message, Uuid::new_v4().to_string(), utils::now_millis());
            commands.emit(ChatCommand::SendUserMessage(turn));
            focus_input.emit(());
        })
    };

    if hidden {
        return html! {};
    }

    let on_submit = submit.reform(|e: SubmitEvent| e.prevent_default());

    let on_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            input_value.set(input.value());
        })
    };

    let on_keydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if enter_submits(layout, &e.key(), e.shift_key()) {
                e.prevent_default();
                submit.emit(());
            }
        })
    };

    let on_focus = {
        let observer = props.on_focus.clone();
        Callback::from(move |_: FocusEvent| {
            if let Some(observer) = &observer {
                observer.emit(());
            }
        })
    };

    let on_blur = {
        let observer = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| {
            if let Some(observer) = &observer {
                observer.emit(());
            }
        })
    };

    html! {
        <>
            <div id="chat-typing-panel" class="typing-panel">
                <div class="container relative">
                    <form class="typing-form" onsubmit={on_submit}>
                        if is_loading {
                            <div class="text-input thinking flex-1">
                                { "할 말을 생각 중이야. 잠시만 기다려줘!" }
                            </div>
                        } else {
                            <textarea
                                ref={input_ref}
                                class="chat-type flex-1"
                                rows="1"
                                autocomplete="off"
                                placeholder="나에게 할 말을 입력해줘!"
                                value={(*input_value).clone()}
                                oninput={on_input}
                                onkeydown={on_keydown}
                                onfocus={on_focus}
                                onblur={on_blur}
                            />
                        }
                        <button type="submit" class="button-main" disabled={is_loading}>
                            if layout.is_mobile() {
                                <span class="send-icon">{ "➤" }</span>
                            } else {
                                <span>{ "보내기" }</span>
                            }
                        </button>
                    </form>
                </div>
            </div>
            <div class="typing-panel-backdrop" />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_spaces_and_line_breaks() {
        assert_eq!(
            normalize_message("  hello   world\n\n\nfoo  "),
            Some("hello world\nfoo".to_string())
        );
    }

    #[test]
    fn carriage_returns_count_as_line_breaks() {
        assert_eq!(
            normalize_message("one\r\n\r\ntwo"),
            Some("one\ntwo".to_string())
        );
    }

    #[test]
    fn whitespace_only_is_rejected() {
        assert_eq!(normalize_message(""), None);
        assert_eq!(normalize_message("   "), None);
        assert_eq!(normalize_message(" \n\t \r\n "), None);
        assert_eq!(prepare_submission("   \n  ", false), None);
    }

    #[test]
    fn tabs_are_left_alone() {
        assert_eq!(normalize_message("a\t\tb"), Some("a\t\tb".to_string()));
    }

    #[test]
    fn pending_response_blocks_submission() {
        assert_eq!(prepare_submission("hello", true), None);
        assert_eq!(prepare_submission("hello", false), Some("hello".to_string()));
    }

    #[test]
    fn enter_shortcut_is_desktop_only() {
        assert!(enter_submits(Layout::Desktop, "Enter", false));
        assert!(!enter_submits(Layout::Desktop, "Enter", true));
        assert!(!enter_submits(Layout::Mobile, "Enter", false));
        assert!(!enter_submits(Layout::Desktop, "a", false));
    }

    #[test]
    fn user_turn_shape() {
        let turn = user_turn("hi".into(), "id-1".into(), 99);
        assert!(turn.is_user);
        assert!(turn.metadata.is_none());
        assert_eq!(turn.timestamp, 99);
    }
}
