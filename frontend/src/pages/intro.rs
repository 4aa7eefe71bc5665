//! Intro view: greets the user and starts a new session

use crate::client::HttpChatApi;
use crate::config::{MAX_AGE, MAX_NAME_LENGTH, MIN_AGE};
use crate::hooks::LookupStatus;
use crate::Route;
use shared::{ChatApi, CreateSessionRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Validate the intro form. Name is trimmed; age must be a whole number in range.
pub fn validate_intro(name: &str, age: &str) -> Option<CreateSessionRequest> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return None;
    }
    let age: u32 = age.trim().parse().ok()?;
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return None;
    }
    Some(CreateSessionRequest {
        name: name.to_string(),
        age,
    })
}

#[derive(Properties, PartialEq)]
pub struct IntroViewProps {
    #[prop_or_default]
    pub session_id: Option<String>,
    pub lookup: LookupStatus,
}

#[function_component(IntroView)]
pub fn intro_view(props: &IntroViewProps) -> Html {
    let navigator = use_navigator().unwrap();
    let name = use_state(String::new);
    let age = use_state(String::new);
    let creating = use_state(|| false);

    let request = validate_intro(&name, &age);
    let can_start = request.is_some() && !*creating;

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_age = {
        let age = age.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            age.set(input.value());
        })
    };

    let on_submit = {
        let creating = creating.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(request) = request.clone() else {
                return;
            };
            if *creating {
                return;
            }
            creating.set(true);
            let creating = creating.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let api = HttpChatApi::from_location();
                match api.create_session(&request).await {
                    Ok(info) => navigator.push(&Route::Chat {
                        session_id: info.session_id,
                    }),
                    Err(e) => {
                        log::error!("Failed to create session: {}", e);
                        creating.set(false);
                    }
                }
            });
        })
    };

    let notice = match (props.lookup, &props.session_id) {
        (LookupStatus::Checking, _) => Some("대화를 불러오는 중이야...".to_string()),
        (LookupStatus::Missing, Some(id)) => Some(format!("대화({})를 찾을 수 없어.", id)),
        _ => None,
    };

    html! {
        <div class="intro-view container">
            <h1 class="intro-title">{ "안녕! 나는 차차야." }</h1>
            <p class="intro-tagline">{ "오늘 있었던 일과 그때의 기분을 나에게 이야기해줘." }</p>
            if let Some(notice) = notice {
                <div class="intro-notice">{ notice }</div>
            }
            <form class="intro-form" onsubmit={on_submit}>
                <label>
                    <span>{ "이름" }</span>
                    <input
                        type="text"
                        autocomplete="off"
                        maxlength={MAX_NAME_LENGTH.to_string()}
                        value={(*name).clone()}
                        oninput={on_name}
                    />
                </label>
                <label>
                    <span>{ "나이" }</span>
                    <input
                        type="number"
                        min={MIN_AGE.to_string()}
                        max={MAX_AGE.to_string()}
                        value={(*age).clone()}
                        oninput={on_age}
                    />
                </label>
                <button type="submit" class="button-main" disabled={!can_start}>
                    { "시작하기" }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form() {
        assert_eq!(
            validate_intro("  Mina ", "11"),
            Some(CreateSessionRequest {
                name: "Mina".into(),
                age: 11
            })
        );
    }

    #[test]
    fn rejects_blank_or_long_names() {
        assert_eq!(validate_intro("   ", "11"), None);
        assert_eq!(validate_intro(&"가".repeat(MAX_NAME_LENGTH + 1), "11"), None);
        assert!(validate_intro(&"가".repeat(MAX_NAME_LENGTH), "11").is_some());
    }

    #[test]
    fn rejects_bad_ages() {
        assert_eq!(validate_intro("Mina", ""), None);
        assert_eq!(validate_intro("Mina", "0"), None);
        assert_eq!(validate_intro("Mina", "121"), None);
        assert_eq!(validate_intro("Mina", "12.5"), None);
        assert_eq!(validate_intro("Mina", "-3"), None);
    }
}
