//! One chat bubble: avatar, text, time, and anything rendered under it

use crate::utils;
use shared::Turn;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MessageViewProps {
    pub turn: Turn,
    /// Initial shown in the avatar
    pub avatar_label: AttrValue,
    #[prop_or_default]
    pub on_avatar_double_click: Callback<()>,
    /// Rendered below the speech bubble (e.g. the emotion picker)
    #[prop_or_default]
    pub children: Html,
}

fn avatar_initial(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}

#[function_component(MessageView)]
pub fn message_view(props: &MessageViewProps) -> Html {
    let turn = &props.turn;
    let on_dblclick = props.on_avatar_double_click.reform(|_: MouseEvent| ());

    html! {
        <div class={classes!("turn", if turn.is_user { "turn-user" } else { "turn-system" })}>
            <div class="turn-avatar" ondblclick={on_dblclick} title={props.avatar_label.clone()}>
                { avatar_initial(&props.avatar_label) }
            </div>
            <div class="turn-body">
                <div class="turn-callout">{ &turn.message }</div>
                <div class="turn-time">{ utils::format_time(turn.timestamp) }</div>
                { props.children.clone() }
            </div>
        </div>
    }
}
