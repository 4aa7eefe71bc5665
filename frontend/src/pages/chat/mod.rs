//! Chat page components
//!
//! - `ChatPage`: resolves the route's session and picks intro or chat
//! - `ChatView`: header, transcript and composer for a loaded session
//! - `MessageList`: transcript rows and the regenerate gesture
//! - `TypingPanel`: the message composer

mod chat_view;
mod message_list;
mod page;
mod typing_panel;

pub use message_list::turn_rows;
pub use page::ChatPage;

#[cfg(test)]
pub(crate) use page::{select_view, PageView};
