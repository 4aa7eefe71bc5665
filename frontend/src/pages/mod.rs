pub mod chat;
pub mod intro;
pub mod share;
