mod emotion_picker;
mod message_view;
mod session_info_panel;
mod toast;

pub use emotion_picker::EmotionPicker;
pub use message_view::MessageView;
pub use session_info_panel::{SessionInfoPanel, ShareButton};
pub use toast::ToastHost;
