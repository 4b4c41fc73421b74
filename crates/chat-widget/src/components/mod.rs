mod chat_input;
mod chat_widget;
mod message_log;
mod quick_replies;
mod reply_view;
mod typing_dots;

pub use chat_input::ChatInput;
pub use chat_widget::ChatWidget;
pub use message_log::MessageLog;
pub use quick_replies::QuickReplies;
pub use reply_view::ReplyView;
pub use typing_dots::TypingDots;
