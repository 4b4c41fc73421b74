//! Platform-neutral core of the RealtyAI chat widget: session identity,
//! reply-envelope data model, renderer dispatch, quick-reply suggestions, and
//! the message lifecycle controller. No DOM or network code lives here; hosts
//! plug those in through the [`ChatTransport`], [`StorageBackend`], and
//! [`ViewPorts`] seams.

pub mod controller;
pub mod error;
pub mod render;
pub mod session;
pub mod suggest;
pub mod types;
pub mod typing;

pub use controller::{ChatController, ChatTransport, Submission, ViewPorts};
pub use error::TransportError;
pub use render::{Card, ViewNode, format_lkr, render};
pub use session::{FirstOpenMarker, MemoryStorage, SessionStore, StorageBackend};
pub use suggest::suggest;
pub use types::{
    ChatApiResponse, ChatExchange, ChatMessage, ChatRequest, InvestmentItem, ListingItem,
    REPLY_FALLBACK_TEXT, ReplyEnvelope, Role,
};
pub use typing::TypingIndicator;
