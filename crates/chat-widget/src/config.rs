//! Widget configuration.

/// Fixed widget settings.
pub struct ChatConfig;

impl ChatConfig {
    /// Assistant endpoint the widget talks to.
    pub const ENDPOINT: &'static str = "/api/chat";

    /// localStorage key holding the visitor's session id.
    pub const SESSION_KEY: &'static str = "realty_session_id";

    /// sessionStorage marker set once the first-open greeting has fired.
    pub const GREETED_KEY: &'static str = "realty_greeted";

    /// Synthetic message sent for the first-open greeting.
    pub const GREETING_TRIGGER: &'static str = "hello";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_are_distinct() {
        assert_ne!(ChatConfig::SESSION_KEY, ChatConfig::GREETED_KEY);
        assert!(ChatConfig::ENDPOINT.starts_with('/'));
    }
}
