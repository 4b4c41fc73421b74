use std::cell::Cell;

/// Transient "assistant is composing" state.
///
/// `show` and `hide` are idempotent; the sink only hears actual transitions,
/// so every request yields exactly one show/hide pair regardless of how the
/// round trip ends.
pub struct TypingIndicator {
    shown: Cell<bool>,
    sink: Box<dyn Fn(bool)>,
}

impl TypingIndicator {
    pub fn new(sink: impl Fn(bool) + 'static) -> Self {
        Self {
            shown: Cell::new(false),
            sink: Box::new(sink),
        }
    }

    pub fn show(&self) {
        if !self.shown.replace(true) {
            (self.sink)(true);
        }
    }

    pub fn hide(&self) {
        if self.shown.replace(false) {
            (self.sink)(false);
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown.get()
    }
}
