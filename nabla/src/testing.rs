//! Fluent test harness for driving a session in tests.
//!
//! Wraps a headless [`Session`] behind a chainable API so tests read as a
//! keystroke script followed by assertions. Assertion helpers use
//! `#[track_caller]` so failures point at the test line, not in here.
//!
//! ```
//! use nabla::{Input, Session};
//!
//! Session::test()
//!     .type_chars("2+3")
//!     .press(Input::Slash)
//!     .assert_markup("2+\\frac{3}{\u{25A0}}");
//! ```

use crate::{events::SessionEvent, input::Input, session::Session};
use nabla_mathlist::Position;

/// Chainable wrapper around a [`Session`]; see the module docs.
pub struct TestSession {
    session: Session,
}

impl Session {
    /// Start a headless session for a test.
    pub fn test() -> TestSession {
        TestSession {
            session: Session::new(),
        }
    }
}

impl TestSession {
    /// Feed one input, panicking on any session fault.
    #[track_caller]
    pub fn press(mut self, input: Input) -> Self {
        self.session
            .key_press(input)
            .unwrap_or_else(|error| panic!("key press {input:?} failed: {error}"));
        self
    }

    /// Feed a sequence of inputs.
    #[track_caller]
    pub fn press_all(mut self, inputs: &[Input]) -> Self {
        for &input in inputs {
            self = self.press(input);
        }
        self
    }

    /// Feed every character of `text` as a character key.
    #[track_caller]
    pub fn type_chars(mut self, text: &str) -> Self {
        for ch in text.chars() {
            self = self.press(Input::Character(ch));
        }
        self
    }

    #[track_caller]
    pub fn assert_markup(self, expected: &str) -> Self {
        assert_eq!(self.session.markup(), expected, "markup mismatch");
        self
    }

    #[track_caller]
    pub fn assert_position(self, expected: &Position) -> Self {
        assert_eq!(
            self.session.position(),
            expected,
            "cursor position mismatch"
        );
        self
    }

    #[track_caller]
    pub fn assert_caret_visible(self, visible: bool) -> Self {
        assert_eq!(
            self.session.caret().is_some(),
            visible,
            "caret visibility mismatch"
        );
        self
    }

    /// Drains the event queue and asserts `expected` was emitted.
    #[track_caller]
    pub fn assert_emitted(mut self, expected: SessionEvent) -> Self {
        let events = self.session.take_events();
        assert!(
            events.contains(&expected),
            "expected {expected:?} among {events:?}"
        );
        self
    }

    /// Escape hatch for assertions the fluent surface does not cover.
    pub fn session(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }
}
