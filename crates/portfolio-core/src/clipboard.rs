use crate::constants::{COPIED_ICON, COPY_ICON, COPY_RESET_MS};
use crate::timer::Countdown;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,
}

/// System clipboard seam.
pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// "Copy my email" button with a transient copied state.
pub struct CopyButton<C: ClipboardSink> {
    sink: C,
    text: String,
    copied: bool,
    reset: Countdown,
}

impl<C: ClipboardSink> CopyButton<C> {
    pub fn new(sink: C, text: impl Into<String>) -> Self {
        Self {
            sink,
            text: text.into(),
            copied: false,
            reset: Countdown::new(),
        }
    }

    /// Copy the text and show the copied state for the next two seconds.
    /// A repeat press restarts the window.
    pub fn activate(&mut self) {
        if let Err(e) = self.sink.write_text(&self.text) {
            log::debug!("[copy] clipboard write failed: {}", e);
        }
        self.copied = true;
        self.reset.start(Duration::from_millis(COPY_RESET_MS));
    }

    /// Returns `true` when the copied flag was cleared.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.reset.tick(dt) {
            self.copied = false;
            return true;
        }
        false
    }

    #[inline]
    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn icon(&self) -> &'static str {
        if self.copied {
            COPIED_ICON
        } else {
            COPY_ICON
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sink(&self) -> &C {
        &self.sink
    }
}
