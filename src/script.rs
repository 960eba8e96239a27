/// Text shown on first launch before anything has been saved.
pub const WELCOME_SCRIPT: &str = "Welcome to your Teleprompter!\n\nPaste your script here.\nThen click the play button to start scrolling.";

/// The single mutable script buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    text: String,
}

impl Default for Script {
    fn default() -> Self {
        Script::new(WELCOME_SCRIPT)
    }
}

impl Script {
    pub fn new(text: impl Into<String>) -> Self {
        Script { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the buffer. Returns whether the contents changed.
    pub fn set(&mut self, text: String) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text;
        true
    }

    pub fn clear(&mut self) -> bool {
        self.set(String::new())
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}
