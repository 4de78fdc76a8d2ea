//! The status banner each page uses to report the outcome of an action

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

/// Holds at most one message. Showing a message replaces the previous one
#[derive(Debug, Default)]
pub struct Banner {
    current: Option<Feedback>,
    #[cfg(test)]
    shown_count: usize,
}

impl Banner {
    pub fn show(&mut self, kind: FeedbackKind, message: impl Into<String>) {
        let message = message.into();
        debug!(?kind, message, "banner updated");
        self.current = Some(Feedback { kind, message });
        #[cfg(test)]
        {
            self.shown_count += 1;
        }
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show(FeedbackKind::Success, message);
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.show(FeedbackKind::Warning, message);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show(FeedbackKind::Error, message);
    }

    pub fn hide(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }

    pub fn kind(&self) -> Option<FeedbackKind> {
        self.current.as_ref().map(|feedback| feedback.kind)
    }

    pub fn message(&self) -> Option<&str> {
        self.current
            .as_ref()
            .map(|feedback| feedback.message.as_str())
    }

    /// Number of times a message was shown since creation
    #[cfg(test)]
    pub fn shown_count(&self) -> usize {
        self.shown_count
    }
}
