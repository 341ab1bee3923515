//! Announcement queue for assistive output.
//!
//! Announcements queued during a frame become audible on the next one,
//! after the visual change they describe has been presented.

use std::collections::VecDeque;

use tracing::debug;

/// How urgently an announcement should be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Read when idle.
    Polite,
    /// Interrupts current speech.
    Assertive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub priority: Priority,
}

/// Queues announcements and releases them one frame later.
#[derive(Debug, Default)]
pub struct Announcer {
    incoming: VecDeque<Announcement>,
    ready: VecDeque<Announcement>,
}

impl Announcer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn announce(&mut self, text: impl Into<String>) {
        self.push(text.into(), Priority::Polite);
    }

    pub fn announce_urgent(&mut self, text: impl Into<String>) {
        self.push(text.into(), Priority::Assertive);
    }

    fn push(&mut self, text: String, priority: Priority) {
        debug!("queueing announcement: {}", text);
        self.incoming.push_back(Announcement { text, priority });
    }

    /// Promote announcements queued during the previous frame. Call once
    /// per frame, after rendering.
    pub fn begin_frame(&mut self) {
        self.ready.append(&mut self.incoming);
    }

    /// Announcements due this frame, in queue order.
    pub fn drain(&mut self) -> Vec<Announcement> {
        self.ready.drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.incoming.is_empty() || !self.ready.is_empty()
    }
}
