//! Toast notifications
//!
//! A toast is shown for a fixed duration and then disappears on its own.
//! Toasts raised while another is visible wait in a FIFO queue; when the
//! queue is full the oldest waiting toast is dropped.

use ratatui::style::Color;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of toasts waiting behind the visible one
pub const MAX_PENDING_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
    Info,
}

impl ToastKind {
    pub fn color(&self) -> Color {
        match self {
            ToastKind::Success => Color::Rgb(76, 175, 80),
            ToastKind::Warning => Color::Rgb(244, 67, 54),
            ToastKind::Error => Color::Rgb(183, 28, 28),
            ToastKind::Info => Color::Rgb(25, 118, 210),
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Warning => "!",
            ToastKind::Error => "✗",
            ToastKind::Info => "i",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }
}

/// Visible toast plus the queue waiting behind it
#[derive(Debug)]
pub struct ToastQueue {
    duration: Duration,
    current: Option<(Toast, Instant)>,
    pending: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
            pending: VecDeque::new(),
        }
    }

    pub fn push(&mut self, toast: Toast) {
        self.push_at(toast, Instant::now());
    }

    /// Expire the visible toast if its time is up and promote the next one
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref().map(|(toast, _)| toast)
    }

    #[cfg(test)]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.pending.is_empty()
    }

    fn push_at(&mut self, toast: Toast, now: Instant) {
        if self.current.is_none() {
            self.current = Some((toast, now));
            return;
        }
        if self.pending.len() >= MAX_PENDING_TOASTS {
            self.pending.pop_front();
        }
        self.pending.push_back(toast);
    }

    fn tick_at(&mut self, now: Instant) {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|(_, shown_at)| now.duration_since(*shown_at) >= self.duration);

        if expired {
            self.current = self.pending.pop_front().map(|toast| (toast, now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SECONDS: Duration = Duration::from_millis(2000);

    #[test]
    fn test_toast_expires_after_duration() {
        let start = Instant::now();
        let mut queue = ToastQueue::new(TWO_SECONDS);
        queue.push_at(Toast::info("Welcome"), start);

        queue.tick_at(start + Duration::from_millis(1999));
        assert_eq!(queue.current().map(|t| t.message.as_str()), Some("Welcome"));

        queue.tick_at(start + TWO_SECONDS);
        assert!(queue.current().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_overlapping_toasts_are_shown_in_order() {
        let start = Instant::now();
        let mut queue = ToastQueue::new(TWO_SECONDS);
        queue.push_at(Toast::info("first"), start);
        queue.push_at(Toast::success("second"), start + Duration::from_millis(100));
        assert_eq!(queue.pending_len(), 1);

        queue.tick_at(start + TWO_SECONDS);
        assert_eq!(queue.current(), Some(&Toast::success("second")));

        // The promoted toast gets its full duration from promotion time
        queue.tick_at(start + TWO_SECONDS + Duration::from_millis(1500));
        assert!(queue.current().is_some());
        queue.tick_at(start + TWO_SECONDS * 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_full_queue_drops_oldest_pending() {
        let start = Instant::now();
        let mut queue = ToastQueue::new(TWO_SECONDS);
        queue.push_at(Toast::info("visible"), start);
        for i in 0..=MAX_PENDING_TOASTS {
            queue.push_at(Toast::warning(format!("pending {}", i)), start);
        }
        assert_eq!(queue.pending_len(), MAX_PENDING_TOASTS);

        queue.tick_at(start + TWO_SECONDS);
        assert_eq!(queue.current(), Some(&Toast::warning("pending 1")));
    }
}
