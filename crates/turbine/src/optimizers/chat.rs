//! Chat burst suppression.
//!
//! Coalesces server-wide chat bursts: when a chat event arrives within the
//! configured window of the previous one, its outgoing rendering is
//! replaced with a compact rate-limited notice. The event itself is never
//! cancelled, and the shared timestamp is deliberately coarse (one slot
//! for the whole server, not per player).

use dashmap::DashMap;

use turbine_host::{current_millis, ChatEvent, Color, Message};

use crate::config::NetworkSettings;

const GLOBAL_SCOPE: &str = "global";

/// Replaces chat renderings arriving inside the coalescing window.
pub struct ChatBurstOptimizer {
    last_chat_ms: DashMap<String, u64>,
}

impl ChatBurstOptimizer {
    pub fn new() -> Self {
        Self {
            last_chat_ms: DashMap::new(),
        }
    }

    /// Applies the suppression policy to one chat event.
    ///
    /// The shared timestamp is updated whether or not the event is
    /// suppressed. Concurrent events may race the read-then-write; the
    /// result is approximately correct suppression, never corruption.
    pub fn apply(&self, event: &mut dyn ChatEvent, network: &NetworkSettings) {
        self.apply_at(current_millis(), event, network);
    }

    pub(crate) fn apply_at(&self, now_ms: u64, event: &mut dyn ChatEvent, network: &NetworkSettings) {
        let window = network.coalesce_chat_ms;
        let suppress = self
            .last_chat_ms
            .get(GLOBAL_SCOPE)
            .map(|last| now_ms.saturating_sub(*last) < window)
            .unwrap_or(false);
        self.last_chat_ms.insert(GLOBAL_SCOPE.to_string(), now_ms);

        if !suppress {
            return;
        }

        let notice = Message::join([
            Message::raw("[Chat-Limited] ").color(Color::Yellow),
            Message::raw(event.sender_name()).color(Color::White),
            Message::raw(" is sending messages too quickly.").color(Color::Gray),
        ]);
        event.set_formatter(notice);
    }
}

impl Default for ChatBurstOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestChatEvent {
        sender: String,
        formatter: Option<Message>,
    }

    impl TestChatEvent {
        fn new(sender: &str) -> Self {
            Self {
                sender: sender.to_string(),
                formatter: None,
            }
        }
    }

    impl ChatEvent for TestChatEvent {
        fn sender_name(&self) -> &str {
            &self.sender
        }

        fn set_formatter(&mut self, message: Message) {
            self.formatter = Some(message);
        }
    }

    fn network(window_ms: u64) -> NetworkSettings {
        NetworkSettings {
            coalesce_chat_ms: window_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_event_inside_window_is_suppressed() {
        let optimizer = ChatBurstOptimizer::new();
        let settings = network(75);

        let mut first = TestChatEvent::new("alex");
        optimizer.apply_at(1_000, &mut first, &settings);
        assert!(first.formatter.is_none());

        let mut second = TestChatEvent::new("blair");
        optimizer.apply_at(1_050, &mut second, &settings);
        let notice = second.formatter.expect("second event should be suppressed");
        assert_eq!(
            notice.plain_text(),
            "[Chat-Limited] blair is sending messages too quickly."
        );
    }

    #[test]
    fn test_event_outside_window_passes_through() {
        let optimizer = ChatBurstOptimizer::new();
        let settings = network(75);

        let mut first = TestChatEvent::new("alex");
        optimizer.apply_at(1_000, &mut first, &settings);
        let mut second = TestChatEvent::new("blair");
        optimizer.apply_at(1_100, &mut second, &settings);
        assert!(second.formatter.is_none());
    }

    #[test]
    fn test_timestamp_updates_even_when_suppressed() {
        let optimizer = ChatBurstOptimizer::new();
        let settings = network(75);

        optimizer.apply_at(1_000, &mut TestChatEvent::new("a"), &settings);
        optimizer.apply_at(1_050, &mut TestChatEvent::new("b"), &settings);

        // 50ms after the *second* event: the window is measured from the
        // latest event, suppressed or not.
        let mut third = TestChatEvent::new("c");
        optimizer.apply_at(1_100, &mut third, &settings);
        assert!(third.formatter.is_some());
    }

    #[test]
    fn test_zero_window_disables_suppression() {
        let optimizer = ChatBurstOptimizer::new();
        let settings = network(0);

        optimizer.apply_at(1_000, &mut TestChatEvent::new("a"), &settings);
        let mut second = TestChatEvent::new("b");
        optimizer.apply_at(1_000, &mut second, &settings);
        assert!(second.formatter.is_none());
    }
}
