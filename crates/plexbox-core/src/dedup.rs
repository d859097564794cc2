//! Repeat suppression for outbound chatbox sends.
//!
//! The overlay treats every send as fresh input, so re-sending an identical
//! message in quick succession reads as spam.  Sends are keyed on the
//! untrimmed message header and suppressed inside a short cooldown window.

/// Minimum gap between two sends of the same header.
pub const REPEAT_WINDOW_MS: i64 = 3000;

/// Last-sent tracking for the one mirrored stream.  An empty key doubles
/// as the Idle marker: nothing was on the overlay as of the last cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deduplicator {
    last_key: String,
    last_sent_at_ms: i64,
}

impl Deduplicator {
    /// Decide whether a candidate goes out, recording it if so.
    pub fn should_send(&mut self, key: &str, now_ms: i64) -> bool {
        if self.last_key == key && now_ms - self.last_sent_at_ms < REPEAT_WINDOW_MS {
            return false;
        }
        self.last_key = key.to_owned();
        self.last_sent_at_ms = now_ms;
        true
    }

    /// Something was on the overlay as of the last send.
    pub fn is_tracking(&self) -> bool {
        !self.last_key.is_empty()
    }

    /// Forget the last message (called after the clear signal goes out).
    pub fn reset(&mut self) {
        self.last_key.clear();
    }
}
