//! Local smoothing of the server-reported playback position.
//!
//! The server only refreshes a session's offset every 10-15 s depending on
//! the client.  Displaying that raw value would look frozen and then jump.
//! So a local copy advances by the poll interval every cycle and snaps back
//! to the server value whenever it changes — server wins on disagreement.

/// Progress state for the one tracked playback stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressClock {
    last_server_offset_ms: u64,
    local_offset_ms: u64,
}

impl ProgressClock {
    /// Feed one poll's server-reported offset; returns the smoothed offset
    /// to display.
    ///
    /// A changed server value is a fresh sync point.  While paused the
    /// local clock is pinned to the server value on every call, so it
    /// freezes instead of drifting ahead.
    pub fn observe(&mut self, server_offset_ms: u64, poll_interval_ms: u64, paused: bool) -> u64 {
        if server_offset_ms != self.last_server_offset_ms {
            self.last_server_offset_ms = server_offset_ms;
            self.local_offset_ms = server_offset_ms;
        }

        self.local_offset_ms += poll_interval_ms;

        if paused {
            self.last_server_offset_ms = server_offset_ms;
            self.local_offset_ms = server_offset_ms;
        }

        self.local_offset_ms
    }

    pub fn local_offset_ms(&self) -> u64 {
        self.local_offset_ms
    }

    /// Forget the tracked stream (playback stopped).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
