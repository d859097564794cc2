//! One poll cycle, as a pure function over an explicit state context.

use crate::dedup::Deduplicator;
use crate::message::{render, RenderOptions};
use crate::progress::ProgressClock;
use crate::session::Session;
use tracing::debug;

/// Everything the bridge mutates between polls.  Owned by the caller and
/// threaded through [`tick`]; there is one shared slot for the tracked
/// identity's stream (concurrent sessions under the same identity share
/// it, an accepted simplification).
#[derive(Debug, Clone, Default)]
pub struct BridgeState {
    pub progress: ProgressClock,
    pub dedup: Deduplicator,
}

/// One session as fetched this cycle, paired with its out-of-band year
/// (resolved ahead of time for movies and episodes, `None` otherwise).
#[derive(Debug, Clone)]
pub struct SessionUpdate {
    pub session: Session,
    pub fallback_year: Option<i32>,
}

/// What the orchestrator should push to the overlay after a cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Outgoing {
    /// Display `body` in the chatbox.
    Chat { body: String },
    /// Wipe the chatbox — playback stopped.
    Clear,
}

/// Run one poll cycle over the fetched session list.
///
/// Sessions not owned by the tracked identity are ignored entirely: no
/// message, no state mutation.  When no tracked session is present and one
/// was being mirrored, a single [`Outgoing::Clear`] is emitted and the
/// state drops back to Idle; further empty cycles are no-ops.
pub fn tick(
    updates: &[SessionUpdate],
    now_ms: i64,
    poll_interval_ms: u64,
    opts: RenderOptions,
    state: &mut BridgeState,
) -> Vec<Outgoing> {
    let mut out = Vec::new();
    let mut tracked_active = false;

    for update in updates {
        let session = &update.session;
        if !session.is_tracked() {
            continue;
        }
        tracked_active = true;

        let local_offset_ms = state.progress.observe(
            session.view_offset_ms,
            poll_interval_ms,
            session.player_state.is_paused(),
        );

        let message = render(session, local_offset_ms, update.fallback_year, opts);
        if state.dedup.should_send(&message.key, now_ms) {
            out.push(Outgoing::Chat { body: message.body });
        } else {
            debug!("[tick] suppressed repeat of current header");
        }
    }

    if !tracked_active && state.dedup.is_tracking() {
        state.dedup.reset();
        state.progress.reset();
        out.push(Outgoing::Clear);
    }

    out
}
