//! Fixed-interval poll loop: Plex sessions -> core tick -> chatbox.

use crate::chatbox::ChatboxClient;
use crate::plex::PlexClient;
use futures_util::future::join_all;
use plexbox_core::message::RenderOptions;
use plexbox_core::tick::{tick, BridgeState, Outgoing, SessionUpdate};
use std::time::Duration;
use tracing::{info, warn};

pub struct Bridge {
    plex: PlexClient,
    chatbox: ChatboxClient,
    opts: RenderOptions,
    poll_interval_ms: u64,
    state: BridgeState,
}

impl Bridge {
    pub fn new(
        plex: PlexClient,
        chatbox: ChatboxClient,
        opts: RenderOptions,
        poll_interval_ms: u64,
    ) -> Self {
        Self {
            plex,
            chatbox,
            opts,
            poll_interval_ms,
            state: BridgeState::default(),
        }
    }

    /// Run until the process dies.  A failed cycle is logged and swallowed;
    /// the next timer fire proceeds as if nothing happened.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut timer = tokio::time::interval(Duration::from_millis(self.poll_interval_ms));
        loop {
            timer.tick().await;
            if let Err(e) = self.cycle().await {
                warn!("[poll] cycle failed: {e:#}");
            }
        }
    }

    async fn cycle(&mut self) -> anyhow::Result<()> {
        let sessions = self.plex.sessions().await?;

        // Year lookups only apply to tracked movie/episode sessions; each
        // is one extra round trip, run concurrently.
        let plex = &self.plex;
        let updates: Vec<SessionUpdate> = join_all(sessions.into_iter().map(|session| async move {
            let fallback_year = if session.is_tracked() && session.kind.needs_year_lookup() {
                plex.fallback_year(&session.rating_key).await
            } else {
                None
            };
            SessionUpdate {
                session,
                fallback_year,
            }
        }))
        .await;

        let now_ms = chrono::Utc::now().timestamp_millis();
        let outgoing = tick(
            &updates,
            now_ms,
            self.poll_interval_ms,
            self.opts,
            &mut self.state,
        );

        for message in outgoing {
            match message {
                Outgoing::Chat { body } => {
                    self.chatbox.send(&body).await?;
                    info!("💬 {}", body.replace('\n', " | "));
                }
                Outgoing::Clear => {
                    self.chatbox.clear().await?;
                    info!("🧹 cleared");
                }
            }
        }

        Ok(())
    }
}
