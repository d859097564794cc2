//! Thin Plex HTTP client: session listing plus the fallback year lookup.

use plexbox_core::session::{MediaKind, PlayerState, Session};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PlexError {
    #[error("plex request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("plex returned status {0}")]
    Status(reqwest::StatusCode),
}

pub struct PlexClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

/// `/status/sessions` response envelope.
#[derive(Debug, Deserialize, Default)]
struct SessionsResponse {
    #[serde(rename = "MediaContainer", default)]
    media_container: MediaContainer,
}

#[derive(Debug, Deserialize, Default)]
struct MediaContainer {
    #[serde(rename = "Metadata", default)]
    metadata: Vec<SessionMetadata>,
}

/// One session entry as it appears on the wire.  Kept separate from the
/// core `Session` so the wire schema can drift without touching the
/// formatting logic.  Every field defaults: Plex omits whatever does not
/// apply to a given media kind.
#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct SessionMetadata {
    rating_key: String,
    #[serde(rename = "type")]
    kind: String,
    title: String,
    parent_title: String,
    grandparent_title: String,
    parent_index: i64,
    index: i64,
    parent_year: Option<i32>,
    duration: u64,
    view_offset: u64,
    #[serde(rename = "User")]
    user: WireUser,
    #[serde(rename = "Player")]
    player: WirePlayer,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct WireUser {
    // User ids arrive as strings on this endpoint.
    id: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct WirePlayer {
    state: String,
}

impl From<SessionMetadata> for Session {
    fn from(m: SessionMetadata) -> Self {
        Session {
            user_id: m.user.id,
            kind: MediaKind::parse(&m.kind),
            title: m.title,
            parent_title: m.parent_title,
            grandparent_title: m.grandparent_title,
            parent_index: m.parent_index,
            index: m.index,
            parent_year: m.parent_year,
            duration_ms: m.duration,
            view_offset_ms: m.view_offset,
            player_state: PlayerState::parse(&m.player.state),
            rating_key: m.rating_key,
        }
    }
}

impl PlexClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// List current playback sessions.
    pub async fn sessions(&self) -> Result<Vec<Session>, PlexError> {
        let url = format!("{}/status/sessions", self.base_url);
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .header("X-Plex-Token", &self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlexError::Status(response.status()));
        }

        let data: SessionsResponse = response.json().await?;
        Ok(data
            .media_container
            .metadata
            .into_iter()
            .map(Session::from)
            .collect())
    }

    /// Release year for a library item, via the metadata endpoint.
    ///
    /// Movie and episode sessions carry no usable year, so it is resolved
    /// out-of-band here.  The payload is read leniently: any transport
    /// error or shape mismatch yields `None`, and the formatter tolerates
    /// the gap downstream.
    pub async fn fallback_year(&self, rating_key: &str) -> Option<i32> {
        let url = format!("{}/library/metadata/{}", self.base_url, rating_key);
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .header("X-Plex-Token", &self.token)
            .send()
            .await
            .map_err(|e| debug!("[plex] year lookup failed for {}: {}", rating_key, e))
            .ok()?;

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| debug!("[plex] year payload unreadable for {}: {}", rating_key, e))
            .ok()?;

        extract_year(&payload)
    }
}

/// Dig the year out of a raw metadata payload.
fn extract_year(payload: &serde_json::Value) -> Option<i32> {
    payload
        .get("MediaContainer")?
        .get("Metadata")?
        .get(0)?
        .get("year")?
        .as_i64()
        .map(|y| y as i32)
}
