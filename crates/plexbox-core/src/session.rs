use serde::{Deserialize, Serialize};

/// Owning-user identifier of the account being mirrored.  Plex hands user
/// ids over the wire as strings; the server admin account is always "1".
pub const TRACKED_USER_ID: &str = "1";

/// Media kind of a playback session.  Anything the formatter has no
/// template for lands in `Other` and passes through unformatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Track,
    Movie,
    Episode,
    #[default]
    Other,
}

impl MediaKind {
    pub fn parse(s: &str) -> Self {
        match s {
            "track" => Self::Track,
            "movie" => Self::Movie,
            "episode" => Self::Episode,
            _ => Self::Other,
        }
    }

    /// Movies and episodes carry no usable year on the session record
    /// itself; it has to be resolved out-of-band from the library.
    pub fn needs_year_lookup(self) -> bool {
        matches!(self, Self::Movie | Self::Episode)
    }
}

/// Player state as reported on the session.  Anything that is not an
/// explicit pause (buffering, stopped-but-listed) counts as playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    #[default]
    Playing,
    Paused,
}

impl PlayerState {
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("paused") {
            Self::Paused
        } else {
            Self::Playing
        }
    }

    pub fn is_paused(self) -> bool {
        self == Self::Paused
    }
}

/// One active playback record, as fetched from the session endpoint.
/// Ephemeral: lives for a single poll cycle.
///
/// Field meaning depends on kind — for tracks the grandparent is the album
/// artist and the parent the album; for episodes the grandparent is the
/// show and `parent_index` the season number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Session {
    pub user_id: String,
    pub kind: MediaKind,
    pub title: String,
    pub parent_title: String,
    pub grandparent_title: String,
    /// Season number for episodes; 0 marks specials.
    pub parent_index: i64,
    /// Episode number within the season.
    pub index: i64,
    /// Album release year — present directly on track sessions.
    pub parent_year: Option<i32>,
    pub duration_ms: u64,
    /// Server-reported playback offset.  Only refreshed every 10-15 s.
    pub view_offset_ms: u64,
    pub player_state: PlayerState,
    /// Stable library identifier, used for the fallback year lookup.
    pub rating_key: String,
}

impl Session {
    pub fn is_tracked(&self) -> bool {
        self.user_id == TRACKED_USER_ID
    }
}
