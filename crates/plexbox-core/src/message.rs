//! Session -> chatbox message derivation.
//!
//! One exhaustive pass over the media kind picks the emoji, title and
//! subtitle template; the year and the timestamp pair are appended as a
//! trailer.  When the whole thing blows the chatbox budget, the header is
//! cut from its tail and the trailer survives verbatim.

use crate::session::{MediaKind, Session};
use crate::timestamp::{format_timestamp, TimestampStyle};
use tracing::debug;

/// VRChat rejects chatbox input longer than this many characters.
pub const MAX_CHATBOX_CHARS: usize = 144;

const ELLIPSIS: &str = "...";

const TRACK_EMOJI: &str = "🎵";
const MOVIE_EMOJI: &str = "🍿";
const EPISODE_EMOJI: &str = "📺";
const PAUSED_EMOJI: &str = "⏸️";

/// Presentation flags, fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Drop the subtitle and year block for tracks.
    pub short: bool,
    /// Superscript timestamps; the pair then renders without a separator.
    pub superscript: bool,
}

/// A derived chatbox message.
///
/// `key` is the untrimmed header: the repeat-suppression key.  Neither the
/// ticking timestamps nor trim-length drift are part of it, so a message
/// only counts as "new" when the displayed media actually changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatboxMessage {
    pub key: String,
    pub body: String,
}

/// Derive the chatbox message for one session.
///
/// `local_offset_ms` is the smoothed playback position from the progress
/// clock; `fallback_year` is the out-of-band year for kinds that need one
/// (movies, episodes) and ignored for the rest.
pub fn render(
    session: &Session,
    local_offset_ms: u64,
    fallback_year: Option<i32>,
    opts: RenderOptions,
) -> ChatboxMessage {
    let mut title = session.title.as_str();
    let mut subtitle = format!(
        "{} | {}",
        session.grandparent_title, session.parent_title
    );
    let mut newline = "\n";
    let mut emoji = "";
    let mut year = None;

    match session.kind {
        MediaKind::Track => {
            emoji = TRACK_EMOJI;
            // Don't repeat identical text for singles where the track
            // title equals the album title; show just the artist.
            if session.title == session.parent_title {
                subtitle = session.grandparent_title.clone();
            }
            if opts.short {
                subtitle.clear();
            }
            year = session.parent_year;
        }
        MediaKind::Movie => {
            emoji = MOVIE_EMOJI;
            subtitle.clear();
            newline = "";
            year = fallback_year;
        }
        MediaKind::Episode => {
            emoji = EPISODE_EMOJI;
            title = session.grandparent_title.as_str();
            subtitle = if session.parent_index == 0 {
                format!("Special Episode {}", session.index)
            } else {
                format!("Season {} Episode {}", session.parent_index, session.index)
            };
            year = fallback_year;
        }
        MediaKind::Other => {}
    }

    if session.player_state.is_paused() {
        emoji = PAUSED_EMOJI;
    }

    let style = if opts.superscript {
        TimestampStyle::Superscript
    } else {
        TimestampStyle::Normal
    };
    let current = format_timestamp(local_offset_ms / 1000, style);
    let total = format_timestamp(session.duration_ms / 1000, style);
    let separator = if opts.superscript { "" } else { "/" };

    let header = format!("{emoji}{title}{emoji}{newline}{subtitle}");
    let trailer = if opts.short && session.kind == MediaKind::Track {
        format!("{current} {separator} {total}")
    } else {
        format!(" ({})\n{current} {separator} {total}", year.unwrap_or(0))
    };

    let body = assemble(&header, &trailer);
    ChatboxMessage { key: header, body }
}

/// Join header and trailer, truncating the header tail when the result
/// would exceed [`MAX_CHATBOX_CHARS`].  The trailer is kept byte-for-byte.
fn assemble(header: &str, trailer: &str) -> String {
    let total = header.chars().count() + trailer.chars().count();
    if total <= MAX_CHATBOX_CHARS {
        return format!("{header}{trailer}");
    }

    let keep = MAX_CHATBOX_CHARS
        .saturating_sub(trailer.chars().count())
        .saturating_sub(ELLIPSIS.chars().count());
    let cut: String = header.chars().take(keep).collect();
    debug!(
        "[chatbox] header trimmed {} -> {} chars",
        header.chars().count(),
        keep
    );
    format!("{cut}{ELLIPSIS}{trailer}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PlayerState;

    fn track_session() -> Session {
        Session {
            user_id: "1".to_string(),
            kind: MediaKind::Track,
            title: "Song A".to_string(),
            parent_title: "Album A".to_string(),
            grandparent_title: "Artist A".to_string(),
            parent_year: Some(2020),
            duration_ms: 200_000,
            view_offset_ms: 65_000,
            rating_key: "101".to_string(),
            ..Session::default()
        }
    }

    #[test]
    fn test_track_message() {
        let msg = render(&track_session(), 65_000, None, RenderOptions::default());
        assert_eq!(msg.key, "🎵Song A🎵\nArtist A | Album A");
        assert_eq!(msg.body, "🎵Song A🎵\nArtist A | Album A (2020)\n1:05 / 3:20");
    }

    #[test]
    fn test_track_title_equals_album_collapses_subtitle() {
        let mut session = track_session();
        session.title = "Same".to_string();
        session.parent_title = "Same".to_string();
        let msg = render(&session, 65_000, None, RenderOptions::default());
        assert_eq!(msg.key, "🎵Same🎵\nArtist A");
    }

    #[test]
    fn test_track_short_mode_drops_subtitle_and_year() {
        let opts = RenderOptions {
            short: true,
            ..RenderOptions::default()
        };
        let msg = render(&track_session(), 65_000, None, opts);
        assert_eq!(msg.body, "🎵Song A🎵\n1:05 / 3:20");
    }

    #[test]
    fn test_movie_has_no_subtitle_newline() {
        let session = Session {
            user_id: "1".to_string(),
            kind: MediaKind::Movie,
            title: "Blade Runner".to_string(),
            duration_ms: 7_020_000,
            ..Session::default()
        };
        let msg = render(&session, 300_000, Some(1982), RenderOptions::default());
        assert_eq!(msg.key, "🍿Blade Runner🍿");
        assert_eq!(msg.body, "🍿Blade Runner🍿 (1982)\n5:00 / 1:57:00");
    }

    #[test]
    fn test_episode_uses_show_title_and_season_subtitle() {
        let session = Session {
            user_id: "1".to_string(),
            kind: MediaKind::Episode,
            title: "Ozymandias".to_string(),
            parent_title: "Season 5".to_string(),
            grandparent_title: "Breaking Bad".to_string(),
            parent_index: 5,
            index: 14,
            duration_ms: 2_820_000,
            ..Session::default()
        };
        let msg = render(&session, 60_000, Some(2008), RenderOptions::default());
        assert_eq!(msg.key, "📺Breaking Bad📺\nSeason 5 Episode 14");
        assert_eq!(msg.body, "📺Breaking Bad📺\nSeason 5 Episode 14 (2008)\n1:00 / 47:00");
    }

    #[test]
    fn test_season_zero_is_special() {
        let session = Session {
            user_id: "1".to_string(),
            kind: MediaKind::Episode,
            grandparent_title: "Doctor Who".to_string(),
            parent_index: 0,
            index: 3,
            ..Session::default()
        };
        let msg = render(&session, 0, None, RenderOptions::default());
        assert_eq!(msg.key, "📺Doctor Who📺\nSpecial Episode 3");
    }

    #[test]
    fn test_missing_year_renders_as_zero() {
        let mut session = track_session();
        session.parent_year = None;
        let msg = render(&session, 65_000, None, RenderOptions::default());
        assert!(msg.body.contains("(0)"), "body: {}", msg.body);

        let movie = Session {
            user_id: "1".to_string(),
            kind: MediaKind::Movie,
            title: "Obscure".to_string(),
            ..Session::default()
        };
        let msg = render(&movie, 0, None, RenderOptions::default());
        assert!(msg.body.contains("(0)"), "body: {}", msg.body);
    }

    #[test]
    fn test_paused_overrides_emoji() {
        let mut session = track_session();
        session.player_state = PlayerState::Paused;
        let msg = render(&session, 65_000, None, RenderOptions::default());
        assert_eq!(msg.key, "⏸️Song A⏸️\nArtist A | Album A");
    }

    #[test]
    fn test_other_kind_passes_through() {
        let session = Session {
            user_id: "1".to_string(),
            kind: MediaKind::Other,
            title: "Home Video".to_string(),
            parent_title: "2019".to_string(),
            grandparent_title: "Camera Roll".to_string(),
            duration_ms: 60_000,
            ..Session::default()
        };
        let msg = render(&session, 5_000, None, RenderOptions::default());
        assert_eq!(msg.key, "Home Video\nCamera Roll | 2019");
        assert_eq!(msg.body, "Home Video\nCamera Roll | 2019 (0)\n0:05 / 1:00");
    }

    #[test]
    fn test_superscript_pair_has_no_separator() {
        let opts = RenderOptions {
            superscript: true,
            ..RenderOptions::default()
        };
        let msg = render(&track_session(), 65_000, None, opts);
        assert!(msg.body.ends_with("¹'⁰⁵  ³'²⁰"), "body: {}", msg.body);
    }

    #[test]
    fn test_overlong_header_is_trimmed_trailer_kept() {
        let mut session = track_session();
        session.title = "A".repeat(200);
        let msg = render(&session, 65_000, None, RenderOptions::default());

        assert!(msg.body.chars().count() <= MAX_CHATBOX_CHARS);
        assert!(msg.body.contains("..."));
        assert!(msg.body.ends_with(" (2020)\n1:05 / 3:20"));
        // The dedup key stays untrimmed.
        assert_eq!(msg.key.chars().count(), 200 + 2 + 1 + "Artist A | Album A".chars().count());
    }

    #[test]
    fn test_trim_preserves_stylized_trailer() {
        let opts = RenderOptions {
            superscript: true,
            ..RenderOptions::default()
        };
        let mut session = track_session();
        session.title = "B".repeat(200);
        let msg = render(&session, 65_000, None, opts);

        assert!(msg.body.chars().count() <= MAX_CHATBOX_CHARS);
        assert!(msg.body.ends_with(" (2020)\n¹'⁰⁵  ³'²⁰"), "body: {}", msg.body);
    }

    #[test]
    fn test_short_message_is_untouched() {
        let msg = render(&track_session(), 65_000, None, RenderOptions::default());
        assert!(!msg.body.contains("..."));
    }
}
