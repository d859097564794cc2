//! Core logic for mirroring a "now playing" session into the VRChat chatbox.
//!
//! Everything in this crate is pure and synchronous: the daemon crate owns
//! the timer, the Plex client and the OSC socket, and feeds each poll's
//! snapshot through [`tick::tick`].  State between polls lives in an
//! explicit [`tick::BridgeState`] rather than process globals, so the whole
//! Idle/Tracking machine is testable without a network or a clock.

pub mod dedup;
pub mod message;
pub mod progress;
pub mod session;
pub mod tick;
pub mod timestamp;
