use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Dedicated playlist holding the evening editions.
pub const CURATED_PLAYLIST_ID: &str = "PL4A2F331EE86DCC22";

/// All channel uploads; used when an episode never made it into the curated playlist.
pub const UPLOADS_PLAYLIST_ID: &str = "UU5NOEUbkLheQcaaRldYW5GA";

/// Playlists in the order they are searched.
pub const PLAYLISTS: [&str; 2] = [CURATED_PLAYLIST_ID, UPLOADS_PLAYLIST_ID];

/// Number of most recent entries fetched per playlist. The channel holds
/// thousands of videos, but the wanted episode is usually only a few days old.
pub const FETCH_LIMIT: usize = 10;

pub const VIDEO_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";
pub const PLAYLIST_URL_PREFIX: &str = "https://www.youtube.com/playlist?list=";

pub const TITLE_PATTERN: &str = r"tagesschau 20:00 Uhr, (?P<date>\d{2}\.\d{2}\.\d{4})";

pub const DEFAULT_FETCH_BIN: &str = "youtube-dl";
pub const DEFAULT_PLAYER_BIN: &str = "mpv";

pub const PLAYER_FLAGS: [&str; 3] = [
    // chapter 1 is the intro; untagged videos simply start at the beginning
    "--start=#2",
    "--speed=2",
    "--af=scaletempo2",
];

const FETCH_BIN_ENV: &str = "TAGESSCHAU_FETCH_BIN";
const PLAYER_BIN_ENV: &str = "TAGESSCHAU_PLAYER_BIN";

#[derive(Debug, Clone)]
pub struct Settings {
    pub fetch_bin: PathBuf,
    pub player_bin: PathBuf,
    pub fetch_limit: usize,
    pub playlists: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fetch_bin: PathBuf::from(DEFAULT_FETCH_BIN),
            player_bin: PathBuf::from(DEFAULT_PLAYER_BIN),
            fetch_limit: FETCH_LIMIT,
            playlists: PLAYLISTS.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            fetch_bin: bin_from_env(env::var_os(FETCH_BIN_ENV), DEFAULT_FETCH_BIN),
            player_bin: bin_from_env(env::var_os(PLAYER_BIN_ENV), DEFAULT_PLAYER_BIN),
            ..Self::default()
        }
    }
}

pub(crate) fn bin_from_env(env_value: Option<OsString>, default: &str) -> PathBuf {
    match env_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(default),
    }
}
