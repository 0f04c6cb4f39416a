use std::path::Path;
use std::process::{Command as ProcessCommand, Stdio};

use serde::Deserialize;
use tracing::debug;

use super::error::FetchError;
use crate::config::PLAYLIST_URL_PREFIX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawEntry {
    pub(crate) id: String,
    pub(crate) title: String,
}

#[derive(Debug, Deserialize)]
struct PlaylistDocument {
    entries: Vec<PlaylistDocumentEntry>,
}

#[derive(Debug, Deserialize)]
struct PlaylistDocumentEntry {
    id: Option<String>,
    title: Option<String>,
}

pub(crate) fn playlist_url(playlist_id: &str) -> String {
    format!("{PLAYLIST_URL_PREFIX}{playlist_id}")
}

pub(crate) fn fetch_args(playlist_id: &str, limit: usize) -> Vec<String> {
    vec![
        "--playlist-start".to_string(),
        "1".to_string(),
        "--playlist-end".to_string(),
        limit.to_string(),
        "--flat-playlist".to_string(),
        "--dump-single-json".to_string(),
        playlist_url(playlist_id),
    ]
}

/// Runs the enumeration tool and returns at most `limit` entries in the order it printed them.
pub(crate) fn fetch_playlist(
    bin: &Path,
    playlist_id: &str,
    limit: usize,
) -> Result<Vec<RawEntry>, FetchError> {
    debug!(playlist = playlist_id, limit, bin = %bin.display(), "fetching playlist");
    let output = ProcessCommand::new(bin)
        .args(fetch_args(playlist_id, limit))
        .stdin(Stdio::null())
        .output()
        .map_err(|source| FetchError::Spawn {
            bin: bin.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(FetchError::Status {
            bin: bin.to_path_buf(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    parse_playlist_document(&output.stdout, limit)
}

pub(crate) fn parse_playlist_document(
    raw: &[u8],
    limit: usize,
) -> Result<Vec<RawEntry>, FetchError> {
    let document: PlaylistDocument = serde_json::from_slice(raw)?;
    Ok(document
        .entries
        .into_iter()
        .filter_map(|entry| {
            let id = entry.id?.trim().to_string();
            if id.is_empty() {
                return None;
            }
            Some(RawEntry {
                id,
                title: entry.title.unwrap_or_default(),
            })
        })
        .take(limit)
        .collect())
}
