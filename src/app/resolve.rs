use tracing::{debug, warn};

use super::date::CalendarDate;
use super::error::{FetchError, ResolveError};
use super::playlist::RawEntry;
use super::title::extract_date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Video {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) date: CalendarDate,
}

impl Video {
    fn from_entry(entry: RawEntry) -> Option<Self> {
        let date = extract_date(&entry.title)?;
        Some(Self {
            id: entry.id,
            title: entry.title,
            date,
        })
    }
}

/// Searches `playlists` in order and returns the first entry broadcast on `target`.
///
/// A playlist that fails to load or comes back empty is skipped, as is any
/// entry whose title carries no broadcast date.
pub(crate) fn resolve<F>(
    target: CalendarDate,
    playlists: &[String],
    limit: usize,
    mut fetch: F,
) -> Result<Video, ResolveError>
where
    F: FnMut(&str, usize) -> Result<Vec<RawEntry>, FetchError>,
{
    for playlist_id in playlists {
        let entries = match fetch(playlist_id, limit) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(playlist = %playlist_id, "skipping playlist: {err}");
                continue;
            }
        };
        if entries.is_empty() {
            warn!(playlist = %playlist_id, "playlist returned no entries");
            continue;
        }

        for entry in entries {
            let Some(video) = Video::from_entry(entry) else {
                continue;
            };
            if video.date == target {
                debug!(playlist = %playlist_id, id = %video.id, "found episode");
                return Ok(video);
            }
        }
        debug!(playlist = %playlist_id, %target, "no episode for target date");
    }

    Err(ResolveError::NotFound(target.to_string()))
}
