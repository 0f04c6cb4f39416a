mod date;
mod error;
mod player;
mod playlist;
mod resolve;
mod title;


use anyhow::Result;

use crate::cli::Cli;
use crate::config::{Settings, VIDEO_URL_PREFIX};

use self::date::{CalendarDate, parse_target, today_target};
use self::error::{DateError, ResolveError};
use self::playlist::fetch_playlist;
use self::resolve::{Video, resolve};

const UNKNOWN_TITLE: &str = "<title unknown>";

pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::from_env();

    let target = playback_target(&cli, |target| resolve_with_settings(&settings, target));
    let (title, url) = match target {
        Ok(target) => target,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    println!("{}", playing_line(&title, &url));

    let err = player::play(&settings.player_bin, &url);
    println!("Error starting {}:\n\t{err}", settings.player_bin.display());
    Ok(())
}

/// Title and url to hand to the player. A url given on the command line
/// skips the date options and the playlist lookup entirely.
fn playback_target<F>(cli: &Cli, lookup: F) -> Result<(String, String)>
where
    F: FnOnce(CalendarDate) -> Result<Video, ResolveError>,
{
    if let Some(url) = &cli.url {
        return Ok((UNKNOWN_TITLE.to_string(), url.clone()));
    }

    let target = target_date(cli.date.as_deref(), cli.offset)?;
    let video = lookup(target)?;
    let url = video_url(&video.id);
    Ok((video.title, url))
}

fn target_date(date: Option<&str>, offset: i64) -> Result<CalendarDate, DateError> {
    match date {
        Some(text) => parse_target(text, offset),
        None => today_target(offset),
    }
}

fn resolve_with_settings(settings: &Settings, target: CalendarDate) -> Result<Video, ResolveError> {
    resolve(
        target,
        &settings.playlists,
        settings.fetch_limit,
        |playlist_id, limit| fetch_playlist(&settings.fetch_bin, playlist_id, limit),
    )
}

fn playing_line(title: &str, url: &str) -> String {
    format!("Playing: {title} - {url}")
}

fn video_url(video_id: &str) -> String {
    format!("{VIDEO_URL_PREFIX}{video_id}")
}
