use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command as ProcessCommand;

use tracing::debug;

use super::error::LaunchError;
use crate::config::PLAYER_FLAGS;

#[cfg(unix)]
use std::os::unix::process::CommandExt;

/// Arguments following argv[0]: the fixed tuning flags, then the url.
pub(crate) fn player_args(video_url: &str) -> Vec<String> {
    PLAYER_FLAGS
        .iter()
        .map(|flag| flag.to_string())
        .chain(std::iter::once(video_url.to_string()))
        .collect()
}

pub(crate) fn find_executable(bin: &Path) -> Option<PathBuf> {
    find_executable_in(bin, env::var_os("PATH"))
}

pub(crate) fn find_executable_in(bin: &Path, path_var: Option<OsString>) -> Option<PathBuf> {
    if bin.components().count() > 1 {
        return is_executable(bin).then(|| bin.to_path_buf());
    }
    let path_var = path_var?;
    env::split_paths(&path_var)
        .map(|dir| dir.join(bin))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    if !path.is_file() {
        return false;
    }
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Replaces the current process with the player. Only returns on failure.
pub(crate) fn play(bin: &Path, video_url: &str) -> LaunchError {
    let Some(resolved) = find_executable(bin) else {
        return LaunchError::NotFound {
            bin: bin.to_path_buf(),
        };
    };
    let args = player_args(video_url);
    debug!(player = %resolved.display(), ?args, "handing off to player");

    let mut cmd = ProcessCommand::new(&resolved);
    cmd.args(&args);
    hand_off(cmd, bin, &resolved)
}

#[cfg(unix)]
fn hand_off(
    mut cmd: ProcessCommand,
    bin: &Path,
    resolved: &Path,
) -> LaunchError {
    let name = bin.file_name().unwrap_or(bin.as_os_str());
    let source = cmd.arg0(name).exec();
    LaunchError::Exec {
        bin: resolved.to_path_buf(),
        source,
    }
}

#[cfg(not(unix))]
fn hand_off(
    mut cmd: ProcessCommand,
    _bin: &Path,
    resolved: &Path,
) -> LaunchError {
    match cmd.status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => LaunchError::Exec {
            bin: resolved.to_path_buf(),
            source,
        },
    }
}
