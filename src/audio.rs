//! Playback through an external player.

use std::process::Command;

use anyhow::{bail, Context, Result};

/// Arguments for the default player.
static FFPLAY_ARGS: &[&str] = &["-nodisp", "-nostats", "-hide_banner", "-autoexit"];

/// Play a single audio file, blocking until the player exits.
///
/// `player` overrides the default `ffplay` invocation and may carry its own
/// arguments, e.g. `"mpv --no-video"`.
pub fn play(player: Option<&str>, path: &str) -> Result<()> {
    let mut command = match player {
        Some(player) => {
            let mut parts = player.split_whitespace();
            let program = parts.next().context("empty player command")?;
            let mut command = Command::new(program);
            command.args(parts);
            command
        }
        None => {
            let mut command = Command::new("ffplay");
            command.args(FFPLAY_ARGS);
            command
        }
    };

    tracing::debug!("playing {path}");

    let status = command
        .arg(path)
        .status()
        .with_context(|| format!("invoking player for {path}"))?;

    if !status.success() {
        bail!("player exited with {status} for {path}");
    }

    Ok(())
}
