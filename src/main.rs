use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use jpron::{audio, Config, Database, Dirs};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Word to find pronunciation audio for.
    #[arg(required_unless_present = "rebuild")]
    word: Option<String>,
    /// Reading used to pick between identically written words.
    reading: Option<String>,
    /// Directory holding the audio source directories. Overrides the
    /// configured directory.
    #[arg(long)]
    audio_dir: Option<PathBuf>,
    /// Rebuild the database even if one exists.
    #[arg(long)]
    rebuild: bool,
    /// Print the matched audio files instead of playing them.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let dirs = Dirs::open()?;
    let config = Config::load(&dirs)?;

    let database_path = dirs.database_path();

    if args.rebuild || !database_path.exists() {
        let audio_dir = args
            .audio_dir
            .as_deref()
            .or(config.audio_dir.as_deref())
            .context("No audio directory; pass --audio-dir or set `audio_dir` in config.toml")?;

        println!("Indexing audio files..");
        let database = Database::build(audio_dir)?;
        database.save(&database_path)?;
        println!("Indexing complete.");
    }

    let Some(word) = &args.word else {
        return Ok(());
    };

    let database = Database::load(&database_path)
        .with_context(|| format!("loading {}", database_path.display()))?;

    let Some(hit) = database.lookup(word) else {
        println!("Nothing found.");
        return Ok(());
    };

    let paths = match &args.reading {
        Some(reading) => {
            let matching = database.filter_reading(&hit, reading);

            if matching.is_empty() {
                println!("No audio with a matching reading, playing all..");
                hit.paths.iter().map(String::as_str).collect()
            } else {
                matching
            }
        }
        None => hit.paths.iter().map(String::as_str).collect(),
    };

    for path in paths {
        if args.list {
            println!("{path}");
        } else {
            audio::play(config.player.as_deref(), path)?;
        }
    }

    Ok(())
}
