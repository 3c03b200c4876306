//! optio CLI - binary entry point for the chess demo.
//!
//! stdout carries the game transcript, so logs go to `~/.optio/logs/optio.log`
//! (or `./.optio/logs/optio.log`). Set `RUST_LOG` to change the filter.

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use optio::{ChessBoard, ThreadDice, run_game};
use optio_config::{DemoSettings, OptioConfig};

/// Without a writable log file no subscriber is installed.
fn init_tracing() {
    let Some((log_path, file)) = open_log_file() else {
        return;
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();
    tracing::info!(path = %log_path.display(), "Logging initialized");
}

/// `~/.optio/logs/optio.log`, else `./.optio/logs/optio.log`.
fn open_log_file() -> Option<(PathBuf, fs::File)> {
    let home_log = OptioConfig::path()
        .and_then(|config| config.parent().map(|dir| dir.join("logs").join("optio.log")));
    let local_log = PathBuf::from(".optio").join("logs").join("optio.log");

    home_log.into_iter().chain([local_log]).find_map(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
        Some((path, file))
    })
}

fn main() -> Result<()> {
    init_tracing();

    let config = OptioConfig::load().ok().flatten();
    let settings =
        DemoSettings::from_env(config.as_ref()).context("invalid demo settings")?;
    if settings.checkmate_probability <= 0.0 && settings.max_moves.is_none() {
        tracing::warn!("checkmate_probability is 0 and max_moves is unset; the game may run for a long time");
    }
    tracing::info!(
        checkmate_probability = settings.checkmate_probability,
        max_moves = ?settings.max_moves,
        "Starting game"
    );

    let mut board = ChessBoard::new(settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_game(&mut board, &mut ThreadDice, &mut out).context("failed to write game transcript")?;
    out.flush()?;

    Ok(())
}
