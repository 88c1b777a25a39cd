use std::{fs::File, path::Path, str::FromStr, sync::Arc};

use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

/// Log to a file only: the terminal belongs to the TUI.
pub fn setup_logger(log_level: LevelFilter, log_path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(log_path)?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    tracing_subscriber::registry()
        .with(
            file_log.with_filter(log_level).with_filter(filter::filter_fn(|metadata| {
                !metadata.target().starts_with("rusqlite")
                    && !metadata.target().starts_with("arboard")
            })),
        )
        .init();

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn std::error::Error>> {
    match std::env::var("LOG_LEVEL") {
        Ok(level) => Ok(Some(LevelFilter::from_str(&level)?)),
        Err(_) => Ok(None),
    }
}
