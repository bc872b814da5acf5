// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::try_create_layers;

/// Default log file, same convention as the other R3BL apps (`edi`, `giti`).
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging to suit your needs. The screen belongs to the TUI while
/// the app is running, so logs can only go to a file.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `File`: [String] is the file path to use for the log file. Eg: `/tmp/sortviz.log` or
///   `log.txt`.
#[derive(Debug, Clone)]
pub enum WriterConfig {
    None,
    File(String /* tracing_log_file_path */),
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(maybe_file_path: Option<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(
                maybe_file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Global default subscriber, which once set, can't be unset or changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or a global subscriber is
    /// already installed.
    pub fn install_global(self) -> miette::Result<()> {
        let Some(layers) = try_create_layers(self)? else {
            return Ok(());
        };
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|error| miette::miette!("Could not install subscriber: {error}"))
    }

    /// Thread local subscriber, which is great for tests. Drop the guard to uninstall.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(
        self,
    ) -> miette::Result<Option<tracing::subscriber::DefaultGuard>> {
        let Some(layers) = try_create_layers(self)? else {
            return Ok(None);
        };
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(Some(tracing::subscriber::set_default(subscriber)))
    }
}

/// Logging is **DISABLED** by **default**. Nothing is installed when `level_filter` is
/// [`LevelFilter::OFF`] or the writer is [`WriterConfig::None`].
///
/// # Errors
///
/// See [`TracingConfig::install_global`].
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    // Early return if the level filter is off.
    if matches!(tracing_config.get_level_filter(), LevelFilter::OFF) {
        return crate::ok!();
    }

    // Try to initialize the tracing system w/ file log output.
    tracing_config.install_global()
}
