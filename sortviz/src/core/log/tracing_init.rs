// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

use super::{TracingConfig, WriterConfig, try_create_rolling_file_appender};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers. This does not initialize the tracing system. Don't forget to do
/// this manually, by calling `init` on the returned layers, or use
/// [`TracingConfig::install_global`].
///
/// Returns [None] when there is nothing to write to.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();

    let Some(file_layer) =
        try_create_file_layer(level_filter, tracing_config.get_writer_config())?
    else {
        return Ok(None);
    };

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if you add
    // more layers, which don't have a level filter.
    return_it.push(Box::new(level_filter));
    return_it.push(file_layer);

    Ok(Some(return_it))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    Ok(match writer_config {
        WriterConfig::File(tracing_log_file_path) => {
            let file = try_create_rolling_file_appender(&tracing_log_file_path)?;
            Some(Box::new(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_thread_names(true)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log_file_path(name: &str) -> String {
        let dir = std::env::temp_dir().join(format!(
            "sortviz_log_test_{}_{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("my_temp_log_file.log").to_str().unwrap().to_string()
    }

    #[test]
    fn test_try_create_file_layer() {
        let file_path = temp_log_file_path("file_layer");

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, WriterConfig::File(file_path))
                .unwrap();

        assert!(layer.is_some());
    }

    #[test]
    fn test_no_writer_no_layers() {
        let tracing_config = TracingConfig {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::DEBUG,
        };
        assert!(try_create_layers(tracing_config).unwrap().is_none());
    }

    #[test]
    fn test_thread_local_install_writes_to_file() {
        let file_path = temp_log_file_path("thread_local");

        let guard = TracingConfig::new_file(Some(file_path.clone()), LevelFilter::DEBUG)
            .install_thread_local()
            .unwrap();
        assert!(guard.is_some());

        tracing::info!(message = "hello from the test", answer = 42);
        drop(guard);

        let contents = std::fs::read_to_string(&file_path).unwrap();
        assert!(contents.contains("hello from the test"));
    }
}
