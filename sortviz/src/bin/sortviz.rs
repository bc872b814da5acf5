// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use sortviz::{CLIArg, CommonResult, Settings, TracingConfig, load_or_default,
              resolve_config_folder, run_app, throws, try_initialize_logging_global};

/// `mimalloc` is a replacement for the default global allocator. It's optimized for
/// multi-threaded use cases where lots of small objects are created and destroyed.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// Note: The `tokio::main` macro internally calls `.expect("Failed building the Runtime")`
// when initializing the Tokio runtime. This is unavoidable and safe, as runtime creation
// failure is a fatal error that should panic. The lint must be suppressed here.
#[tokio::main]
#[allow(clippy::unwrap_in_result)]
async fn main() -> CommonResult<()> {
    throws!({
        let cli_arg = CLIArg::parse();

        let enable_logging = cli_arg.global_options.enable_logging;
        enable_logging.then(|| {
            try_initialize_logging_global(TracingConfig::new_file(
                None,
                tracing_core::LevelFilter::DEBUG,
            ))
            .ok();
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        });

        let maybe_config_folder = resolve_config_folder(cli_arg.global_options.no_config);
        let saved = load_or_default(maybe_config_folder.as_deref());
        let options = cli_arg.apply_overrides(saved.into());

        let final_options = run_app(options).await?;

        if let Some(config_folder) = maybe_config_folder
            && let Err(report) = Settings::from(final_options).try_save(&config_folder)
        {
            // % is Display, ? is Debug.
            tracing::error!(message = "Could not save settings", error = ?report);
        }

        enable_logging.then(|| {
            tracing::debug!(message = "Stop logging...");
        });
    })
}
