// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`std::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`SortVizError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Every failure mode that this crate reports on its own. Anything else (I/O on the
/// terminal, JSON encoding, etc) is wrapped into a [`miette::Report`] at the call site
/// with [`miette::IntoDiagnostic`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SortVizError {
    /// The sequence is being read by an active run.
    #[error("🔀 Can't regenerate the sequence while a sort is running")]
    #[diagnostic(
        code(sortviz::session::regenerate_while_running),
        help("Stop the run first, or use reset which stops and regenerates.")
    )]
    RegenerateWhileRunning,

    /// A control was used while the current phase has it disabled.
    #[error("🔒 The `{control}` control is disabled while a sort is running")]
    #[diagnostic(code(sortviz::session::control_disabled))]
    ControlDisabled { control: &'static str },

    /// A driver asked for an element that isn't there.
    #[error("📏 Index {index} is out of bounds for a sequence of length {len}")]
    #[diagnostic(code(sortviz::engine::index_out_of_bounds))]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("📑 Could not access the config folder")]
    #[diagnostic(
        code(sortviz::settings::config_folder_unavailable),
        help("Use `--no-config` to run without persisted settings.")
    )]
    ConfigFolderUnavailable,

    #[error("💾 Could not read or write settings file: '{path}'")]
    #[diagnostic(code(sortviz::settings::io))]
    SettingsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("🔍 Could not parse settings file: '{path}'")]
    #[diagnostic(
        code(sortviz::settings::parse),
        help("Delete the file to go back to the defaults.")
    )]
    SettingsParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("🖥️ Terminal operation failed: {context}")]
    #[diagnostic(code(sortviz::app::terminal))]
    Terminal {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl SortVizError {
    /// Short hand to return this error as a [`CommonResult`].
    ///
    /// # Errors
    ///
    /// Always returns [`Err`] containing `self`.
    pub fn into_result<T>(self) -> CommonResult<T> { Err(miette::Report::new(self)) }
}
