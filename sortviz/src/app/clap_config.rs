// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};

use crate::{Algorithm, SessionOptions, Speed};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "sortviz")]
#[command(about = "📊 Watch sorting algorithms work, one step at a time")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nAll options are optional. Saved settings are used for anything not given here.\nUSAGE 📓:\n  sortviz [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(long, short = 'a', value_enum, help = "Algorithm to start with.")]
    pub algorithm: Option<Algorithm>,

    #[arg(
        long,
        short = 's',
        value_parser = clap::value_parser!(u8).range(1..=100),
        help = "Animation speed, 1 (slowest, 100ms per step) to 100 (fastest, 1ms per step)."
    )]
    pub speed: Option<u8>,

    #[arg(
        long,
        short = 'b',
        value_parser = clap::value_parser!(u16).range(10..=100),
        help = "Number of bars, 10 to 100."
    )]
    pub bars: Option<u16>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        short = 'n',
        help = "Don't load settings at startup, and don't save them on exit."
    )]
    pub no_config: bool,
}

impl CLIArg {
    /// Anything given on the command line wins over `options`.
    #[must_use]
    pub fn apply_overrides(&self, options: SessionOptions) -> SessionOptions {
        SessionOptions {
            algorithm: self.algorithm.unwrap_or(options.algorithm),
            speed: self.speed.map_or(options.speed, Speed::new),
            bar_count: self.bars.map_or(options.bar_count, usize::from),
        }
    }
}
