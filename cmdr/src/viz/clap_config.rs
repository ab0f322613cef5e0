// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, ValueEnum};
use stepviz::{DisplayPreference, TracingConfig, Value};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "stepviz")]
#[command(about = "Watch counting sort and binary search run one step at a time 🔎")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  stepviz --target \x1b[32m<number>\x1b[0m [\x1b[34moptions\x1b[0m]\n  stepviz --sort-only [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        long,
        short = 't',
        allow_hyphen_values = true,
        required_unless_present = "sort_only",
        help = "Number to search for. The array is sorted first if it isn't already."
    )]
    pub target: Option<String>,

    #[arg(
        long,
        short = 's',
        default_value_t = 10,
        help = "Number of elements of the generated array."
    )]
    pub size: usize,

    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with = "size",
        help = "Use these comma separated values instead of a generated array."
    )]
    pub values: Option<Vec<Value>>,

    #[arg(long, help = "Seed for the array generator, for reproducible runs.")]
    pub seed: Option<u64>,

    #[arg(
        long,
        conflicts_with = "target",
        help = "Only demonstrate the counting sort, no search."
    )]
    pub sort_only: bool,

    #[arg(
        long,
        default_value_t = 1.0,
        value_parser = parse_speed,
        help = "Playback speed, 2.0 plays twice as fast."
    )]
    pub speed: f64,

    #[arg(long, help = "Print every step right away.")]
    pub no_delay: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

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
        requires = "enable_logging",
        help = "Also send the logs to stderr."
    )]
    pub log_to_stderr: bool,
}

impl GlobalOption {
    /// [None] unless logging was asked for. Logs always go to `log.txt`, and to stderr
    /// as well with `--log-to-stderr`.
    #[must_use]
    pub fn tracing_config(&self) -> Option<TracingConfig> {
        if !self.enable_logging {
            return None;
        }
        let file = TracingConfig::new_file(None);
        Some(if self.log_to_stderr {
            file + DisplayPreference::Stderr.into()
        } else {
            file
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Array plus narration, for people.
    #[default]
    Text,
    /// One JSON object per line, for tools.
    Json,
}

fn parse_speed(arg: &str) -> Result<f64, String> {
    match arg.parse::<f64>() {
        Ok(it) if it.is_finite() && it > 0.0 => Ok(it),
        Ok(_) => Err(format!("speed must be a positive number, got {arg}")),
        Err(error) => Err(error.to_string()),
    }
}
