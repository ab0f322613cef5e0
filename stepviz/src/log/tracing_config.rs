// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use miette::IntoDiagnostic;
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::try_create_layers;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where the logs go and how verbose they are. Use it with
/// [`crate::try_initialize_logging_global()`] or
/// [`crate::try_initialize_logging_thread_local()`].
///
/// Anything that is [`Into<TracingConfig>`] can be passed to those functions, and
/// configs can be merged with `+`:
///
/// ```no_run
/// use stepviz::{DisplayPreference, TracingConfig, WriterConfig,
///               try_initialize_logging_global};
///
/// let level: TracingConfig = tracing_core::LevelFilter::INFO.into();
/// let display: TracingConfig = DisplayPreference::Stderr.into();
/// let file: TracingConfig = WriterConfig::File("log.txt".to_string()).into();
///
/// try_initialize_logging_global(level + display + file).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `String` is the path of the log file, eg: `log.txt` or `/tmp/stepviz.log`.
/// - [`DisplayPreference`] picks the terminal stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Debug level logs to [`DEFAULT_LOG_FILE_NAME`], or to `file_path` if given.
    #[must_use]
    pub fn new_file(file_path: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Sets the global default subscriber. It can't be changed once set.
    ///
    /// # Errors
    ///
    /// If a layer can't be created, or a global subscriber is already set.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Sets the subscriber of the current thread until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// If a layer can't be created.
    pub fn install_thread_local(self) -> miette::Result<DefaultGuard> {
        let layers = try_create_layers(self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self::new_display(preferred_display)
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// The more verbose level wins, writers are merged with [`WriterConfig`]'s `+`.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Merge two writer configs. `rhs` has higher specificity: when both sides set a
/// display preference (or both set a file), the one from `rhs` is kept.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            // No collision.
            (None, rhs) => rhs,
            (lhs, None) => lhs,
            (Display(dp), File(f)) | (File(f), Display(dp)) => DisplayAndFile(dp, f),

            // Collision on the display preference.
            (Display(_), Display(dp)) => Display(dp),
            (Display(_) | File(_), DisplayAndFile(dp, f)) => DisplayAndFile(dp, f),
            (DisplayAndFile(_, f), Display(dp)) => DisplayAndFile(dp, f),

            // Collision on the file.
            (File(_), File(f)) => File(f),
            (DisplayAndFile(dp, _), File(f)) => DisplayAndFile(dp, f),

            // Collision on both.
            (DisplayAndFile(..), DisplayAndFile(dp, f)) => DisplayAndFile(dp, f),
        }
    }
}
