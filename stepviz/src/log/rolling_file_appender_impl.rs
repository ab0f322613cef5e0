// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;

/// Creates an appender that writes to `path_str` and never rolls over.
///
/// Don't wrap this in [`tracing_appender::non_blocking()`]: the worker guard would
/// have to outlive the subscriber, and the animation exits before it flushes.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let parent = match path.parent() {
        Some(it) if it.as_os_str().is_empty() => Path::new("."),
        Some(it) => it,
        None => miette::bail!(
            "Can't access folder of {}. It might not exist, or you don't have the required permissions.",
            path.display()
        ),
    };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or you don't have the required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_file_in_existing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("stepviz.log");
        let _appender = try_create(file_path.to_str().unwrap()).unwrap();
        assert!(file_path.exists());
    }

    #[test]
    fn rejects_path_without_file_name() {
        assert!(try_create("/").is_err());
        assert!(try_create("..").is_err());
    }
}
