//! Logging initialisation.
//!
//! Both binaries share one subscriber setup. The writer is chosen from
//! [`LogSink`], which has no stdout variant.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, fmt::writer::BoxMakeWriter};

use super::config::{LogSink, LoggingConfig};
use super::error::{Error, Result};

/// Map a level name to a tracing level, defaulting to INFO.
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Build the writer for a sink.
pub fn make_writer(sink: &LogSink) -> Result<BoxMakeWriter> {
    match sink {
        LogSink::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    Error::config(format!("cannot open log file {}: {}", path.display(), e))
                })?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
    }
}

/// Initialize the logging subsystem.
///
/// Must be called once per process, before any transport is started.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(parse_level(&config.level).into());
    let writer = make_writer(&config.sink)?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(matches!(config.sink, LogSink::Stderr))
        .with_writer(writer);

    let installed = if config.with_timestamps {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };

    installed.map_err(|e| Error::internal(format!("failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE"), Level::TRACE);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("loud"), Level::INFO);
    }

    #[test]
    fn test_file_sink_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("server.log");
        std::fs::write(&path, "first\n").unwrap();

        let writer = make_writer(&LogSink::File(path.clone())).unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_file_sink_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("server.log");
        let result = make_writer(&LogSink::File(path));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
