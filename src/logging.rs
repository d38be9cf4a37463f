use std::path::Path;

use tracing::subscriber::DefaultGuard;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

pub const LOG_FILE: &str = "logs.txt";

/// Log sink for one run: stdout plus an append-only file.
///
/// The subscriber is only active while the session is alive. Dropping it
/// flushes whatever the file writer still buffers.
pub struct LogSession {
    _subscriber: DefaultGuard,
    _writer: Option<WorkerGuard>,
}

impl LogSession {
    /// Falls back to stdout alone if the file cannot be opened.
    pub fn open(dir: &Path, file_name: &str) -> Self {
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name)
            .build(dir);

        let (file_layer, writer) = match appender {
            Ok(appender) => {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
            },
            Err(err) => {
                println!("Error opening log file: {}", err);
                (None, None)
            },
        };

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stdout).with_target(false))
            .with(file_layer);

        LogSession {
            _subscriber: tracing::subscriber::set_default(subscriber),
            _writer: writer,
        }
    }
}
