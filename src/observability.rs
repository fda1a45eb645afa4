//! This module provides observability and diagnostics for the orchestrator and
//! the smart-compression planner.
//!
//! Choosing between codecs is only trustworthy if the choice can be inspected.
//! Two tools live here:
//!
//! - `log_metric!` emits structured key/value lines. The `#[cfg(debug_assertions)]`
//!   attribute compiles every call out of release builds.
//! - `enable_verbose_logging` installs an `env_logger` backend for the `log`
//!   facade so the planner's scoring tables become visible to the host process.

use log::LevelFilter;
use std::fs::OpenOptions;
use std::sync::Once;

use crate::error::CompressoError;

/// Logs a structured key-value metric string to stdout, only in debug builds.
///
/// # Example
/// ```
/// use compresso::log_metric;
/// let size = 4096;
/// log_metric!("event"="compress", "algorithm"="rle", "original_size"=&size);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            let output = format!("COMPRESSO_METRIC: {{ {} }}", parts.join(", "));
            println!("{}", output);
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs the process-wide logger at `Info` level.
///
/// With `log_file`, records are appended to that file instead of stderr. Only
/// the first call has any effect; later calls return `Ok(())` without touching
/// the installed logger.
pub fn enable_verbose_logging(log_file: Option<&str>) -> Result<(), CompressoError> {
    let mut outcome = Ok(());

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(filename) = log_file {
            match OpenOptions::new().append(true).create(true).open(filename) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(e) => {
                    outcome = Err(CompressoError::Io(e));
                    return;
                }
            }
        }

        // Another logger may already be installed by the host; that is not an error.
        let _ = builder.try_init();
    });

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_metric_accepts_mixed_value_types() {
        let size = 12usize;
        let ratio = 42.5f64;
        log_metric!("event"="test", "size"=&size, "ratio"=ratio, "algorithm"="rle");
    }

    #[test]
    fn test_enable_verbose_logging_is_idempotent() {
        assert!(enable_verbose_logging(None).is_ok());
        assert!(enable_verbose_logging(None).is_ok());
        log::info!("logger installed");
    }
}
