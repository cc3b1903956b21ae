#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Write engine spans as JSON lines to `<log_dir>/khata-trace.jsonl.<date>`.
/// Only the first call has an effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::daily(log_dir, "khata-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // the host application keeps the library loaded until exit
        std::mem::forget(guard);

        let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("khata_core=debug,khata_form=debug,khata_engine=debug")
        });
        let _ = tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
