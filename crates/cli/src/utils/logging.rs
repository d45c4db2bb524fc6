//! Log initialisation
//!
//! Logs go to stderr so generated output on stdout stays clean.

use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a verbosity level. `RUST_LOG` wins when set.
pub fn filter_directive(verbose: u8, rust_log: Option<String>) -> String {
    match rust_log {
        Some(filter) if !filter.trim().is_empty() => filter,
        _ => match verbose {
            0 => "warn".to_string(),
            // -v: unit order and run summary
            1 => "info".to_string(),
            // -vv: every unit and formatter call
            _ => "debug".to_string(),
        },
    }
}

pub fn init(verbose: u8) {
    let directive = filter_directive(verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: a second initialisation (e.g. in tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
