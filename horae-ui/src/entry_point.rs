const DEFAULT_DIRECTIVES: &str = "error,horae_components=info";

/// Installs a global `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to
/// `error,horae_components=info`. Calling this more than once is harmless;
/// only the first subscriber wins.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_DIRECTIVES);
}

/// Like [`init_tracing`], with custom fallback directives for when
/// `RUST_LOG` is unset or invalid.
pub fn init_tracing_with_default(directives: &str) {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(directives) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
