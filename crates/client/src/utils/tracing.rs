use std::sync::Once;

#[cfg(feature = "wasm")]
pub fn configure_tracing() {
    use time::format_description::well_known::Iso8601;
    use tracing_subscriber::{
        fmt::{format::Pretty, time::UtcTime},
        layer::SubscriberExt,
        util::SubscriberInitExt,
    };
    use tracing_web::{performance_layer, MakeWebConsoleWriter};

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .with_timer(UtcTime::new(Iso8601::DEFAULT))
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    if let Err(e) = tracing_subscriber::registry().with(fmt_layer).with(perf_layer).try_init() {
        tracing::warn!("Tracing already configured: {e}");
    }
}

/// Log level comes from `RUST_LOG`
#[cfg(not(feature = "wasm"))]
pub fn configure_tracing() {
    use tracing_subscriber::fmt::format::FmtSpan;

    let result = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
    if let Err(e) = result {
        tracing::warn!("Tracing already configured: {e}");
    }
}

/// Configures tracing inside a Once block so pages that call it on every load don't warn
pub fn configure_tracing_once() {
    static ONCE: Once = Once::new();
    ONCE.call_once(configure_tracing);
}
