/// Installs the global subscriber. `RUST_LOG` overrides the default `info` level;
/// `RUST_LOG=ecommerce_swarm=debug` shows every request with its label and status.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
