// helper method to build json log subscriber for the bookstore services
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // ANSI color codes show up in a confusing manner in aggregated logs.
        .with_ansi(false)
        .json()
        // repeated init is a no-op so tests and embedding apps can both call this
        .try_init();
}
