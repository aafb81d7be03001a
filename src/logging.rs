use tracing::Level;

/// Installs the global subscriber. Everything goes to stderr so a fatal bind
/// error shows up where the process's error stream is collected.
pub fn init() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();
}
