mod tracing_sink;

pub use tracing_sink::TracingSink;

/// Destination for request body lines.
///
/// Implementations must be safe for concurrent writes from multiple
/// simultaneous requests; the handler performs no synchronization of its own.
pub trait LogSink: Send + Sync {
    /// Record one line at informational severity, exactly as received.
    fn write_line(&self, line: &str);
}
