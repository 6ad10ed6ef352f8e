use tracing::info;

use super::LogSink;

/// Production sink: forwards each line to the process-wide tracing
/// subscriber as an info event. The line text is the whole message, with no
/// extra structured fields.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write_line(&self, line: &str) {
        info!("{line}");
    }
}
