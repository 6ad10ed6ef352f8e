use crate::sink::LogSink;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

/// Handler for POST /servlet.
///
/// Reads the request body as newline-delimited text and writes each line to
/// the sink, in order, with no transformation. A trailing span without a
/// final newline still counts as a line. Responds 200 with an empty body.
///
/// The sink lines are the handler's only log output; an empty body writes
/// nothing. A non-UTF-8 body is rejected by the `String` extractor before
/// this function runs, so the framework's default error mapping applies.
pub async fn servlet_handler(State(sink): State<Arc<dyn LogSink>>, body: String) -> StatusCode {
    for line in body.lines() {
        sink.write_line(line);
    }

    StatusCode::OK
}
