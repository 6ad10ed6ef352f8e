use linesink::app;
use linesink::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    app::run().await
}
