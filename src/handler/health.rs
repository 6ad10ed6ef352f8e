/// Liveness endpoint for GET /v1/health, also hit by the `healthcheck`
/// subcommand.
pub async fn health_handler() -> &'static str {
    "Healthy"
}
