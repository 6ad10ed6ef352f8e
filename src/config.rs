use std::env;

use crate::error::ServerError;

#[derive(Debug)]
pub struct Settings {
    /// HTTP server port (servlet + health)
    pub http_port: u16,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ServerError> {
        validate_port(self.http_port)?;
        Ok(())
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), ServerError> {
    if port == 0 {
        return Err(ServerError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

pub fn get_configuration() -> Result<Settings, Box<dyn std::error::Error>> {
    let http_port = env::var("HTTP_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()?;

    let settings = Settings { http_port };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}
