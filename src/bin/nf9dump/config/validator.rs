use crate::config::schema::{Capture, Config};
use crate::error::{NetflowError, Result};

/// Validate a configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_capture(&config.capture)?;

    Ok(())
}

/// Validate capture configuration
fn validate_capture(capture: &Capture) -> Result<()> {
    if capture.ports.is_empty() {
        return Err(NetflowError::Validation(
            "Configuration must list at least one UDP port".to_string(),
        ));
    }

    if capture.ports.contains(&0) {
        return Err(NetflowError::Validation(
            "UDP port 0 cannot carry NetFlow traffic".to_string(),
        ));
    }

    Ok(())
}
