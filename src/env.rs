//! Process environment initialization
//!
//! Loads a `.env` file once at startup, before configuration is resolved.
//! Nothing reads these values yet; the hook is where an API key for a real
//! content generator would come from.

use std::path::PathBuf;
use tracing::{debug, warn};

/// Load `.env` from the working directory or its ancestors, if present
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            warn!("Error loading .env file: {}", e);
            None
        }
    }
}
