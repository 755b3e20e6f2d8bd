//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings needed to boot the HTTP server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Glob passed to Tera, e.g. `templates/**/*`.
    pub templates_dir: String,
}
