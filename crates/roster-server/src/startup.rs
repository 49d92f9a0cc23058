//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ____  ____  _____________________
   / __ \/ __ \/ ___/_  __/ ____/ __ \
  / /_/ / / / /\__ \ / / / __/ / /_/ /
 / _, _/ /_/ /___/ // / / /___/ _, _/
/_/ |_|\____//____//_/ /_____/_/ |_|

              User Accounts
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api/v1", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!("{}", separator);
}
