//! Interactive browser command (`postdeck browse`)

use std::sync::Arc;

use iocraft::prelude::*;

use super::{Overrides, effective_config};
use crate::error::{PostdeckError, Result};
use crate::gateway::HttpGateway;
use crate::logging;
use crate::tui::PostBrowser;

/// Launch the browser TUI
pub async fn cmd_browse(overrides: &Overrides) -> Result<()> {
    logging::init_for_tui()?;

    let config = effective_config(overrides)?;
    let gateway = Arc::new(HttpGateway::from_config(&config)?);
    tracing::info!(base_url = %gateway.base_url(), "starting browser");

    element!(PostBrowser(
        gateway: Some(gateway as crate::gateway::SharedGateway),
        config: Some(config),
    ))
    .fullscreen()
    .await
    .map_err(|e| PostdeckError::Other(format!("TUI error: {e}")))
}
