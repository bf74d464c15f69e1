use owo_colors::OwoColorize;

use super::{CommandOutput, Overrides, effective_config};
use crate::detail::{DetailLoader, DetailState, fetch_detail};
use crate::display::{detail_json, format_detail};
use crate::error::{PostdeckError, Result};
use crate::gateway::HttpGateway;
use crate::store::DataStore;

/// Display a post with its author and comments
///
/// Loads the full store first so the author resolves the same way it does in
/// the browser.
pub async fn cmd_show(overrides: &Overrides, id: u64, output_json: bool) -> Result<()> {
    crate::logging::init(crate::logging::LogTarget::Stderr)?;

    let config = effective_config(overrides)?;
    let gateway = HttpGateway::from_config(&config)?;
    let store = DataStore::load(&gateway).await?;

    let mut loader = DetailLoader::new();
    let ticket = loader.open(id);
    let result = fetch_detail(&gateway, id, store.users()).await;
    loader.resolve(ticket, result);

    match loader.state() {
        DetailState::Loaded { detail, .. } => {
            let text = format!(
                "{} {}\n{}",
                format!("#{}", detail.post.id).cyan(),
                "post".dimmed(),
                format_detail(detail)
            );
            CommandOutput::new(detail_json(detail))
                .with_text(text.trim_end())
                .print(output_json)
        }
        DetailState::Failed { message, .. } => Err(PostdeckError::Other(message.clone())),
        DetailState::Loading { .. } | DetailState::Closed => Err(PostdeckError::Other(
            crate::error::DETAIL_FAILURE_MESSAGE.to_string(),
        )),
    }
}
