use std::sync::Arc;

use iocraft::prelude::*;

use super::CommandContext;
use crate::dashboard::{Dashboard, DashboardOptions};
use crate::error::{Result, SlaError};
use crate::logging;
use crate::tui::SlaDashboard;

/// Launch the full-screen incident dashboard
pub async fn cmd_dashboard(ctx: &CommandContext) -> Result<()> {
    let log_path = ctx.config.log_file();
    let _guard = logging::init_file(
        &log_path,
        ctx.log.as_deref(),
        ctx.config.log.level.as_deref(),
    );

    let api_url = ctx.api_url();
    let backend = ctx.backend()?;
    let dashboard = Arc::new(Dashboard::new(
        backend,
        DashboardOptions::from(&ctx.config),
    ));
    tracing::info!(%api_url, log = %log_path.display(), "starting dashboard");

    element!(SlaDashboard(dashboard: Some(dashboard), api_url))
        .fullscreen()
        .await
        .map_err(|e| SlaError::Other(format!("TUI error: {e}")))
}
