use crate::chat::MessageLog;
use crate::config::Config;
use crate::session::SessionManager;
use crate::ui::{render_session, style};

/// Full `status` report: where things live, then the session.
///
/// Resolving here can renew an expired session, in which case the stale
/// conversation in `log` is dropped as well.
pub fn render_status(config: &Config, manager: &SessionManager, log: &MessageLog) -> String {
    let resolution = manager.resolve_session();
    log.discard_if_renewed(&resolution);
    let session = resolution.into_session();
    let status = manager.status();

    let lines = [
        format!("◆ cvchat {}", env!("CARGO_PKG_VERSION")),
        format!("  api      {}", style::url(&config.api_url)),
        format!("  config   {}", config.config_path.display()),
        format!("  storage  {}", config.storage_dir().display()),
        String::new(),
        render_session(&session, &status, manager.policy()),
    ];
    lines.join("\n")
}
