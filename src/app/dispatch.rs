use crate::app::repl;
use crate::app::status::render_status;
use crate::backend::{CvAssets, HttpChatBackend};
use crate::chat::{ChatOptions, ChatOrchestrator, MessageLog, RejectReason, SendOutcome};
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::platform::SystemClock;
use crate::session::SessionManager;
use crate::storage::{FileStore, KeyValueStore};
use crate::ui;
use anyhow::{Context, Result, bail};
use std::sync::Arc;

pub async fn dispatch(cli: Cli, mut config: Config) -> Result<()> {
    if let Some(api_url) = cli.api_url.clone() {
        config.api_url = api_url;
        config.validate().context("Invalid --api-url")?;
    }

    let storage_dir = config.storage_dir();
    tracing::debug!(
        api_url = %config.api_url,
        storage = %storage_dir.display(),
        "cvchat starting"
    );
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(storage_dir));

    match cli.subcommand() {
        Commands::Chat => repl::run(build_orchestrator(&config, store), &config).await,
        Commands::Ask { message } => {
            let mut orchestrator = build_orchestrator(&config, store);
            ask(&mut orchestrator, &config, &message).await
        }
        Commands::Status => {
            let manager = session_manager(&config, Arc::clone(&store));
            println!("{}", render_status(&config, &manager, &MessageLog::new(store)));
            Ok(())
        }
        Commands::Reset => {
            let session = session_manager(&config, Arc::clone(&store)).reset();
            MessageLog::new(store).clear_messages();
            println!("{}", t!("reset.done", id = session.session_id));
            Ok(())
        }
        Commands::History { clear } => {
            history(&MessageLog::new(store), clear);
            Ok(())
        }
        Commands::Cv { page } => {
            print_cv_links(&CvAssets::new(&config.api_url), page);
            Ok(())
        }
    }
}

pub fn session_manager(config: &Config, store: Arc<dyn KeyValueStore>) -> SessionManager {
    SessionManager::new(store, Arc::new(SystemClock), config.session.policy())
}

/// Wire the HTTP backend, the session and the message log over one store.
pub fn build_orchestrator(config: &Config, store: Arc<dyn KeyValueStore>) -> ChatOrchestrator {
    ChatOrchestrator::new(
        session_manager(config, Arc::clone(&store)),
        MessageLog::new(store),
        Arc::new(HttpChatBackend::from_config(config)),
        ChatOptions::from(&config.chat),
    )
}

/// One question, printed answer. Rejections and failed calls are errors so
/// the exit status reflects them.
pub async fn ask(
    orchestrator: &mut ChatOrchestrator,
    config: &Config,
    message: &str,
) -> Result<()> {
    match orchestrator.send(message).await {
        SendOutcome::Answered { questions_remaining } => {
            if let Some(answer) = orchestrator.messages().last() {
                println!("{}", ui::render_message(answer));
            }
            println!(
                "{}",
                ui::render_counter(questions_remaining, orchestrator.policy().max_questions)
            );
            Ok(())
        }
        SendOutcome::Rejected(RejectReason::LimitReached) => {
            println!(
                "{}",
                ui::render_limit_banner(
                    orchestrator.remaining_time(),
                    config.chat.contact_email.as_deref()
                )
            );
            bail!("question limit reached")
        }
        SendOutcome::Rejected(reason) => {
            println!("{}", ui::render_reject(reason, config.chat.max_message_chars));
            bail!("question rejected: {reason}")
        }
        SendOutcome::Failed(error) => {
            if let Some(apology) = orchestrator.messages().last() {
                println!("{}", ui::render_message(apology));
            }
            Err(error).context("chat request failed")
        }
    }
}

fn history(log: &MessageLog, clear: bool) {
    if clear {
        log.clear_messages();
        println!("{}", t!("history.cleared"));
        return;
    }

    let messages = log.load_messages();
    if messages.is_empty() {
        println!("{}", t!("history.empty"));
        return;
    }
    for message in &messages {
        println!("{}\n", ui::render_message(message));
    }
}

fn print_cv_links(assets: &CvAssets, page: Option<u32>) {
    if let Some(page) = page {
        println!("{}", t!("cv.page", page = page, url = ui::style::url(assets.page_url(page))));
        return;
    }
    println!("{}", t!("cv.view", url = ui::style::url(assets.view_url())));
    println!("{}", t!("cv.download", url = ui::style::url(assets.download_url())));
}
