use crate::backend::{ChatBackend, ChatResponse};
use crate::chat::{ChatOrchestrator, PendingQuestion, RejectReason, SendOutcome, TickOutcome};
use crate::config::Config;
use crate::error::TransportError;
use crate::ui;
use anyhow::{Context, Result};
use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

type AnswerFuture = Pin<Box<dyn Future<Output = Result<ChatResponse, TransportError>> + Send>>;

/// A question on the wire.
struct InFlight {
    pending: PendingQuestion,
    answer: AnswerFuture,
}

enum Event {
    Line(Option<String>),
    Tick,
    Answer(Result<ChatResponse, TransportError>),
    Interrupt,
}

/// Interactive loop: stdin lines, a cooldown re-check tick, and at most one
/// backend call in flight. Ctrl-C or end of input leaves; an unanswered
/// question is dropped.
pub async fn run(mut orchestrator: ChatOrchestrator, config: &Config) -> Result<()> {
    let contact_email = config.chat.contact_email.as_deref();
    let max_message_chars = config.chat.max_message_chars;

    for message in orchestrator.messages() {
        println!("{}\n", ui::render_message(message));
    }
    print_quota(&orchestrator, contact_email);
    println!("{}", ui::style::dim(t!("chat.welcome")));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_secs(config.chat.poll_interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut in_flight: Option<InFlight> = None;

    prompt()?;
    loop {
        let event = tokio::select! {
            _ = tokio::signal::ctrl_c() => Event::Interrupt,
            _ = ticker.tick() => Event::Tick,
            line = lines.next_line() => Event::Line(line.context("Failed to read stdin")?),
            answer = wait_for_answer(&mut in_flight) => Event::Answer(answer),
        };

        match event {
            Event::Interrupt | Event::Line(None) => break,
            Event::Tick => {
                if orchestrator.tick() == TickOutcome::SessionRenewed {
                    println!("\n{}", ui::style::assistant_label(t!("chat.renewed")));
                    for message in orchestrator.messages() {
                        println!("{}\n", ui::render_message(message));
                    }
                    print_quota(&orchestrator, contact_email);
                    prompt()?;
                }
            }
            Event::Answer(result) => {
                let Some(call) = in_flight.take() else {
                    continue;
                };
                let outcome = orchestrator.complete(call.pending, result);
                if let Some(reply) = orchestrator.messages().last() {
                    println!("\n{}\n", ui::render_message(reply));
                }
                if matches!(outcome, SendOutcome::Answered { .. }) {
                    print_quota(&orchestrator, contact_email);
                }
                prompt()?;
            }
            Event::Line(Some(line)) => match line.trim() {
                "/quit" | "/exit" => break,
                "/reset" if orchestrator.is_waiting() => {
                    println!("{}", ui::render_reject(RejectReason::Busy, max_message_chars));
                }
                "/reset" => {
                    orchestrator.reset_session();
                    if let Some(greeting) = orchestrator.messages().first() {
                        println!("{}\n", ui::render_message(greeting));
                    }
                    print_quota(&orchestrator, contact_email);
                    prompt()?;
                }
                text => match orchestrator.begin(text) {
                    Ok(pending) => {
                        println!("{}", ui::style::dim(t!("chat.waiting")));
                        in_flight = Some(start_call(orchestrator.backend(), pending));
                    }
                    Err(RejectReason::LimitReached) => {
                        print_quota(&orchestrator, contact_email);
                        prompt()?;
                    }
                    Err(reason) => {
                        println!("{}", ui::render_reject(reason, max_message_chars));
                        if in_flight.is_none() {
                            prompt()?;
                        }
                    }
                },
            },
        }
    }

    if in_flight.is_some() {
        tracing::debug!("leaving with a question still in flight");
    }
    println!("\n{}", t!("chat.bye"));
    Ok(())
}

fn start_call(backend: Arc<dyn ChatBackend>, pending: PendingQuestion) -> InFlight {
    let request = pending.request().clone();
    InFlight {
        pending,
        answer: Box::pin(async move { backend.ask(&request).await }),
    }
}

async fn wait_for_answer(in_flight: &mut Option<InFlight>) -> Result<ChatResponse, TransportError> {
    match in_flight {
        Some(call) => call.answer.as_mut().await,
        None => std::future::pending().await,
    }
}

fn print_quota(orchestrator: &ChatOrchestrator, contact_email: Option<&str>) {
    if orchestrator.is_limit_reached() {
        println!(
            "{}",
            ui::render_limit_banner(orchestrator.remaining_time(), contact_email)
        );
    } else {
        println!(
            "{}",
            ui::render_counter(
                orchestrator.questions_remaining(),
                orchestrator.policy().max_questions
            )
        );
    }
}

fn prompt() -> Result<()> {
    print!("{}", t!("chat.prompt"));
    std::io::stdout().flush().context("Failed to flush stdout")
}
