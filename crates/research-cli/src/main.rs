//! Interactive research assistant.
//!
//! Asks for one query, researches it and prints the report. Logs go to
//! stderr (`RUST_LOG`, default `warn`) so stdout carries only the session.

mod ui;

use std::io::Write;
use std::process::ExitCode;

use orchestrator::{render_report, ResearchOrchestrator};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

type InputLines = Lines<BufReader<Stdin>>;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print `prompt` and read one line. `None` on end of input.
async fn ask(lines: &mut InputLines, prompt: &str) -> std::io::Result<Option<String>> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    lines.next_line().await
}

/// The query to research, or `None` after telling the user why there is none.
fn accept_query(read: std::io::Result<Option<String>>) -> Option<String> {
    match read {
        Ok(Some(query)) if !query.trim().is_empty() => Some(query),
        Ok(_) => {
            println!("{}", ui::EMPTY_QUERY);
            None
        }
        Err(e) => {
            eprintln!("❌ Could not read input: {}", e);
            None
        }
    }
}

async fn run() -> ExitCode {
    let orchestrator = match ResearchOrchestrator::from_env() {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            error!("Startup failed: {}", e);
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Using brain: {}", orchestrator.brain_name());

    println!("{}", ui::banner());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let Some(query) = accept_query(ask(&mut lines, ui::QUERY_PROMPT).await) else {
        return ExitCode::SUCCESS;
    };

    println!("{}", ui::researching(query.trim()));

    let outcome = match orchestrator.research(&query).await {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("\n❌ Error during research: {}", e);
            return ExitCode::SUCCESS;
        }
    };

    let report = match outcome.report {
        Ok(report) => report,
        Err(e) => {
            println!("{}", ui::parse_failure(&e));
            return ExitCode::SUCCESS;
        }
    };

    println!("\n{}", render_report(&report));

    match ask(&mut lines, ui::SAVE_PROMPT).await {
        Ok(Some(answer)) if ui::wants_save(&answer) => match orchestrator.save(&report).await {
            Ok(confirmation) => {
                info!("{}", confirmation);
                println!("{}", ui::SAVED);
            }
            Err(e) => println!("❌ Error saving research: {}", e),
        },
        Ok(_) => {}
        Err(e) => eprintln!("❌ Could not read input: {}", e),
    }

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_tracing();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("❌ Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(run())
}
