//! Research orchestrator for coordinating a brain, the tool registry and the
//! structured report contract.
//!
//! This crate provides the [`ResearchOrchestrator`] type which runs one
//! research query at a time.
//!
//! # Architecture
//!
//! ```text
//! Query (from research-cli)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   RESEARCH ORCHESTRATOR                     │
//! │                                                             │
//! │  1. Reject empty queries                                    │
//! │         ↓                                                   │
//! │  2. Run the brain with the system prompt and tool menu      │
//! │     • tool calls go through RegistryToolExecutor            │
//! │     • tool failures come back as "❌ ..." observations       │
//! │         ↓                                                   │
//! │  3. Decode the final answer as a ResearchResult             │
//! │     • failure keeps the raw answer for display              │
//! │         ↓                                                   │
//! │  4. Optionally append the report to the output file         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use orchestrator::{render_report, ResearchOrchestrator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = ResearchOrchestrator::from_env()?;
//!     let outcome = orchestrator.research("History of the printing press").await?;
//!
//!     match outcome.report {
//!         Ok(report) => println!("{}", render_report(&report)),
//!         Err(e) => println!("{}\n{}", e, e.raw),
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod formatting;
mod orchestrator;
mod prompt;
mod report;

pub use error::OrchestratorError;
pub use formatting::{render_report, render_save_payload};
pub use orchestrator::{ResearchOrchestrator, ResearchOutcome};
pub use prompt::{build_system_prompt, INSTRUCTIONS, ROLE};
pub use report::{format_instructions, parse, schema, ParseError, ResearchResult};
