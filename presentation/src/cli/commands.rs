//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for interview-orchestrator
#[derive(Parser, Debug)]
#[command(name = "interview-orchestrator")]
#[command(author, version, about = "Adaptive mock-interview session orchestrator")]
#[command(long_about = r#"
Serves a stateless JSON endpoint that drives a mock interview:

1. start:   opening question for the role/framework
2. respond: follow-up question from the previous exchange
3. end:     summary plus a heuristic score of every answer

When the text-generation provider is unavailable, deterministic fallback
questions and a neutral summary are served instead (flagged `fallback: true`).

Configuration files are loaded from (in priority order):
1. INTERVIEW_* environment variables
2. --config <path>     Explicit config file
3. ./interview.toml    Project-level config
4. ~/.config/interview-orchestrator/config.toml   Global config

Example:
  interview-orchestrator --bind 0.0.0.0:8080
  interview-orchestrator -m gemini-1.5-pro -m gpt-4o-mini -vv
"#)]
pub struct Cli {
    /// Address to listen on (overrides [server] bind)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Candidate models in try order (can be specified multiple times)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
