//! aicommit - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use git2::Repository;
use tracing_subscriber::EnvFilter;

use aicommit::gemini::{self, GeminiClient, DEFAULT_MODEL};
use aicommit::prompt::Language;
use aicommit::run::{run, RunConfig, TerminalReviewer};

/// Generate a commit message from the pending diff using Gemini.
#[derive(Parser, Debug)]
#[command(name = "aicommit")]
#[command(about = "Generate commit messages from git diffs using Gemini")]
#[command(version)]
struct Cli {
    /// Print a status line for each step
    #[arg(short, long)]
    verbose: bool,

    /// Language for the generated text
    #[arg(short, long, value_enum, default_value_t = Language::En)]
    lang: Language,

    /// Gemini model to use
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Generate a branch name and commit on a new branch
    #[arg(short = 'b', long)]
    new_branch: bool,

    /// Review generated text before it is used (accept/regenerate/abort)
    #[arg(short, long)]
    interactive: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "aicommit=info" } else { "aicommit=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // .env in the target repository may hold the key
    dotenvy::dotenv().ok();

    // Credential check comes first: a missing key must fail before any git call
    let api_key = gemini::api_key_from_env()?;
    let client = GeminiClient::new(api_key, cli.model);

    let repo = Repository::open(".")
        .context("Not a git repository. Run aicommit from within a git repository.")?;

    let config = RunConfig {
        language: cli.lang,
        new_branch: cli.new_branch,
        interactive: cli.interactive,
    };

    let mut reviewer = TerminalReviewer;
    let (oid, message) = run(&repo, &client, &mut reviewer, &config).await?;

    let mut short = oid.to_string();
    short.truncate(7);
    println!("[{short}] {message}");

    Ok(())
}
