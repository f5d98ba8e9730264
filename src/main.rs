mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use memopad::{config, Layout};

#[derive(Parser)]
#[command(name = "memopad", version, about = "Memo snippets with trigger-word completion")]
struct Cli {
    /// Password for stores that have one configured
    #[arg(short, long, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new memo
    Add {
        /// Memo body, inserted on completion acceptance
        content: String,
        /// Optional display title
        #[arg(short, long)]
        title: Option<String>,
        /// Completion keyword; memos without one never complete
        #[arg(short, long)]
        keyword: Option<String>,
    },
    /// List all memos (honors the layout preference)
    List,
    /// Replace a memo's title, content, and keyword
    Edit {
        id: String,
        content: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        keyword: Option<String>,
    },
    /// Delete a memo
    Remove {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Delete all memos
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show or set the completion trigger prefix
    Prefix { value: Option<String> },
    /// Show or set the list layout
    Layout { value: Option<Layout> },
    /// Manage the access password
    Password {
        #[command(subcommand)]
        action: PasswordAction,
    },
    /// Run completion against a line of text (treated as text up to the cursor)
    Suggest { line: String },
}

#[derive(Subcommand)]
enum PasswordAction {
    /// Set or reset the password
    Set { value: String },
    /// Verify a password candidate
    Check { value: String },
    /// Report whether a password is configured
    Status,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let config = config::MemopadConfig::load()?;

    // Log to stderr so stdout stays clean for command output.
    let filter =
        EnvFilter::try_new(&config.log.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let password = args.password.as_deref();
    match args.command {
        Command::Add {
            content,
            title,
            keyword,
        } => cli::add(
            &config,
            password,
            title.as_deref(),
            keyword.as_deref(),
            &content,
        ),
        Command::List => cli::list(&config, password),
        Command::Edit {
            id,
            content,
            title,
            keyword,
        } => cli::edit(
            &config,
            password,
            &id,
            title.as_deref(),
            keyword.as_deref(),
            &content,
        ),
        Command::Remove { id, yes } => cli::remove(&config, password, &id, yes),
        Command::Clear { yes } => cli::clear(&config, password, yes),
        Command::Prefix { value } => cli::prefix(&config, password, value.as_deref()),
        Command::Layout { value } => cli::layout(&config, password, value),
        Command::Password { action } => match action {
            PasswordAction::Set { value } => cli::password_set(&config, &value),
            PasswordAction::Check { value } => cli::password_check(&config, &value),
            PasswordAction::Status => cli::password_status(&config),
        },
        Command::Suggest { line } => cli::run_suggest(&config, password, &line),
    }
}
