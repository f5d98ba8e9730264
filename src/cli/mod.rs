//! CLI command implementations.
//!
//! Each command opens the store from the configured database path, runs one
//! operation, and prints a human-readable result. Destructive commands
//! (`remove`, `clear`) prompt for confirmation unless `--yes` was passed —
//! the store itself never confirms anything.

use anyhow::{bail, Result};
use std::io::Write;

use memopad::config::MemopadConfig;
use memopad::memo::{suggest, Layout, Memo, MemoStore};
use memopad::storage::sqlite::SqliteBackend;

/// Open the store backed by the configured SQLite database.
pub fn open_store(config: &MemopadConfig) -> Result<MemoStore<SqliteBackend>> {
    let backend = SqliteBackend::open(config.resolved_db_path())?;
    Ok(MemoStore::open(backend)?)
}

/// Refuse to proceed when a password is configured and the supplied candidate
/// is missing or wrong. Mirrors the host-side auth gate of the original UI.
fn ensure_unlocked(store: &MemoStore<SqliteBackend>, password: Option<&str>) -> Result<()> {
    if !store.has_password() {
        return Ok(());
    }
    match password {
        Some(candidate) if store.verify_password(candidate) => Ok(()),
        Some(_) => bail!("password incorrect"),
        None => bail!("a password is configured; pass --password to unlock"),
    }
}

/// Prompt for a typed YES on stdin. Returns an error when not confirmed.
fn confirm(action: &str, yes: bool) -> Result<()> {
    if yes {
        return Ok(());
    }
    print!("{action}\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    if input.trim() != "YES" {
        bail!("cancelled");
    }
    Ok(())
}

pub fn add(
    config: &MemopadConfig,
    password: Option<&str>,
    title: Option<&str>,
    keyword: Option<&str>,
    content: &str,
) -> Result<()> {
    let mut store = open_store(config)?;
    ensure_unlocked(&store, password)?;

    let memo = store.create(title, content, keyword)?;
    println!("Created memo {}", memo.id);
    Ok(())
}

pub fn list(config: &MemopadConfig, password: Option<&str>) -> Result<()> {
    let store = open_store(config)?;
    ensure_unlocked(&store, password)?;

    if store.list().is_empty() {
        println!("No memos.");
        return Ok(());
    }

    match store.layout() {
        Layout::List => {
            for memo in store.list() {
                print_card(memo);
                println!();
            }
        }
        Layout::Grid => {
            println!("{:<15} {:<20} {:<12}", "ID", "TITLE", "KEYWORD");
            for memo in store.list() {
                println!(
                    "{:<15} {:<20} {:<12}",
                    memo.id,
                    memo.title.as_deref().unwrap_or("(untitled)"),
                    memo.keyword.as_deref().unwrap_or("-"),
                );
            }
        }
    }
    Ok(())
}

fn print_card(memo: &Memo) {
    println!("Memo {}", memo.id);
    if let Some(ref title) = memo.title {
        println!("  Title:    {title}");
    }
    if let Some(ref keyword) = memo.keyword {
        println!("  Keyword:  {keyword}");
    }
    println!("  Color:    {}", memo.color);
    println!("  Content:  {}", memo.content);
}

pub fn edit(
    config: &MemopadConfig,
    password: Option<&str>,
    id: &str,
    title: Option<&str>,
    keyword: Option<&str>,
    content: &str,
) -> Result<()> {
    let mut store = open_store(config)?;
    ensure_unlocked(&store, password)?;

    let memo = store.update(id, title, content, keyword)?;
    println!("Updated memo {}", memo.id);
    Ok(())
}

pub fn remove(config: &MemopadConfig, password: Option<&str>, id: &str, yes: bool) -> Result<()> {
    let mut store = open_store(config)?;
    ensure_unlocked(&store, password)?;

    if store.get(id).is_none() {
        println!("No memo with id {id}.");
        return Ok(());
    }

    confirm(&format!("This will delete memo {id}."), yes)?;
    store.delete(id)?;
    println!("Deleted memo {id}.");
    Ok(())
}

pub fn clear(config: &MemopadConfig, password: Option<&str>, yes: bool) -> Result<()> {
    let mut store = open_store(config)?;
    ensure_unlocked(&store, password)?;

    confirm(
        &format!("This will delete ALL {} memos.", store.list().len()),
        yes,
    )?;
    store.clear()?;
    println!("All memos deleted.");
    Ok(())
}

/// Show or set the completion trigger prefix.
pub fn prefix(config: &MemopadConfig, password: Option<&str>, value: Option<&str>) -> Result<()> {
    let mut store = open_store(config)?;
    ensure_unlocked(&store, password)?;

    match value {
        Some(value) => {
            store.set_trigger_prefix(value)?;
            if store.trigger_prefix().is_empty() {
                println!("Trigger prefix cleared; completion disabled.");
            } else {
                println!("Trigger prefix set to '{}'.", store.trigger_prefix());
            }
        }
        None => match store.trigger_prefix() {
            "" => println!("No trigger prefix configured; completion disabled."),
            prefix => println!("Trigger prefix: '{prefix}'"),
        },
    }
    Ok(())
}

/// Show or set the list layout.
pub fn layout(config: &MemopadConfig, password: Option<&str>, value: Option<Layout>) -> Result<()> {
    let mut store = open_store(config)?;
    ensure_unlocked(&store, password)?;

    match value {
        Some(layout) => {
            store.set_layout(layout)?;
            println!("Layout set to {layout}.");
        }
        None => println!("Layout: {}", store.layout()),
    }
    Ok(())
}

pub fn password_set(config: &MemopadConfig, new_password: &str) -> Result<()> {
    let mut store = open_store(config)?;
    store.set_password(new_password)?;
    println!("Password set.");
    Ok(())
}

pub fn password_check(config: &MemopadConfig, candidate: &str) -> Result<()> {
    let store = open_store(config)?;
    if !store.has_password() {
        bail!("no password is configured");
    }
    if store.verify_password(candidate) {
        println!("Password correct.");
        Ok(())
    } else {
        bail!("password incorrect");
    }
}

pub fn password_status(config: &MemopadConfig) -> Result<()> {
    let store = open_store(config)?;
    if store.has_password() {
        println!("A password is configured.");
    } else {
        println!("No password configured.");
    }
    Ok(())
}

/// Run trigger completion against a line of text (as the text up to the
/// cursor) and print the candidates with their replacement spans.
pub fn run_suggest(config: &MemopadConfig, password: Option<&str>, line: &str) -> Result<()> {
    let store = open_store(config)?;
    ensure_unlocked(&store, password)?;

    let suggestions = suggest(&store, line);
    if suggestions.is_empty() {
        println!("No suggestions.");
        return Ok(());
    }

    for s in &suggestions {
        println!(
            "{:<12} [{}..{}] {} -> {}",
            s.keyword, s.replace_from, s.replace_to, s.detail, s.insert_text,
        );
    }
    Ok(())
}
