use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use clap::Parser;
use tracing::warn;

use super::commands::{AddArgs, ListArgs, SessionCommand, ShellCommand, ShellLine};
use crate::config::RegistryConfig;
use crate::entity::{Category, DocumentId, DraftRecord};
use crate::error::{RegistryError, Result};
use crate::search::{parse_query_with_defaults, QueryParams};
use crate::storage::DocumentStore;
use crate::view::{aggregate, find, project, CategoryStats, Preview, Projection};

/// Run one session command against the store.
pub fn run_session_command(
    store: &mut DocumentStore,
    config: &RegistryConfig,
    command: SessionCommand,
) -> Result<()> {
    match command {
        SessionCommand::List(args) => handle_list(store, config, args),
        SessionCommand::Stats { json } => handle_stats(store, json),
        SessionCommand::Show { id, json } => handle_show(store, config, id, json),
        SessionCommand::Add(args) => handle_add(store, args),
    }
}

/// Resolve list flags into query parameters. Unset flags fall back to the
/// configured defaults; unknown values are rejected.
pub fn list_params(config: &RegistryConfig, args: &ListArgs) -> Result<QueryParams> {
    let mut params = config.default_query();
    if let Some(ref search) = args.search {
        params.search_text = search.clone();
    }
    if let Some(ref category) = args.category {
        params.category_filter = category.parse()?;
    }
    if let Some(ref sort) = args.sort {
        params.sort_key = sort.parse()?;
    }
    Ok(params)
}

pub fn handle_list(store: &DocumentStore, config: &RegistryConfig, args: ListArgs) -> Result<()> {
    let params = list_params(config, &args)?;
    let projection = project(store.snapshot(), &params);
    print_projection(&projection, config, args.json)
}

pub fn handle_query(
    store: &DocumentStore,
    config: &RegistryConfig,
    raw: &[String],
    json: bool,
) -> Result<()> {
    let params = parse_query_with_defaults(&raw.join(" "), config.default_query())?;
    let projection = project(store.snapshot(), &params);
    print_projection(&projection, config, json)
}

fn print_projection(projection: &Projection<'_>, config: &RegistryConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(projection)?);
        return Ok(());
    }

    if projection.is_empty() {
        println!("No documents found.");
        println!("Try adjusting your search or filter.");
        return Ok(());
    }

    println!("{} documents found\n", projection.visible_count());
    for d in &projection.visible_records {
        println!(
            "  {:03} [{}] {} ({}) {}",
            d.id.get(),
            d.category,
            d.date,
            d.display_size(&config.size_fallback),
            d.title
        );
    }

    Ok(())
}

pub fn handle_stats(store: &DocumentStore, json: bool) -> Result<()> {
    let stats = aggregate(store.snapshot());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats);
    }

    Ok(())
}

fn print_stats(stats: &CategoryStats) {
    println!("Total documents: {}", stats.total_count);
    println!("HR documents: {}", stats.count(Category::Hr));
    println!("Engineering documents: {}", stats.count(Category::Engineering));
    println!("Other documents: {}", stats.other_count);

    if !stats.count_by_category.is_empty() {
        println!("\nBy category:");
        for (category, count) in &stats.count_by_category {
            println!("  {:<12} {}", category.as_str(), count);
        }
    }
}

pub fn handle_show(store: &DocumentStore, config: &RegistryConfig, id: u64, json: bool) -> Result<()> {
    let record =
        find(store.snapshot(), DocumentId(id)).ok_or(RegistryError::DocumentNotFound(id))?;
    let preview = Preview::new(record, &config.size_fallback);

    if json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    let d = preview.record;
    println!("Document {:03}", d.id.get());
    println!("Title: {}", d.title);
    println!("Category: {}", d.category);
    println!("Date: {}", d.date);
    println!("Size: {}", preview.display_size);
    println!("Priority: {}", preview.effective_priority);
    if let Some(ref department) = d.department {
        println!("Department: {}", department);
    }
    if let Some(ref file_name) = d.file_name {
        println!("File: {}", file_name);
    }
    if let Some(ref description) = d.description {
        println!("\n{}", description);
    }
    println!("\n{}", preview.summary);

    Ok(())
}

/// Build a draft from `add` flags. Enum values are checked here.
pub fn draft_from_args(args: AddArgs) -> Result<DraftRecord> {
    let mut draft = DraftRecord::new(args.title);
    draft.category = args.category.parse()?;
    draft.priority = args.priority.parse()?;
    draft.department = args.department;
    draft.description = args.description;
    draft.file_name = args.file_name;
    Ok(draft)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| RegistryError::InvalidDate(s.to_string()))
}

pub fn handle_add(store: &mut DocumentStore, args: AddArgs) -> Result<()> {
    let json = args.json;
    let date = args.date.as_deref().map(parse_date).transpose()?;
    let draft = draft_from_args(args)?;
    let record = match date {
        Some(date) => store.try_append_dated(draft, date)?,
        None => store.try_append(draft)?,
    }
    .clone();

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("Added document {:03} - {}", record.id.get(), record.title);
        println!("Total documents: {}", store.len());
    }

    Ok(())
}

/// Interactive session: one store for every line read from stdin.
pub fn handle_shell(store: &mut DocumentStore, config: &RegistryConfig) -> Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(tokens) = shlex::split(line) else {
            warn!(line, "unbalanced quotes in shell input");
            eprintln!("Error: unmatched quotes in '{}'", line);
            continue;
        };

        let parsed = match ShellLine::try_parse_from(tokens) {
            Ok(parsed) => parsed,
            Err(e) => {
                if let Err(err) = e.print() {
                    warn!(%err, "failed to print shell usage");
                }
                continue;
            }
        };

        let result = match parsed.command {
            ShellCommand::Session(command) => run_session_command(store, config, command),
            ShellCommand::Query { raw, json } => handle_query(store, config, &raw, json),
            ShellCommand::Quit => break,
        };

        if let Err(e) = result {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}
