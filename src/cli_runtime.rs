use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use fetchterm::content::SiteContent;
use fetchterm::terminal::registry::command_defs;
use fetchterm::terminal::{OutputLine, Terminal};

#[derive(Parser)]
#[command(name = "fetchterm")]
#[command(about = "fetching.design, over a terminal", long_about = None)]
struct Cli {
    /// Load site content from a JSON file instead of the embedded document
    #[arg(long, value_name = "PATH", global = true)]
    content: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one terminal submission headlessly and print the result
    Exec {
        /// The command line to submit, e.g. `fetch projects`
        input: Vec<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered terminal commands
    Commands {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let content = match &cli.content {
        Some(path) => SiteContent::load(path)?,
        None => SiteContent::embedded(),
    };

    match cli.command {
        None => fetchterm::tui::run(content),
        Some(Commands::Exec { input, json }) => exec(content, &input.join(" "), json),
        Some(Commands::Commands { json }) => list_commands(json),
    }
}

#[derive(Serialize)]
struct ExecRecord<'a> {
    lines: &'a [OutputLine],
    #[serde(skip_serializing_if = "Option::is_none")]
    navigate_to: Option<&'a str>,
}

fn exec(content: SiteContent, input: &str, json: bool) -> Result<()> {
    let mut term = Terminal::new(content, "/");
    let navigate = term.submit(input);

    if json {
        let record = ExecRecord {
            lines: term.output(),
            navigate_to: navigate.as_deref(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&record).context("serialize exec result")?
        );
        return Ok(());
    }

    for line in term.output() {
        println!("{}", line.text);
    }
    if let Some(path) = navigate {
        println!("navigate: {}", path);
    }
    Ok(())
}

fn list_commands(json: bool) -> Result<()> {
    let defs = command_defs();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&defs).context("serialize command defs")?
        );
        return Ok(());
    }
    for def in defs {
        println!("{:<8} {:<20} {}", def.name, def.usage, def.help);
    }
    Ok(())
}
