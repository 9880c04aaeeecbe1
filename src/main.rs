//! # quicklist CLI
//!
//! Command-line interface for the quicklist to-do manager.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use quicklist::commands::{self, InitArgs};
use quicklist::constants::{PRIORITY_DEFAULT, PRIORITY_MAX, PRIORITY_MIN};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/quicklist/config     Path of the list store (store_path)
  ~/.local/share/quicklist/      Default store location (list.yml)

Positions:
  Items are addressed by the 1-based position shown by `qkl list`.
  Positions are not stable identifiers: removing an item shifts every
  later item down by one.

Getting Started:
  qkl init                       Initialize the list
  qkl add Buy oat milk           Add an item
  qkl list                       Show all items
  qkl done 1                     Mark the first item done

Learn more:
  qkl <COMMAND> --help           Show detailed help for a command";

#[derive(Parser)]
#[command(name = "qkl")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Personal quick-list (to-do) manager for the command line")]
#[command(
    long_about = "quicklist keeps a small prioritized to-do list in a single YAML file. \
Items are added, listed, marked done, and removed by their current list position; \
the store file is rewritten as a whole on every change, so it stays human-readable \
and diff-friendly.

The store location is recorded in ~/.config/quicklist/config and set up by `qkl init`."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the list store and configuration
    #[command(
        long_about = "Initialize quicklist for this user.\n\n\
Writes ~/.config/quicklist/config pointing at the list store and creates an \
empty store file if none exists. By default the store lives at \
~/.local/share/quicklist/list.yml; pass --store-path to keep it elsewhere \
(e.g. inside a synced folder).",
        after_help = "Examples:\n  \
qkl init                                  Initialize with the default store\n  \
qkl init --store-path ~/notes/list.yml    Keep the list in a custom file\n  \
qkl init --force --store-path ~/l.yml     Point an existing setup elsewhere\n\n\
Note: an existing store file is never overwritten; only the config is."
    )]
    Init {
        /// Custom location for the list store file
        #[arg(long, value_name = "PATH")]
        store_path: Option<PathBuf>,

        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Add a new item with a DESCRIPTION
    #[command(
        long_about = "Add a new item to the end of the list.\n\n\
All DESCRIPTION words are joined into one sentence and a terminating period \
is appended if missing. The new item starts out not done and is appended \
after all existing items.",
        after_help = "Examples:\n  \
qkl add Clean the house                   Added with default priority 2\n  \
qkl add -p 1 Pay rent                     High priority\n  \
qkl add --priority 3 \"Tidy the shed\"      Low priority, quoted sentence"
    )]
    Add {
        /// Description of the item (words are joined with spaces)
        #[arg(required = true)]
        description: Vec<String>,

        /// Priority from 1 (high) to 3 (low)
        #[arg(
            short,
            long,
            default_value_t = PRIORITY_DEFAULT,
            value_parser = clap::value_parser!(u8).range(i64::from(PRIORITY_MIN)..=i64::from(PRIORITY_MAX))
        )]
        priority: u8,
    },

    /// List all items with their positions
    #[command(
        long_about = "List all items in stored order.\n\n\
The first column is the item's current 1-based position, which is the handle \
for `qkl done` and `qkl remove`. Positions shift when items are removed, so \
re-check the list before removing several items."
    )]
    List,

    /// Mark the item at POSITION as done
    #[command(
        long_about = "Mark the item at the given position as done.\n\n\
Completion is one-way: there is no un-done. Marking an already-done item \
again succeeds and changes nothing.",
        after_help = "Examples:\n  \
qkl done 1                                Mark the first item done"
    )]
    Done {
        /// 1-based position as shown by `qkl list`
        position: usize,
    },

    /// Remove the item at POSITION
    #[command(
        long_about = "Remove the item at the given position.\n\n\
Every item after the removed one shifts down by one position. When removing \
several items, remove from the highest position first (or re-run `qkl list` \
between removals).",
        after_help = "Examples:\n  \
qkl remove 2                              Remove the second item"
    )]
    Remove {
        /// 1-based position as shown by `qkl list`
        position: usize,
    },

    /// Remove every item from the list
    #[command(
        long_about = "Remove all items, leaving an empty list.\n\n\
Asks for confirmation when run on a terminal; in scripts pass --yes.",
        after_help = "Examples:\n  \
qkl clear                                 Prompt, then clear\n  \
qkl clear --yes                           Clear without prompting"
    )]
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Generate shell completion scripts
    #[command(
        long_about = "Generate a completion script for the given shell and print it to stdout.",
        after_help = "Examples:\n  \
qkl completions zsh > ~/.zfunc/_qkl\n  \
qkl completions bash > ~/.local/share/bash-completion/completions/qkl"
    )]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { store_path, force } => commands::init(InitArgs { store_path, force }),

        Commands::Add {
            description,
            priority,
        } => commands::add(&description, priority),

        Commands::List => commands::list(),

        Commands::Done { position } => commands::done(position),

        Commands::Remove { position } => commands::remove(position),

        Commands::Clear { yes } => commands::clear(yes),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
