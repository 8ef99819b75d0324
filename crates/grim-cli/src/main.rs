//! CLI frontend for the Grimoire character sheet keeper.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use commands::lists::List;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "grim",
    about = "Grimoire: keep and edit tabletop character sheets",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding character records
    #[arg(
        short,
        long,
        global = true,
        env = "GRIM_DATA_DIR",
        default_value = ".grimoire"
    )]
    data_dir: PathBuf,

    /// Log engine and store activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new character with a default sheet
    New {
        /// Character name
        name: String,

        /// Initial class and level (e.g. "Rogue 3")
        #[arg(short, long)]
        class: Option<String>,
    },

    /// List stored characters
    List,

    /// Show a character's derived sheet
    Show {
        /// Character name, id, or id prefix
        character: String,

        /// Print the derived sheet as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set one field by dotted path (e.g. attributes.strength.score 16)
    Set {
        /// Character name, id, or id prefix
        character: String,

        /// Dotted field path
        path: String,

        /// New value
        value: String,
    },

    /// Add or remove attacks and spells
    Attack {
        #[command(subcommand)]
        action: AttackAction,
    },

    /// Add or remove equipment
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Add or remove features and traits
    Feature {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Add or remove other proficiencies and languages
    Language {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Set or clear the portrait URL of a character
    Avatar {
        /// Character name, id, or id prefix
        character: String,

        /// Image URL (omit to clear)
        url: Option<String>,
    },

    /// Import a (possibly partial) JSON sheet as a new character
    Import {
        /// JSON file to read
        file: PathBuf,

        /// Character name (default: the sheet's character_name or file name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Export a character's derived sheet as JSON
    Export {
        /// Character name, id, or id prefix
        character: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a character
    Delete {
        /// Character name, id, or id prefix
        character: String,
    },
}

#[derive(Subcommand)]
enum AttackAction {
    /// Append an attack
    Add {
        /// Character name, id, or id prefix
        character: String,
        /// Attack or spell name
        name: String,
        /// Attack bonus as written
        #[arg(short, long, default_value = "+0")]
        bonus: String,
        /// Damage and type as written
        #[arg(short, long, default_value = "1d4")]
        damage: String,
    },
    /// Remove the attack at a position (1-based, as shown by `show`)
    Remove {
        /// Character name, id, or id prefix
        character: String,
        /// Position in the list
        position: usize,
    },
}

#[derive(Subcommand)]
enum ItemAction {
    /// Append an item
    Add {
        /// Character name, id, or id prefix
        character: String,
        /// Item name
        name: String,
        /// How many
        #[arg(short, long, default_value = "1")]
        quantity: u32,
        /// Weight of one unit
        #[arg(short, long, default_value = "0")]
        weight: f64,
    },
    /// Remove the item at a position (1-based, as shown by `show`)
    Remove {
        /// Character name, id, or id prefix
        character: String,
        /// Position in the list
        position: usize,
    },
}

#[derive(Subcommand)]
enum EntryAction {
    /// Append an entry
    Add {
        /// Character name, id, or id prefix
        character: String,
        /// Entry text
        text: String,
    },
    /// Remove the entry at a position (1-based, as shown by `show`)
    Remove {
        /// Character name, id, or id prefix
        character: String,
        /// Position in the list
        position: usize,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GRIM_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dir = cli.data_dir;
    let result = match cli.command {
        Commands::New { name, class } => commands::new::run(&dir, &name, class.as_deref()),
        Commands::List => commands::list::run(&dir),
        Commands::Show { character, json } => commands::show::run(&dir, &character, json),
        Commands::Set {
            character,
            path,
            value,
        } => commands::set::run(&dir, &character, &path, &value),
        Commands::Attack { action } => match action {
            AttackAction::Add {
                character,
                name,
                bonus,
                damage,
            } => commands::lists::add_attack(&dir, &character, name, bonus, damage),
            AttackAction::Remove {
                character,
                position,
            } => commands::lists::remove(&dir, &character, List::Attacks, position),
        },
        Commands::Item { action } => match action {
            ItemAction::Add {
                character,
                name,
                quantity,
                weight,
            } => commands::lists::add_item(&dir, &character, name, quantity, weight),
            ItemAction::Remove {
                character,
                position,
            } => commands::lists::remove(&dir, &character, List::Equipment, position),
        },
        Commands::Feature { action } => commands::lists::entry(&dir, List::Features, action),
        Commands::Language { action } => commands::lists::entry(&dir, List::Languages, action),
        Commands::Avatar { character, url } => {
            commands::avatar::run(&dir, &character, url.as_deref())
        }
        Commands::Import { file, name } => commands::import::run(&dir, &file, name.as_deref()),
        Commands::Export { character, output } => {
            commands::export::run(&dir, &character, output.as_deref())
        }
        Commands::Delete { character } => commands::delete::run(&dir, &character),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
