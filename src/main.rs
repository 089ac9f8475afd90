mod config;
mod dataset;
mod error;
mod quiz;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use config::Config;
use dataset::{Database, FactStore};
use quiz::{Console, Quiz};

type CliResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "multiflash", version, about = "Multiple-choice flashcard quizzes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quiz yourself on every fact of a topic
    Quiz {
        /// Topic (class) to draw facts from
        topic: String,

        /// Choices shown per question [env: MULTIFLASH_CHOICES, default: 3]
        #[arg(long, short = 'n')]
        choices: Option<usize>,

        /// Fact database [env: MULTIFLASH_DB, default: multiflash.db]
        #[arg(long)]
        db: Option<PathBuf>,

        /// Seed for reproducible question and choice order
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List topics and how many facts each holds
    Topics {
        /// Fact database [env: MULTIFLASH_DB, default: multiflash.db]
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult {
    let config = Config::load()?;

    match cli.command {
        Commands::Quiz {
            topic,
            choices,
            db,
            seed,
        } => {
            let db = Database::open(&db.unwrap_or(config.db_path))?;
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut quiz = Quiz::new(db, topic, choices.unwrap_or(config.num_choices), rng)?;
            quiz.start(&mut Console::stdio())?;
        }
        Commands::Topics { db } => {
            let db = Database::open(&db.unwrap_or(config.db_path))?;
            let topics = db.topics()?;
            if topics.is_empty() {
                println!("No topics found.");
            }
            for topic in topics {
                println!("{:<24} {:>4} facts", topic.name, topic.facts);
            }
        }
    }
    Ok(())
}
