//! trivia: command-line trivia fetcher
//!
//! Fetches a page of questions through the session-cached controller.

use clap::{Parser, Subcommand};
use trivia_query::{Config, Difficulty, QueryKey, TriviaOptions, TriviaQuery, TriviaResponse};

/// trivia-query CLI
#[derive(Parser)]
#[command(name = "trivia")]
#[command(version = trivia_query::PKG_VERSION)]
#[command(about = "Fetch trivia questions from a trivia endpoint")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Endpoint origin (overrides the config file)
    #[arg(short, long, env = "TRIVIA_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch one page of questions
    Fetch {
        /// easy, medium, hard or all
        #[arg(short, long, default_value = "all")]
        difficulty: Difficulty,
        /// Index of the first question
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
        /// Page size (server default when omitted)
        #[arg(short, long)]
        limit: Option<u32>,
        /// Fetch again bypassing the session cache
        #[arg(long)]
        refetch: bool,
        /// Print the raw JSON page
        #[arg(long)]
        json: bool,
        /// Reveal the correct answers
        #[arg(long)]
        answers: bool,
    },

    /// Print the query key for a set of options
    Key {
        #[arg(short, long, default_value = "all")]
        difficulty: Difficulty,
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
        #[arg(short, long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Key {
            difficulty,
            offset,
            limit,
        } => {
            let key = QueryKey::new(difficulty, offset, limit);
            println!("query: {key}");
            println!("cache: {}", key.cache_key());
        }

        Command::Fetch {
            difficulty,
            offset,
            limit,
            refetch,
            json,
            answers,
        } => {
            let config =
                Config::load_or_default(args.config.as_deref())?.with_base_url_override(args.base_url);

            let mut options = TriviaOptions::default().difficulty(difficulty).offset(offset);
            if let Some(limit) = limit {
                options = options.limit(limit);
            }

            let controller = TriviaQuery::builder()
                .config(&config)
                .options(options)
                .build()?;

            let mut state = controller.settled().await;
            if refetch {
                controller.refetch();
                state = controller.settled().await;
            }

            if let Some(error) = state.error {
                return Err(error.into());
            }

            match state.data {
                Some(page) if json => println!("{}", serde_json::to_string_pretty(&page)?),
                Some(page) => print_page(&page, answers),
                None => println!("no data"),
            }
        }
    }

    Ok(())
}

fn print_page(page: &TriviaResponse, answers: bool) {
    println!(
        "{} questions ({}), {}-{} of {}",
        page.len(),
        page.difficulty,
        page.offset,
        page.offset as usize + page.len(),
        page.total
    );

    for (i, item) in page.items.iter().enumerate() {
        println!();
        println!("{}. {}", page.offset as usize + i + 1, item.question);
        for (j, answer) in item.answers.iter().enumerate() {
            let marker = if answers && j == item.correct_index {
                "*"
            } else {
                " "
            };
            println!("  {marker} {}) {answer}", (b'a' + (j % 26) as u8) as char);
        }
    }

    if page.is_empty() {
        println!("(no questions in this range)");
    } else if page.has_more() {
        println!();
        println!("more available: --offset {}", page.offset as usize + page.len());
    }
}
