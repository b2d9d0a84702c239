use std::path::PathBuf;
use std::process;

use clap::Parser;
use millionaire_quiz::{
    AppOptions, Grammar, Language, Quiz, QuizError, QuestionBankParser, Translator, data,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "Play the Millionaire physics quiz.", long_about = None)]
struct Args {
    /// Question bank text file (defaults to the bundled physics bank)
    #[arg(short, long)]
    bank: Option<PathBuf>,

    /// JSON file overriding the bank's marker grammar
    #[arg(short, long)]
    grammar: Option<PathBuf>,

    /// JSON object mapping bank text to English display text
    #[arg(short, long)]
    translations: Option<PathBuf>,

    /// Start the game directly in this language
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Auto-select a topic by its number, Arabic name or English name
    #[arg(long)]
    topic: Option<String>,

    /// Skip the welcome screen
    #[arg(long)]
    skip_welcome: bool,

    /// Seed the question shuffling for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Print the parsed bank as JSON and exit
    #[arg(long)]
    dump: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> Result<(), QuizError> {
    let grammar = match &args.grammar {
        Some(path) => data::load_grammar(path)?,
        None => Grammar::default(),
    };
    let bank = match &args.bank {
        Some(path) => data::load_bank(path)?,
        None => data::SAMPLE_BANK.to_string(),
    };

    let topics = QuestionBankParser::new(grammar)?.parse(&bank);
    info!(topics = topics.len(), "question bank parsed");

    if args.dump {
        let json = serde_json::to_string_pretty(&topics).map_err(std::io::Error::other)?;
        println!("{}", json);
        return Ok(());
    }

    let translator = match &args.translations {
        Some(path) => Translator::from_json(path)?,
        None => Translator::builtin(),
    };

    let options = AppOptions {
        language: args.language,
        topic: args.topic,
        skip_welcome: args.skip_welcome,
        seed: args.seed,
    };

    Quiz::new(topics, translator, options)?.run()
}
