use std::path::PathBuf;

use clap::Parser;
use team_trivia::{GameSetup, Trivia, TriviaError, load_setup_from_json, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the question bank from (built-in bank if omitted)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// File that receives the log output
    #[arg(long, default_value = "team-trivia.log")]
    log_file: PathBuf,

    /// Print the question bank as JSON and exit
    #[arg(long)]
    dump_bank: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running trivia: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), TriviaError> {
    let setup = match &args.questions {
        Some(path) => load_setup_from_json(path)?,
        None => GameSetup::builtin(),
    };

    if args.dump_bank {
        println!("{}", setup.to_json_pretty()?);
        return Ok(());
    }

    logging::init(&args.log_file)?;
    Trivia::new(setup).run()
}
