use std::path::PathBuf;
use std::process;

use clap::Parser;
use csv_quiz::terminal::ColorChoice;
use csv_quiz::{Quiz, DEFAULT_QUESTIONS_PATH};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file in format 'question;...options;answer'
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    csv: PathBuf,

    /// When to colour the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

fn abort(msg: impl std::fmt::Display) -> ! {
    log::debug!("aborting: {}", msg);
    println!("{}", msg);
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("loading questions from {}", args.csv.display());

    let quiz = match Quiz::from_csv(&args.csv) {
        Ok(quiz) => quiz.with_theme(args.color.theme()),
        Err(e) => abort(e),
    };

    if let Err(e) = quiz.run() {
        abort(e);
    }
}
