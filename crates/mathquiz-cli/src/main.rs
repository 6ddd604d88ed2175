//! mathquiz CLI — the interactive console arithmetic quiz.

use std::io;
use std::process;

use clap::Parser;

mod quiz;

/// Console arithmetic quiz: five random questions, a score at the end.
#[derive(Parser)]
#[command(name = "mathquiz", version, about = "Console arithmetic quiz game")]
struct Cli {}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mathquiz_core=info".parse().unwrap())
                .add_directive("mathquiz_cli=info".parse().unwrap()),
        )
        .init();

    let _cli = Cli::parse();

    let result = quiz::default_question_set().and_then(|mut set| {
        let stdin = io::stdin();
        quiz::run(&mut set, stdin.lock(), &mut io::stdout())
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
