use clap::Parser;
use cosmic_quiz::Quiz;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for question order and power-up draws (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Starting Cosmic Quiz with seed {}", seed);

    let quiz = match Quiz::load(seed) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error loading quiz: {}", e);
            std::process::exit(1);
        }
    };

    match quiz.run() {
        Ok(farewell) => println!("{}", farewell),
        Err(e) => {
            eprintln!("Error running quiz: {}", e);
            std::process::exit(1);
        }
    }
}
