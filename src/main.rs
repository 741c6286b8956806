use clap::Parser;
use trivia_quiz::Quiz;

const DEFAULT_ENDPOINT: &str = "https://the-trivia-api.com/v2/questions";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Trivia API endpoint to fetch the questions from
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let quiz = match Quiz::fetch(&args.endpoint).await {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
