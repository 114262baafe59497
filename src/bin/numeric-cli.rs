use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "numeric-cli")]
#[command(about = "Query a running numeric-api server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the server answers
    Hello,
    /// Ask whether a number is even
    IsEven { number: String },
    /// Ask whether a number is prime
    IsPrime { number: String },
    /// Ask for the factorial of a number
    Factorial { number: String },
}

impl Commands {
    fn path(&self) -> String {
        match self {
            Commands::Hello => "/".to_string(),
            Commands::IsEven { number } => format!("/api/iseven/{number}"),
            Commands::IsPrime { number } => format!("/api/isprime/{number}"),
            Commands::Factorial { number } => format!("/api/factorial/{number}"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let url = format!("{}{}", cli.url.trim_end_matches('/'), cli.command.path());
    let res = client.get(url).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
