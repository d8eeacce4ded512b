use clap::{Parser, Subcommand};
use reqwest::Method;

#[derive(Parser)]
#[command(name = "mockctl")]
#[command(about = "Drive a running overload-mock instance", long_about = None)]
struct Cli {
    #[arg(short, long, env = "OVERLOAD_MOCK_URL", default_value = "http://localhost:80")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Switch overload simulation on
    On,
    /// Switch overload simulation off
    Off,
    /// Query the readiness probe
    Ready,
    /// Query the liveness probe
    Alive,
    /// Send one work request (may take the full overload delay)
    Probe,
}

impl Commands {
    fn request(&self) -> (Method, &'static str) {
        match self {
            Commands::On => (Method::POST, "/fakeerrormodeon"),
            Commands::Off => (Method::POST, "/fakeerrormodeoff"),
            Commands::Ready => (Method::GET, "/ready"),
            Commands::Alive => (Method::GET, "/alive"),
            Commands::Probe => (Method::GET, "/"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let (method, path) = cli.command.request();
    let url = format!("{}{}", cli.url.trim_end_matches('/'), path);

    let res = client.request(method, &url).send().await?;
    let status = res.status();
    let body = res.text().await?;

    println!("{} {}", status.as_u16(), body);
    Ok(())
}
