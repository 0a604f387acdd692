use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "arena-cli")]
#[command(about = "Command-line client for the Prophet Arena gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway status
    Status,
    /// List live events
    Events {
        #[arg(long, default_value_t = 20)]
        limit: i64,
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// List markets, optionally for one ticker
    Markets {
        #[arg(long)]
        ticker: Option<String>,
    },
    /// Show the model leaderboard
    Leaderboard,
    /// Submit a prediction for a market
    Predict {
        market_id: String,
        probability: f64,
        #[arg(long)]
        rationale: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Status => client.get(format!("{}/", base)).send().await?,
        Commands::Events { limit, offset } => {
            client
                .get(format!("{}/api/events", base))
                .query(&[("limit", limit), ("offset", offset)])
                .send()
                .await?
        }
        Commands::Markets { ticker } => {
            let mut req = client.get(format!("{}/api/markets", base));
            if let Some(ticker) = ticker {
                req = req.query(&[("ticker", ticker)]);
            }
            req.send().await?
        }
        Commands::Leaderboard => client.get(format!("{}/api/leaderboard", base)).send().await?,
        Commands::Predict {
            market_id,
            probability,
            rationale,
        } => {
            client
                .post(format!("{}/api/predictions", base))
                .json(&json!({
                    "market_id": market_id,
                    "probability": probability,
                    "rationale": rationale,
                }))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
