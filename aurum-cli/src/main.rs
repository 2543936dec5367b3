use anyhow::Result;
use aurum_core::{ChatClient, ChatMessage, Config, GoldClient};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aurum")]
#[command(about = "Gold price and AI chat client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current quote for an instrument
    Price {
        /// Instrument symbol
        #[arg(default_value = "XAU")]
        symbol: String,

        /// Print the raw response envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the intraday price series for an instrument
    Chart {
        /// Instrument symbol
        #[arg(default_value = "XAU")]
        symbol: String,

        /// Print the raw response envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report presence and show the current viewer count
    Heartbeat,

    /// Ask the AI assistant a question
    Chat {
        /// Prompt text, joined with spaces
        #[arg(required = true)]
        prompt: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let config = Config::from_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Price { symbol, json } => {
            let response = GoldClient::from_config(&config).price(&symbol).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                let quote = &response.data;
                println!("{} ({}) via {}", quote.name, quote.symbol, quote.source);
                println!("price:   {:.2} {}", quote.price, quote.currency);
                if let Some(prev_close) = quote.prev_close {
                    println!("prev:    {prev_close:.2}");
                }
                println!("change:  {:+.2} ({:+.2}%)", quote.change, quote.change_pct);
                println!("updated: {}", quote.update_time);
            }
        }
        Commands::Chart { symbol, json } => {
            let response = GoldClient::from_config(&config).chart(&symbol).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                let points = &response.data;
                println!("{} points for {symbol}", points.len());
                if let (Some(first), Some(last)) = (points.first(), points.last()) {
                    println!("first: t={} p={:.2}", first.t, first.p);
                    println!("last:  t={} p={:.2}", last.t, last.p);
                }
            }
        }
        Commands::Heartbeat => {
            let response = GoldClient::from_config(&config).heartbeat().await?;
            println!("viewers online: {}", response.data.count);
        }
        Commands::Chat { prompt } => {
            let messages = vec![ChatMessage::user(prompt.join(" "))];
            let reply = ChatClient::from_config(&config).chat(&messages).await?;
            println!("{reply}");
        }
    }

    Ok(())
}
