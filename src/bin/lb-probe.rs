use clap::{Parser, Subcommand};
use lb_demo_server::probe::{Endpoint, ProbeClient};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lb-probe")]
#[command(about = "Poll a load-balanced demo server and see which instance answers", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the greeting from `/`
    Root,
    /// Fetch `/health`
    Health,
    /// Fetch `/status`
    Status,
    /// Send many requests to `/` and count answers per instance
    Spread {
        #[arg(short = 'n', long, default_value_t = 20)]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ProbeClient::new(cli.url);

    let endpoint = match cli.command {
        Commands::Root => Endpoint::Root,
        Commands::Health => Endpoint::Health,
        Commands::Status => Endpoint::Status,
        Commands::Spread { requests } => {
            let spread = client.spread(requests).await;
            println!("{spread}");
            return Ok(if spread.failures() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
    };

    let response = client.fetch(endpoint).await?;
    let pretty = serde_json::to_string_pretty(&response.body)?;
    if !response.status.is_success() {
        eprintln!("Error: server returned status {}", response.status);
        eprintln!("Response: {pretty}");
        return Ok(ExitCode::FAILURE);
    }

    println!("{pretty}");
    Ok(ExitCode::SUCCESS)
}
