use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dialoguer::Password;
use dotenvy::dotenv;

use ticketdesk::cli::{issue_token, password_hash};
use ticketdesk_config::JwtConfig;

#[derive(Parser)]
#[command(name = "ticketdesk-cli")]
#[command(about = "Ticketdesk CLI - Administrative tools for Ticketdesk", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue an access token for a subject (reads JWT_SECRET and JWT_ACCESS_EXPIRY)
    IssueToken {
        /// Subject id to put in the token
        #[arg(short = 's', long)]
        subject: String,
    },
    /// Print a bcrypt hash for the users.password_hash column
    HashPassword {
        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

fn main() -> ExitCode {
    dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::IssueToken { subject } => JwtConfig::from_env()
            .map_err(anyhow::Error::from)
            .and_then(|config| issue_token(&config, &subject))
            .map(|token| println!("{}", token.access_token)),
        Commands::HashPassword { password } => password
            .map(Ok)
            .unwrap_or_else(|| {
                Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(anyhow::Error::from)
            })
            .and_then(|password| password_hash(&password))
            .map(|hash| println!("{hash}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}
