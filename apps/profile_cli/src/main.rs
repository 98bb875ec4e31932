mod api;
mod form;

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use api::{generate_linkedin, DEFAULT_API_BASE};
use form::ProfileForm;

const MISSING_FIELDS: &str = "Please provide at least Role and Skills.";
const NO_TEXT: &str = "No text returned from server.";

/// Generate a LinkedIn headline, bio or about section from profile details.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    role: String,

    #[arg(long = "years-of-experience", default_value = "")]
    years_of_experience: String,

    /// Comma-separated, e.g. "Rust, Tokio, PostgreSQL"
    #[arg(long, default_value = "")]
    skills: String,

    #[arg(long, default_value = "professional", value_parser = ["professional", "friendly", "bold"])]
    tone: String,

    #[arg(long, default_value = "headline", value_parser = ["headline", "bio", "about"])]
    target: String,

    /// Base URL of the generation service
    #[arg(long, env = "API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,
}

impl From<&Cli> for ProfileForm {
    fn from(cli: &Cli) -> Self {
        Self {
            name: cli.name.clone(),
            role: cli.role.clone(),
            years_of_experience: cli.years_of_experience.clone(),
            skills: cli.skills.clone(),
            tone: cli.tone.clone(),
            target: cli.target.clone(),
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let form = ProfileForm::from(&cli);

    if !form.can_submit() {
        anyhow::bail!(MISSING_FIELDS);
    }

    let preview = form.skills_preview();
    if !preview.is_empty() {
        println!("Skills: {}", preview.join(" · "));
    }

    let client = reqwest::Client::new();
    let response = generate_linkedin(&client, &cli.api_base, &form.to_payload()).await?;

    if response.text.is_empty() {
        anyhow::bail!(NO_TEXT);
    }

    Ok(response.text)
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(text) => println!("\n{}", text),
        Err(e) => {
            tracing::debug!("Generation failed: {:?}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
