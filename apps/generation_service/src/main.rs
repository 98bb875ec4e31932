use dotenvy::dotenv;
use generation_service::{app_module::AppState, app_router::build_app, config::Settings};
use profile_llm::LLMClient;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let settings = Settings::from_env()?;

    let subscriber_builder = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    if settings.is_dev() {
        tracing::subscriber::set_global_default(
            subscriber_builder
                .compact()
                .pretty()
                .with_ansi(true)
                .finish(),
        )?;
    } else {
        tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )?;
    }

    tracing::info!(model = %settings.gemini_model, "Gemini client configured");
    let llm_client = LLMClient::new(settings.provider(), Some(settings.client_config()));

    let app = build_app(AppState::new(llm_client));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.port)).await?;

    tracing::info!("Server started, listening on port {}", settings.port);
    axum::serve(listener, app).await?;

    Ok(())
}
