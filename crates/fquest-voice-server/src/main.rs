use clap::Parser;
use fquest_interrupt::{AgentClient, MemoryInterruptRegistry};
use fquest_voice_server::{health_routes, voice_routes, AppState};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fquest-voice-server")]
struct Args {
    #[arg(long, env = "VOICE_LISTEN_ADDR", default_value = "127.0.0.1:8484")]
    listen: String,

    /// Streaming run endpoint of the planning agent. Required: a missing
    /// endpoint fails startup instead of silently defaulting.
    #[arg(long, env = "AGENT_URL")]
    agent_url: String,

    /// Lifetime of an unanswered pending confirmation.
    #[arg(long, env = "PENDING_TTL_SECS", default_value_t = 900)]
    pending_ttl_secs: u64,

    /// Spoken on an empty first turn.
    #[arg(long, env = "VOICE_GREETING")]
    voice_greeting: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let registry = Arc::new(MemoryInterruptRegistry::new(Duration::from_secs(
        args.pending_ttl_secs,
    )));
    let state = AppState::new(
        AgentClient::new(&args.agent_url),
        registry,
        args.voice_greeting,
    );

    let app = axum::Router::new()
        .merge(health_routes())
        .merge(voice_routes())
        .with_state(state);

    tracing::info!(listen = %args.listen, agent_url = %args.agent_url, "voice bridge starting");

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .expect("failed to bind http listener");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .expect("http server crashed");
}
