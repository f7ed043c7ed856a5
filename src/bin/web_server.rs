use clap::Parser;
use lazy_sssp::web::{start_server, ServerConfig};

/// HTTP API for shortest path queries
#[derive(Parser, Debug)]
#[command(name = "web_server", version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "SSSP_PORT", default_value_t = 3005)]
    port: u16,

    /// Maximum number of stored graph sessions
    #[arg(long, env = "SSSP_MAX_SESSIONS", default_value_t = 1000)]
    max_sessions: usize,

    /// Minutes after which a session expires
    #[arg(long, default_value_t = 60)]
    session_timeout_minutes: u64,

    /// Disable permissive CORS headers
    #[arg(long)]
    no_cors: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = ServerConfig {
        port: args.port,
        enable_cors: !args.no_cors,
        max_sessions: args.max_sessions,
        session_timeout_minutes: args.session_timeout_minutes,
    };

    start_server(config).await
}
