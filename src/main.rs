use clancy::api::ChatApi;
use clancy::config::ClientConfig;
use clancy::repl::Repl;
use clancy::session::SessionStore;
use clancy::ui::render::Renderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Logs go to a file so they don't interleave with the chat.
    if let Err(e) = std::fs::create_dir_all(&config.log_dir) {
        eprintln!(
            "   Warning: could not create log dir {}: {}",
            config.log_dir.display(),
            e
        );
    }
    let file_appender = tracing_appender::rolling::never(&config.log_dir, "clancy.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    eprintln!("🎓 Clancy v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: {}", config.api_url);
    eprintln!("   Session file: {}", config.session_path.display());
    eprintln!("   Log: {}/clancy.log", config.log_dir.display());
    eprintln!("   Type a message and press Enter. /quit to exit, /reset to start over.\n");

    let api = ChatApi::new(&config)?;
    let sessions = SessionStore::new(config.session_path.clone());
    let renderer = Renderer::new(config.bubble_delay);

    let mut repl = Repl::new(api, sessions, renderer);
    repl.run().await?;

    Ok(())
}
