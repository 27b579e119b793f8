use chess_core::cli::play_loop::run_stdio_loop;
use chess_core::config::GameConfig;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::from_env();
    tracing::info!(
        opponent_is_automatic = config.opponent_is_automatic,
        computer_color = %config.computer_color,
        "starting chess session"
    );

    run_stdio_loop(config)
}
