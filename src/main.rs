use homework_notifier::{Config, HomeworkApi, PollData, PollOptions, Poller, TelegramBot};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_notifier=debug".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            // Unrecoverable; the loop must not start without credentials.
            tracing::error!("{error}");
            std::process::exit(1);
        },
    };

    tracing::debug!("Credentials check passed");

    let api = HomeworkApi::new(config.practicum_token);
    let bot = TelegramBot::new(config.telegram_token, config.telegram_chat_id);
    let poller = Poller::new(api, bot, PollData::now(), PollOptions::default());

    tracing::info!("Starting homework status polling");

    poller.run().await;

    Ok(())
}
