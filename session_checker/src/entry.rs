use std::path::PathBuf;

use teloxide::Bot;

use crate::{check, CheckerConfig, Status};

/// Load the config at `path` and check the credential in it.
async fn run(path: PathBuf) -> Status {
    log::info!("Loading credential from {}...", path.display());

    let config = match CheckerConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return Status::invalid(e);
        }
    };

    let mut bot = Bot::new(&config.session);
    if let Some(url) = config.api_url.clone() {
        log::info!("Using API server at {url}");
        bot = bot.set_api_url(url);
    }

    check(&bot, config.timeout).await
}

/// Run the whole check as its own task, so that even a panic in there
/// comes back as a status line instead of garbage on stdout.
pub async fn entry(path: PathBuf) -> Status {
    match tokio::spawn(run(path)).await {
        Ok(status) => status,
        Err(e) => {
            log::error!("Check task died: {e}");
            Status::error(e)
        }
    }
}
