// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::Result;

mod admin;
mod config;
#[cfg(debug_assertions)]
mod dotenv;
mod router;
mod runner;
mod texts;

use config::BotConfig;
use runner::BotRunner;

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

#[tokio::main]
async fn main() -> Result<()> {
  #[cfg(debug_assertions)]
  dotenv::load()?;
  setup_logging();

  let config = BotConfig::from_env()?;
  BotRunner::new(config)?.run().await
}
