// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::time::Duration;

pub(crate) const TELEGRAM_API_BASE: &str = "https://api.telegram.org/bot";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub(crate) const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;
// The long-poll request must be allowed to outlive the server-side wait.
pub(crate) const POLL_GRACE: Duration = Duration::from_secs(5);
pub(crate) const MAX_MESSAGE_LENGTH: usize = 4096;
pub(crate) const MAX_MEDIA_GROUP_SIZE: usize = 10;

#[derive(Clone, Debug)]
pub struct TelegramConfig {
  pub(crate) token: String,
  pub(crate) timeout: Duration,
  pub(crate) poll_timeout: Duration,
}

impl Default for TelegramConfig {
  fn default() -> Self {
    Self {
      token: String::new(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
      poll_timeout: Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS),
    }
  }
}
