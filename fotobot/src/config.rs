// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{bail, Context, Result};
use std::env;

/// Immutable process configuration, read once at startup and passed by
/// reference from then on.
#[derive(Debug, Clone)]
pub(crate) struct BotConfig {
  pub bot_token: String,
  pub unsplash_access_key: String,
}

impl BotConfig {
  pub(crate) fn from_env() -> Result<Self> {
    Ok(Self {
      bot_token: required("TELEGRAM_BOT_TOKEN")?,
      unsplash_access_key: required("UNSPLASH_ACCESS_KEY")?,
    })
  }
}

fn required(name: &str) -> Result<String> {
  let value = env::var(name).with_context(|| format!("Missing {name}"))?;
  if value.trim().is_empty() {
    bail!("Missing {name}");
  }
  Ok(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn absent_variable_is_an_error() {
    assert!(required("FOTOBOT_TEST_ABSENT").is_err());
  }

  #[test]
  fn blank_variable_counts_as_missing() {
    env::set_var("FOTOBOT_TEST_BLANK", "  ");
    assert!(required("FOTOBOT_TEST_BLANK").is_err());
  }

  #[test]
  fn present_variable_is_returned() {
    env::set_var("FOTOBOT_TEST_SET", "secret");
    assert_eq!(required("FOTOBOT_TEST_SET").unwrap(), "secret");
  }
}
