// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;

#[derive(Debug, Clone)]
pub struct UnsplashConfig {
  pub(crate) access_key: String,
}

impl UnsplashConfig {
  pub fn new(access_key: impl Into<String>) -> Result<Self, Error> {
    let access_key = access_key.into();
    if access_key.trim().is_empty() {
      return Err(Error::InvalidApiKey);
    }

    Ok(Self { access_key })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_blank_access_key() {
    assert!(matches!(UnsplashConfig::new("  "), Err(Error::InvalidApiKey)));
  }

  #[test]
  fn accepts_non_empty_access_key() {
    assert!(UnsplashConfig::new("abc123").is_ok());
  }
}
