// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod config;
pub mod models;
pub mod service;

pub use config::UnsplashConfig;
pub use service::{PhotoSearch, UnsplashService};

pub mod constants {
  use std::time::Duration;
  pub(crate) const API_BASE_URL: &str = "https://api.unsplash.com/search/photos";
  pub(crate) const RESULTS_PER_QUERY: u8 = 3;
  pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
}
