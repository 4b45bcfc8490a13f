// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{config::UnsplashConfig, constants::*, models::api::SearchResponse};
use async_trait::async_trait;
use error::Error;
use tracing::{debug, instrument};
use url::Url;

#[async_trait]
pub trait PhotoSearch: Send + Sync {
  /// Runs one search and returns the regular-size photo urls in provider
  /// order. An empty vector means the query matched nothing usable.
  async fn search(&self, query: &str) -> Result<Vec<String>, Error>;
}

pub struct UnsplashService {
  config: UnsplashConfig,
  client: reqwest::Client,
  base_url: String,
}

impl UnsplashService {
  pub fn new(config: UnsplashConfig) -> Result<Self, Error> {
    let client = reqwest::Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .build()
      .map_err(Error::HttpError)?;

    Ok(Self {
      config,
      client,
      base_url: API_BASE_URL.into(),
    })
  }

  #[cfg(test)]
  pub fn with_base_url(config: UnsplashConfig, base_url: &str) -> Result<Self, Error> {
    let mut service = Self::new(config)?;
    service.base_url = base_url.to_string();
    Ok(service)
  }

  fn build_api_url(&self, query: &str) -> Result<Url, Error> {
    let per_page = RESULTS_PER_QUERY.to_string();
    Url::parse_with_params(
      &self.base_url,
      &[
        ("query", query),
        ("client_id", self.config.access_key.as_str()),
        ("per_page", per_page.as_str()),
      ],
    )
    .map_err(|_| Error::ApiError("Failed to build API URL".into()))
  }
}

#[async_trait]
impl PhotoSearch for UnsplashService {
  #[instrument(skip(self))]
  async fn search(&self, query: &str) -> Result<Vec<String>, Error> {
    let url = self.build_api_url(query)?;
    let response = self.client.get(url).send().await?;

    match response.status() {
      reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(Error::RateLimitExceeded),
      status if status.is_success() => (),
      status => return Err(Error::ApiError(format!("API request failed: {}", status))),
    }

    let data: SearchResponse = response.json().await?;
    let urls = data.regular_urls();
    debug!("Found {} usable photo url(s)", urls.len());

    Ok(urls)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn service() -> UnsplashService {
    UnsplashService::new(UnsplashConfig::new("test-key").unwrap()).unwrap()
  }

  #[test]
  fn api_url_carries_query_credential_and_page_size() {
    let url = service().build_api_url("pemandangan gunung").unwrap();
    let params: Vec<(String, String)> = url
      .query_pairs()
      .map(|(k, v)| (k.into_owned(), v.into_owned()))
      .collect();

    assert_eq!(
      params,
      vec![
        ("query".to_string(), "pemandangan gunung".to_string()),
        ("client_id".to_string(), "test-key".to_string()),
        ("per_page".to_string(), "3".to_string()),
      ]
    );
  }

  #[test]
  fn base_url_can_be_overridden() {
    let config = UnsplashConfig::new("test-key").unwrap();
    let service = UnsplashService::with_base_url(config, "http://127.0.0.1:9/search").unwrap();
    let url = service.build_api_url("sunset").unwrap();
    assert!(url.as_str().starts_with("http://127.0.0.1:9/search?"));
  }

  #[test]
  fn identical_queries_build_identical_urls() {
    let first = service().build_api_url("sunset").unwrap();
    let second = service().build_api_url("sunset").unwrap();
    assert_eq!(first, second);
  }
}
