// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

/// Body of a `/search/photos` response. Only the fields the bot consumes
/// are modeled. The results list is required; a body without one is a
/// malformed response, not an empty one.
#[derive(Debug, Deserialize, Clone)]
pub struct SearchResponse {
  pub results: Vec<Photo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Photo {
  pub urls: Option<PhotoUrls>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PhotoUrls {
  pub regular: Option<String>,
}

impl SearchResponse {
  /// Extracts the regular-size url of every photo, in provider order.
  /// Entries without a usable url are skipped.
  pub fn regular_urls(self) -> Vec<String> {
    self
      .results
      .into_iter()
      .filter_map(|photo| photo.urls.and_then(|urls| urls.regular))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn extracts_urls_in_order_and_skips_malformed_entries() {
    let raw = r#"{
      "results": [
        {"urls": {"regular": "A"}},
        {"urls": {"regular": "B"}},
        {"id": "no-urls-field"}
      ]
    }"#;

    let response: SearchResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(response.regular_urls(), vec!["A", "B"]);
  }

  #[test]
  fn empty_results_list_means_no_urls() {
    let response: SearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
    assert!(response.regular_urls().is_empty());
  }

  #[test]
  fn body_without_results_list_fails_to_parse() {
    assert!(serde_json::from_str::<SearchResponse>("{}").is_err());
  }

  #[test]
  fn entry_with_urls_but_no_regular_size_is_skipped() {
    let raw = r#"{"results": [{"urls": {"small": "S"}}]}"#;
    let response: SearchResponse = serde_json::from_str(raw).unwrap();
    assert!(response.regular_urls().is_empty());
  }
}
