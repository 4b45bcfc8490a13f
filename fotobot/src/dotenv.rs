use error::Error;
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();
static DEFAULT_FILENAME: &str = ".env";

#[derive(Debug, Default)]
struct Dotenv {
  vars: HashMap<String, String>,
}

impl Dotenv {
  fn load_from_file<P: AsRef<Path>>(&mut self, filename: Option<P>) -> Result<(), Error> {
    let path = filename.map_or_else(
      || PathBuf::from(DEFAULT_FILENAME),
      |p| p.as_ref().to_path_buf(),
    );

    if !path.exists() {
      return Err(Error::PathNotFound(path));
    }

    let file = File::open(&path)?;
    let reader = BufReader::new(file);

    for (line_num, line) in reader.lines().enumerate() {
      let line = line?;
      let trimmed = line.trim();

      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }

      match parse_line(trimmed) {
        Ok((key, value)) => {
          self.vars.insert(key, value);
        }
        Err(err) => {
          return Err(Error::ConfigError(format!(
            "Error on line {}: {}",
            line_num + 1,
            err
          )));
        }
      }
    }

    Ok(())
  }

  fn set_env_vars(&self) {
    for (key, value) in &self.vars {
      env::set_var(key, value);
    }
  }
}

fn parse_line(line: &str) -> Result<(String, String), String> {
  let (key, value) = line
    .split_once('=')
    .ok_or_else(|| "Invalid format: missing '='".to_string())?;

  let key = key.trim();
  if key.is_empty() {
    return Err("Empty key".to_string());
  }

  let value = value.trim().trim_matches('"').trim_matches('\'');

  Ok((key.to_string(), value.to_string()))
}

/// Loads `.env` into the process environment. Runs at most once.
pub(crate) fn load() -> Result<(), Error> {
  let mut result = Ok(());
  INIT.call_once(|| {
    let mut dotenv = Dotenv::default();
    match dotenv.load_from_file::<&str>(None) {
      Ok(()) => dotenv.set_env_vars(),
      Err(err) => result = Err(err),
    }
  });
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_key_value_pairs() {
    assert_eq!(
      parse_line("TOKEN=abc").unwrap(),
      ("TOKEN".to_string(), "abc".to_string())
    );
    assert_eq!(
      parse_line("TOKEN = \"quoted\"").unwrap(),
      ("TOKEN".to_string(), "quoted".to_string())
    );
  }

  #[test]
  fn rejects_malformed_lines() {
    assert!(parse_line("no-equals-sign").is_err());
    assert!(parse_line("=value").is_err());
  }
}
