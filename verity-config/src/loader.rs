// Policy files

use crate::{ConfigError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Key/value pairs read from a policy file, before they are overlaid
/// onto a [`Policy`](crate::Policy).
pub type PolicyEntries = Map<String, Value>;

/// Policy file syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyFormat {
    Json,
    Toml,
    /// `KEY=value` lines, as in a `.env` file
    Dotenv,
}

impl PolicyFormat {
    /// Pick the syntax from the file name. A file named `.env` (which has
    /// no extension as far as `Path` is concerned) is a dotenv file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.file_name().is_some_and(|name| name == ".env") {
            return Ok(PolicyFormat::Dotenv);
        }

        let ext = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            ConfigError::LoadError(format!("{}: no file extension", path.display()))
        })?;

        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(PolicyFormat::Json),
            "toml" => Ok(PolicyFormat::Toml),
            "env" => Ok(PolicyFormat::Dotenv),
            other => Err(ConfigError::LoadError(format!(
                "{}: unsupported policy format '{}'",
                path.display(),
                other
            ))),
        }
    }

    /// Parse file contents into policy entries
    pub fn parse(self, content: &str) -> Result<PolicyEntries> {
        match self {
            PolicyFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::ParseError(format!("JSON: {}", e))),
            PolicyFormat::Toml => {
                let table: toml::Table = toml::from_str(content)
                    .map_err(|e| ConfigError::ParseError(format!("TOML: {}", e)))?;
                match serde_json::to_value(table) {
                    Ok(Value::Object(entries)) => Ok(entries),
                    Ok(_) => Err(ConfigError::ParseError(
                        "TOML: table did not convert to an object".to_string(),
                    )),
                    Err(e) => Err(ConfigError::ParseError(format!("TOML: {}", e))),
                }
            }
            PolicyFormat::Dotenv => parse_dotenv(content),
        }
    }
}

/// A policy file on disk and the syntax it is written in
#[derive(Debug, Clone)]
pub struct PolicyFile {
    path: PathBuf,
    format: PolicyFormat,
}

impl PolicyFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Ok(Self {
            format: PolicyFormat::from_path(path)?,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> PolicyFormat {
        self.format
    }

    /// Read and parse the file. Parse errors name the file.
    pub fn read(&self) -> Result<PolicyEntries> {
        let content = fs::read_to_string(&self.path)?;
        self.format.parse(&content).map_err(|e| match e {
            ConfigError::ParseError(msg) => {
                ConfigError::ParseError(format!("{}: {}", self.path.display(), msg))
            }
            other => other,
        })
    }
}

// Accepts `export` prefixes and trailing comments on unquoted values.
// Anything else without an `=` is an error so typos do not vanish.
fn parse_dotenv(content: &str) -> Result<PolicyEntries> {
    let mut entries = Map::new();

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").map_or(line, str::trim_start);

        let Some((key, raw)) = line.split_once('=') else {
            return Err(ConfigError::ParseError(format!(
                "line {}: expected KEY=value",
                number + 1
            )));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::ParseError(format!(
                "line {}: empty key",
                number + 1
            )));
        }

        entries.insert(key.to_string(), Value::String(dotenv_value(raw.trim())));
    }

    Ok(entries)
}

fn dotenv_value(raw: &str) -> String {
    for quote in ['"', '\''] {
        if let Some(inner) = raw.strip_prefix(quote)
            && let Some(end) = inner.find(quote)
        {
            return inner[..end].to_string();
        }
    }
    match raw.find(" #") {
        Some(comment) => raw[..comment].trim_end().to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let entries = PolicyFormat::Json
            .parse(r#"{"max_url_length": 4096}"#)
            .unwrap();
        assert_eq!(entries["max_url_length"], 4096);

        assert!(matches!(
            PolicyFormat::Json.parse("[1, 2, 3]"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            max_windows_path_length = 260
            allow_unicode_hosts = false
        "#;

        let entries = PolicyFormat::Toml.parse(toml).unwrap();
        assert_eq!(entries["max_windows_path_length"], 260);
        assert_eq!(entries["allow_unicode_hosts"], false);
    }

    #[test]
    fn test_parse_dotenv() {
        let env = r#"
            VERITY_MAX_URL_LENGTH=4096 # raised for long query strings
            # Comment
            export VERITY_ALLOW_UNICODE_HOSTS="false"
            VERITY_MIN_URL_LENGTH='3'
        "#;

        let entries = PolicyFormat::Dotenv.parse(env).unwrap();
        assert_eq!(entries["VERITY_MAX_URL_LENGTH"], "4096");
        assert_eq!(entries["VERITY_ALLOW_UNICODE_HOSTS"], "false");
        assert_eq!(entries["VERITY_MIN_URL_LENGTH"], "3");
    }

    #[test]
    fn test_dotenv_rejects_bare_words() {
        let result = PolicyFormat::Dotenv.parse("VERITY_MAX_URL_LENGTH=10\noops\n");
        match result {
            Err(ConfigError::ParseError(msg)) => assert_eq!(msg, "line 2: expected KEY=value"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(PolicyFormat::Dotenv.parse("=5").is_err());
    }

    #[test]
    fn test_format_from_path() {
        let format = |p: &str| PolicyFormat::from_path(Path::new(p));
        assert_eq!(format("policy.json").unwrap(), PolicyFormat::Json);
        assert_eq!(format("policy.TOML").unwrap(), PolicyFormat::Toml);
        assert_eq!(format("prod.env").unwrap(), PolicyFormat::Dotenv);
        assert_eq!(format("/srv/app/.env").unwrap(), PolicyFormat::Dotenv);
        assert!(format("policy.yaml").is_err());
        assert!(format("policy").is_err());
    }

    #[test]
    fn test_read_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let file = PolicyFile::open(&path).unwrap();
        assert_eq!(file.format(), PolicyFormat::Json);
        match file.read() {
            Err(ConfigError::ParseError(msg)) => {
                assert!(msg.starts_with(&format!("{}: JSON:", path.display())))
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let missing = PolicyFile::open(dir.path().join("absent.toml")).unwrap();
        assert!(matches!(missing.read(), Err(ConfigError::IoError(_))));
    }
}
