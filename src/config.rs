use std::collections::HashMap;
use std::env;
use std::fs;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const CONFIG_FILE_VAR: &str = "CONFIG_FILE";

// KEY=VALUE env-style file: # comments, optional "export " prefix,
// single or double quoted values.
#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if (value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\''))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// Config-file value for `key`, falling back to the process env.
    pub fn prop(&self, key: &str) -> Option<String> {
        self.get(key).or_else(|| env::var(key).ok())
    }
}

/// Environment state resolved once at startup. A missing credential is
/// non-fatal; the chat surfaces it as an offline indicator.
#[derive(Debug, Clone)]
pub struct Settings {
    pub gemini_api_key: Option<String>,
}

impl Settings {
    pub fn load() -> Self {
        let config = match env::var(CONFIG_FILE_VAR) {
            Ok(path) => match AppConfig::from_file(&path) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(%err, %path, "failed to read config file; using environment only");
                    AppConfig::default()
                }
            },
            Err(_) => AppConfig::default(),
        };
        let gemini_api_key = config
            .prop(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty());
        Self { gemini_api_key }
    }
}
