use tracing::{Level, warn};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub controller_url: String,
    pub log_level: Level,
}

impl Config {
    const DEFAULT_CONTROLLER_URL: &str = "http://localhost:8080";
    const DEFAULT_LOG_LEVEL: Level = Level::INFO;

    const CONTROLLER_URL_KEY: &str = "FLOW_MANAGER_CONTROLLER_URL";
    const LOG_LEVEL_KEY: &str = "FLOW_MANAGER_LOG_LEVEL";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var(key).ok().or_else(|| match key {
                // wasm builds have no process environment, so fall back to
                // whatever was set when the bundle was compiled
                Self::CONTROLLER_URL_KEY => option_env!("FLOW_MANAGER_CONTROLLER_URL").map(String::from),
                Self::LOG_LEVEL_KEY => option_env!("FLOW_MANAGER_LOG_LEVEL").map(String::from),
                _ => None,
            })
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let controller_url = lookup(Self::CONTROLLER_URL_KEY)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_CONTROLLER_URL.to_string());

        let log_level = match lookup(Self::LOG_LEVEL_KEY) {
            Some(raw) => raw.trim().parse::<Level>().unwrap_or_else(|_| {
                warn!(
                    "Unrecognised {} '{}', using {}",
                    Self::LOG_LEVEL_KEY,
                    raw,
                    Self::DEFAULT_LOG_LEVEL
                );
                Self::DEFAULT_LOG_LEVEL
            }),
            None => Self::DEFAULT_LOG_LEVEL,
        };

        Self {
            controller_url,
            log_level,
        }
    }

    /// Absolute URL of a controller endpoint, e.g. `endpoint("/currentgroups")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.controller_url, path.trim_start_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
