use std::time::Duration;

use crate::error::ConfigError;

/// Desktop browser string the search services accept.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct Config {
    /// User agent sent with every exchange.
    pub user_agent: String,
    /// Maximum time to establish a connection.
    pub timeout_connect: Duration,
    /// Maximum time for a whole exchange, body included.
    pub timeout: Duration,
}

impl Config {
    pub fn sanity_check(&self) -> Result<(), ConfigError> {
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        if self.timeout_connect.is_zero() {
            return Err(ConfigError::ZeroTimeout("timeout_connect"));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("timeout"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout_connect: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        assert_eq!(Config::default().sanity_check(), Ok(()));
    }

    #[test]
    fn rejects_blank_user_agent() {
        let config = Config {
            user_agent: "  ".to_owned(),
            ..Config::default()
        };
        assert_eq!(config.sanity_check(), Err(ConfigError::EmptyUserAgent));
    }

    #[test]
    fn rejects_zero_timeouts() {
        let config = Config {
            timeout: Duration::ZERO,
            ..Config::default()
        };
        assert_eq!(config.sanity_check(), Err(ConfigError::ZeroTimeout("timeout")));

        let config = Config {
            timeout_connect: Duration::ZERO,
            ..Config::default()
        };
        assert_eq!(
            config.sanity_check(),
            Err(ConfigError::ZeroTimeout("timeout_connect"))
        );
    }
}
