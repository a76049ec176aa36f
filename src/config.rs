use log::Level;

/// Page-level settings read from the query string, e.g. `?level=1&log=debug&debug=1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub start_level: usize,
    pub log_level: Level,
    pub diagnostics: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_level: 0,
            log_level: Level::Info,
            diagnostics: false,
        }
    }
}

impl GameConfig {
    /// Unknown keys and unparseable values keep their defaults.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        let query = search.strip_prefix('?').unwrap_or(search);

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "level" => {
                    if let Ok(index) = value.parse() {
                        config.start_level = index;
                    }
                }
                "log" => {
                    if let Ok(level) = value.parse() {
                        config.log_level = level;
                    }
                }
                "debug" => config.diagnostics = value == "1",
                _ => {}
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        assert_eq!(GameConfig::from_query(""), GameConfig::default());
        assert_eq!(GameConfig::from_query("?"), GameConfig::default());
    }

    #[test]
    fn test_all_keys() {
        let config = GameConfig::from_query("?level=1&log=debug&debug=1");
        assert_eq!(config.start_level, 1);
        assert_eq!(config.log_level, Level::Debug);
        assert!(config.diagnostics);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = GameConfig::from_query("?level=two&log=loud&debug=yes&nosw=1");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        assert_eq!(GameConfig::from_query("log=WARN").log_level, Level::Warn);
    }
}
