use std::sync::Once;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "APE_LOG";

/// Logger configuration.
///
/// Filter precedence: `env_filter`, then `APE_LOG`, then `RUST_LOG`, then
/// `default_level`. Filters use the `env_logger` syntax
/// (e.g. "info", "ape_engine=trace,ape_demo=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter string to apply, if any.
    fn resolve_filter(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.env_filter
            .clone()
            .or_else(|| lookup(LOG_ENV))
            .or_else(|| lookup("RUST_LOG"))
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls (and calls after another logger was installed)
/// are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolve_filter(|key| std::env::var(key).ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    }

    #[test]
    fn explicit_filter_wins() {
        let cfg = LoggingConfig { env_filter: Some("warn".into()), ..LoggingConfig::default() };
        assert_eq!(cfg.resolve_filter(env(&[("APE_LOG", "trace")])), Some("warn".into()));
    }

    #[test]
    fn ape_log_before_rust_log() {
        let cfg = LoggingConfig::default();
        let vars = [("RUST_LOG", "info"), ("APE_LOG", "ape_engine=trace")];
        assert_eq!(cfg.resolve_filter(env(&vars)), Some("ape_engine=trace".into()));
        assert_eq!(cfg.resolve_filter(env(&[("RUST_LOG", "info")])), Some("info".into()));
    }

    #[test]
    fn no_filter_falls_back_to_level() {
        assert_eq!(LoggingConfig::default().resolve_filter(env(&[])), None);
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
