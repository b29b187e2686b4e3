/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub default_level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn new(
        environment: impl Into<String>,
        default_level: impl Into<String>,
        json_format: bool,
    ) -> Self {
        Self {
            environment: environment.into(),
            default_level: default_level.into(),
            json_format,
        }
    }

    /// Fallback filter used when `RUST_LOG` is unset. The configured level
    /// applies globally; this crate and tower-http stay at debug.
    pub fn default_filter(&self) -> String {
        format!(
            "{},lexrelay=debug,tower_http=debug",
            self.default_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_configured_level_when_building_fallback_filter_then_level_leads() {
        let config = TracingConfig::new("Local", "warn", false);
        assert_eq!(
            config.default_filter(),
            "warn,lexrelay=debug,tower_http=debug"
        );
    }
}
