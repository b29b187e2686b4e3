use std::env;
use std::fmt;

/// Deployment environment, selected through `APP_ENVIRONMENT`. Determines
/// which `appsettings.{env}` file is layered beneath the environment
/// variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Prod,
}

impl Environment {
    /// Reads `APP_ENVIRONMENT`, defaulting to local when unset.
    pub fn from_env() -> Result<Self, String> {
        Self::parse(&env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".into()))
    }

    fn parse(raw: &str) -> Result<Self, String> {
        match raw.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "prod" | "production" => Ok(Self::Prod),
            other => Err(format!(
                "unknown environment '{other}', expected 'local' or 'prod'"
            )),
        }
    }

    /// File-name segment of the matching `appsettings.*` file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "Local",
            Environment::Prod => "Prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
