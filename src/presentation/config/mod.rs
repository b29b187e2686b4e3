mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    GeminiSettings, GroqSettings, LoggingSettings, ServerSettings, Settings, StagingSettings,
};
