//! Application configuration. Logging, chat identity, classroom event queue.

use serde::Deserialize;

/// Default capacity for the classroom events channel. `publish` reports an error instead of
/// blocking once this many events are pending.
pub const DEFAULT_EVENT_BUFFER: usize = 64;

/// Name shown on the operator's own chat lines.
pub const DEFAULT_CHAT_SENDER: &str = "You";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Fallback tracing filter when RUST_LOG is unset. Read from VCAMPUS_LOG_LEVEL.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Sender name used for chat lines typed at the terminal. Read from VCAMPUS_CHAT_SENDER.
    #[serde(default)]
    pub chat_sender: Option<String>,

    /// Print the startup banner. Read from VCAMPUS_SHOW_BANNER.
    #[serde(default)]
    pub show_banner: Option<bool>,

    /// Max classroom events buffered for the event worker. Read from VCAMPUS_EVENT_BUFFER.
    #[serde(default)]
    pub event_buffer: Option<usize>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("VCAMPUS").try_parsing(true));
        if let Ok(path) = std::env::var("VCAMPUS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn log_level_or_default(&self) -> String {
        self.log_level.clone().unwrap_or_else(|| "info".to_string())
    }

    /// Blank values fall back to the default so chat lines always have a sender.
    pub fn chat_sender_or_default(&self) -> String {
        self.chat_sender
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_CHAT_SENDER)
            .to_string()
    }

    pub fn show_banner_or_default(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }

    pub fn event_buffer_or_default(&self) -> usize {
        self.event_buffer
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_EVENT_BUFFER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.log_level_or_default(), "info");
        assert_eq!(cfg.chat_sender_or_default(), "You");
        assert!(cfg.show_banner_or_default());
        assert_eq!(cfg.event_buffer_or_default(), DEFAULT_EVENT_BUFFER);
    }

    #[test]
    fn test_blank_sender_and_zero_buffer_fall_back() {
        let cfg = AppConfig {
            chat_sender: Some("   ".into()),
            event_buffer: Some(0),
            ..Default::default()
        };
        assert_eq!(cfg.chat_sender_or_default(), "You");
        assert_eq!(cfg.event_buffer_or_default(), DEFAULT_EVENT_BUFFER);
    }

    #[test]
    fn test_file_source_overrides() {
        let dir = std::env::temp_dir().join(format!("vcampus-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("campus.toml");
        std::fs::write(&path, "chat_sender = \"Prof\"\nevent_buffer = 8\nshow_banner = false\n")
            .unwrap();

        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from(path.as_path()))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.chat_sender_or_default(), "Prof");
        assert_eq!(cfg.event_buffer_or_default(), 8);
        assert!(!cfg.show_banner_or_default());
        std::fs::remove_dir_all(&dir).ok();
    }
}
