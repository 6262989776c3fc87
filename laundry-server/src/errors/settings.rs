#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid server host: {0}")]
    InvalidHost(String),

    #[error("Poll interval must be greater than zero")]
    ZeroInterval,

    #[error("Invalid UTC offset: {0} hours")]
    InvalidOffset(i8),
}
