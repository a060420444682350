use std::sync::LazyLock;

use derive_from_env::FromEnv;

use crate::severity::Severity;

/// Defaults read from `CONLOG_*` environment variables.
#[derive(FromEnv, Debug, Clone)]
#[from_env(prefix = "CONLOG")]
#[allow(non_snake_case)]
pub struct ConlogConfig {
    /// Threshold used until the sink is configured.
    #[from_env(default = "INFO")]
    pub LEVEL: Severity,
    /// Send lines above INFO to stderr.
    #[from_env(default = "false")]
    pub USE_STDERR: bool,
    /// Colour the severity column.
    #[from_env(default = "false")]
    pub COLOR: bool,
}

impl Default for ConlogConfig {
    fn default() -> Self {
        Self {
            LEVEL: Severity::Info,
            USE_STDERR: false,
            COLOR: false,
        }
    }
}

/// Read once, on first use.
///
/// If any variable fails to parse, every field falls back to its built-in
/// default, including the ones that were valid.
pub static CONLOG_CONFIG: LazyLock<ConlogConfig> =
    LazyLock::new(|| ConlogConfig::from_env().unwrap_or_default());

#[test]
fn test_default_config() {
    let config = ConlogConfig::default();
    assert_eq!(config.LEVEL, Severity::Info);
    assert!(!config.USE_STDERR);
    assert!(!config.COLOR);
}
