use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DEPTH: f32 = 64.0;
pub const DEFAULT_SCALE: f32 = 1.0;
pub const DEFAULT_GAMMA: f32 = 1.5;

/// AO tunables. Every value is floored at zero when it is set,
/// so readers never have to re-check them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "AoConfigFile")]
pub struct AoConfig {
    depth: f32,
    scale: f32,
    gamma: f32,
}

/// On-disk shape of the config, before clamping
#[derive(Deserialize)]
#[serde(default)]
struct AoConfigFile {
    depth: f32,
    scale: f32,
    gamma: f32,
}

impl Default for AoConfigFile {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, scale: DEFAULT_SCALE, gamma: DEFAULT_GAMMA }
    }
}

impl From<AoConfigFile> for AoConfig {
    fn from(file: AoConfigFile) -> Self {
        AoConfig::default()
            .with_depth(file.depth)
            .with_scale(file.scale)
            .with_gamma(file.gamma)
    }
}

impl Default for AoConfig {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, scale: DEFAULT_SCALE, gamma: DEFAULT_GAMMA }
    }
}

impl AoConfig {
    /// Loads a JSON config, e.g. `{ "depth": 96, "gamma": 2.0 }`. Missing keys keep their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read AO config {:?}", path))?;
        let config: AoConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse AO config {:?}", path))?;
        Ok(config)
    }

    /// Probe length in map units
    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    pub fn set_depth(&mut self, depth: f32) {
        self.depth = depth.max(0.0);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.max(0.0);
    }

    pub fn set_gamma(&mut self, gamma: f32) {
        self.gamma = gamma.max(0.0);
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.set_depth(depth);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.set_scale(scale);
        self
    }

    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.set_gamma(gamma);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AoConfig::default();
        assert_eq!(config.depth(), 64.0);
        assert_eq!(config.scale(), 1.0);
        assert_eq!(config.gamma(), 1.5);
    }

    #[test]
    fn test_negative_values_are_floored() {
        let mut config = AoConfig::default();
        config.set_depth(-10.0);
        config.set_scale(-0.5);
        config.set_gamma(-3.0);
        assert_eq!(config.depth(), 0.0);
        assert_eq!(config.scale(), 0.0);
        assert_eq!(config.gamma(), 0.0);
    }

    #[test]
    fn test_setters_replace_whole_value() {
        let config = AoConfig::default().with_depth(128.0).with_depth(32.0);
        assert_eq!(config.depth(), 32.0);
        assert_eq!(config.scale(), DEFAULT_SCALE);
    }

    #[test]
    fn test_json_partial_and_negative() {
        let config: AoConfig = serde_json::from_str(r#"{ "gamma": 2.0, "scale": -1.0 }"#).unwrap();
        assert_eq!(config.depth(), DEFAULT_DEPTH);
        assert_eq!(config.gamma(), 2.0);
        assert_eq!(config.scale(), 0.0, "Negative scale in a file must be floored too");
    }

    #[test]
    fn test_json_empty_object_is_default() {
        let config: AoConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AoConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = AoConfig::load(Path::new("definitely/not/here/ao.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read AO config"));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("hlrad_ao_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "depth": 96.0 }"#).unwrap();
        let config = AoConfig::load(&path);
        std::fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert_eq!(config.depth(), 96.0);
        assert_eq!(config.gamma(), DEFAULT_GAMMA);
    }
}
