//! Interpreter configuration

use crate::error::{CmdError, CmdResult};

/// Runtime settings, adjusted live via the `config` command
#[derive(Debug, Clone)]
pub struct Config {
    /// Decimal places for numeric display (distance output)
    pub precision: usize,
    /// Issue a render after every successful command
    pub auto_render: bool,
    pub enable_history: bool,
    pub max_history: usize,
    /// Feature flags consumed by collaborators; the interpreter itself
    /// only stores them
    pub enable_physics: bool,
    pub enable_post_processing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            precision: 6,
            auto_render: true,
            enable_history: true,
            max_history: 100,
            enable_physics: false,
            enable_post_processing: false,
        }
    }
}

impl Config {
    /// Set one key from its string value. Booleans accept `true`/`1`;
    /// numbers parse leniently with 0 as the fallback.
    pub fn set(&mut self, key: &str, value: &str) -> CmdResult {
        let as_bool = value == "true" || value == "1";
        let as_num = value.parse::<f64>().unwrap_or(0.0);

        let old = match key {
            "precision" => {
                let old = self.precision.to_string();
                self.precision = as_num.max(0.0) as usize;
                old
            }
            "autoRender" => {
                let old = self.auto_render.to_string();
                self.auto_render = as_bool;
                old
            }
            "enableHistory" => {
                let old = self.enable_history.to_string();
                self.enable_history = as_bool;
                old
            }
            "maxHistory" => {
                let old = self.max_history.to_string();
                self.max_history = as_num.max(0.0) as usize;
                old
            }
            "enablePhysics" => {
                let old = self.enable_physics.to_string();
                self.enable_physics = as_bool;
                old
            }
            "enablePostProcessing" => {
                let old = self.enable_post_processing.to_string();
                self.enable_post_processing = as_bool;
                old
            }
            _ => return Err(CmdError::InvalidConfigKey(key.to_string())),
        };

        let new = self.get(key);
        Ok(format!("Set {key} from {old} to {new}"))
    }

    fn get(&self, key: &str) -> String {
        match key {
            "precision" => self.precision.to_string(),
            "autoRender" => self.auto_render.to_string(),
            "enableHistory" => self.enable_history.to_string(),
            "maxHistory" => self.max_history.to_string(),
            "enablePhysics" => self.enable_physics.to_string(),
            "enablePostProcessing" => self.enable_post_processing.to_string(),
            _ => String::new(),
        }
    }

    /// All keys and values, for `config` with no arguments
    pub fn describe(&self) -> String {
        let mut out = String::from("Current Configuration:\n");
        for key in [
            "precision",
            "autoRender",
            "enableHistory",
            "maxHistory",
            "enablePhysics",
            "enablePostProcessing",
        ] {
            out.push_str(&format!("  {key}: {}\n", self.get(key)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_boolean_keys() {
        let mut config = Config::default();
        let msg = config.set("autoRender", "false").unwrap();
        assert!(!config.auto_render);
        assert_eq!(msg, "Set autoRender from true to false");

        config.set("autoRender", "1").unwrap();
        assert!(config.auto_render);
    }

    #[test]
    fn numeric_keys_parse_leniently() {
        let mut config = Config::default();
        config.set("maxHistory", "2").unwrap();
        assert_eq!(config.max_history, 2);

        config.set("precision", "nonsense").unwrap();
        assert_eq!(config.precision, 0);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let mut config = Config::default();
        assert!(config.set("frobnication", "1").is_err());
    }
}
