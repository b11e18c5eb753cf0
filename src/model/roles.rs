/// Role presets - default norm and slider caption per restaurant role
///
/// Pure configuration: presets seed the form's defaults and captions and
/// never enter the arithmetic. Built-ins cover the usual roles; a JSON
/// file can replace the whole table at startup.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePreset {
    pub name: String,
    /// Default service norm for this role (items one person handles per shift)
    pub norm: f64,
    /// What the norm means for this role, shown next to the norm field
    pub norm_label: String,
}

impl RolePreset {
    fn new(name: &str, norm: f64, norm_label: &str) -> Self {
        RolePreset {
            name: name.to_string(),
            norm,
            norm_label: norm_label.to_string(),
        }
    }
}

/// Immutable preset table, loaded once at startup
#[derive(Debug, Clone)]
pub struct RoleBook {
    presets: Vec<RolePreset>,
}

impl RoleBook {
    pub fn builtin() -> Self {
        RoleBook {
            presets: vec![
                RolePreset::new("Waiter", 30.0, "Orders handled by one waiter"),
                RolePreset::new("Bartender", 60.0, "Drinks handled by one bartender"),
                RolePreset::new("Host", 80.0, "Guests greeted by one host"),
                RolePreset::new("Chef", 50.0, "Dishes prepared by one cook"),
                RolePreset::new("Dishwasher", 100.0, "Guests whose dishes one person covers"),
                RolePreset::new("Cleaner", 150.0, "Guests covered by one cleaner"),
            ],
        }
    }

    /// Load a replacement preset table from a JSON file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if !Path::new(path).exists() {
            return Err(format!("Roles file not found at {}", path).into());
        }

        let contents = fs::read_to_string(path)?;
        let presets: Vec<RolePreset> = serde_json::from_str(&contents)?;
        if presets.is_empty() {
            return Err(format!("Roles file {} defines no roles", path).into());
        }
        for preset in &presets {
            if !preset.norm.is_finite() || preset.norm <= 0.0 {
                return Err(
                    format!("Role {} has a non-positive norm {}", preset.name, preset.norm).into(),
                );
            }
        }

        Ok(RoleBook { presets })
    }

    pub fn presets(&self) -> &[RolePreset] {
        &self.presets
    }

    pub fn get(&self, index: usize) -> Option<&RolePreset> {
        self.presets.get(index)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }
}
