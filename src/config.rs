// SPDX-License-Identifier: MIT
//
// CLI configuration — the plugin options as a JSON file.
//
//   {
//     "offset": [-0.3, -0.6], "blur": 0.7, "layerCount": 4,
//     "prefix": "sc",
//     "utilities": { "shadow": "--tw-shadow-color" },
//     "generator": { "darken": 30 },
//     "colors": { "sky": { "500": "#0ea5e9" } }
//   }
//
// Every field is optional; anything missing keeps its default.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use sc_shadow::layer::SHADOW_COLOR_PROPERTY;
use sc_shadow::utility::DEFAULT_PREFIX;
use sc_shadow::{
    ColoredShadow, ColoredShadowOptions, Darken, Identity, Palette, ShadowColor,
    ShadowColorGenerator, ShadowColorOptions, ShadowOptions, ShadowOptionsPatch,
    flatten_color_palette,
};

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ─── Generator ──────────────────────────────────────────────────────────────

/// Which shadow color generator to use: `{"darken": 25}` or `"identity"`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GeneratorConfig {
    Darken(f64),
    Identity,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::Darken(Darken::default().amount)
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn build(self) -> Arc<dyn ShadowColorGenerator + Send + Sync> {
        match self {
            Self::Darken(amount) => Arc::new(Darken { amount }),
            Self::Identity => Arc::new(Identity),
        }
    }
}

// ─── Config ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CliConfig {
    #[serde(flatten)]
    pub shadow: ShadowOptionsPatch,
    pub prefix: Option<String>,
    /// Base class → custom property for the color utilities.
    pub utilities: Option<BTreeMap<String, String>>,
    pub generator: GeneratorConfig,
    pub colors: BTreeMap<String, Palette>,
}

impl CliConfig {
    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, [`ConfigError::Json`]
    /// when it is not a valid config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `load` when a path is given, defaults otherwise.
    ///
    /// # Errors
    ///
    /// As [`CliConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    #[must_use]
    pub fn shadow_options(&self) -> ShadowOptions {
        ShadowOptions::default().merged(&self.shadow)
    }

    #[must_use]
    pub fn colored_shadow(&self) -> ColoredShadow {
        ColoredShadow::new(ColoredShadowOptions {
            prefix: self.prefix().to_string(),
            shadow: self.shadow_options(),
        })
    }

    #[must_use]
    pub fn shadow_color(&self) -> ShadowColor {
        let utilities = self.utilities.clone().unwrap_or_else(|| {
            BTreeMap::from([("shadow".to_string(), SHADOW_COLOR_PROPERTY.to_string())])
        });
        ShadowColor::new(ShadowColorOptions {
            utilities,
            prefix: self.prefix().to_string(),
            generator: self.generator.build(),
        })
    }

    /// The configured palette as `name → color`.
    #[must_use]
    pub fn palette(&self) -> BTreeMap<String, String> {
        flatten_color_palette(&self.colors)
    }
}
