//! Utility registration — class names and values mapped onto the generators.
//!
//! Two utility families, both configured with a prefix (default `sc`):
//!
//! | Utility                  | Example              | Declarations                          |
//! |--------------------------|----------------------|---------------------------------------|
//! | `shadow-{prefix}-{n}`    | `shadow-sc-20`       | `box-shadow` at elevation `n / 100`   |
//! | `{base}-{prefix}-{color}`| `shadow-sc-sky-400`  | `{prop}`, `{prop}-rgb`, `{prop}-alpha`|
//!
//! The color utility's base class and custom property come from a map,
//! `shadow → --tw-shadow-color` by default, so the same derivation can feed
//! other properties.
//!
//! Values that do not resolve (non-numeric elevations, unparseable colors)
//! produce no declarations; they are skipped, not reported.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::css::{Declaration, Declarations, Rule};
use crate::format::number;
use crate::layer::{SHADOW_COLOR_PROPERTY, box_shadow};
use crate::options::ShadowOptions;
use crate::shadow_color::{Darken, ShadowColorGenerator, generate_shadow_color};

/// Default class-value prefix.
pub const DEFAULT_PREFIX: &str = "sc";

/// Elevation values the colored shadow utility ships with.
pub const PRESET_VALUES: [u32; 12] = [1, 5, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

// ─── Colored Shadow ──────────────────────────────────────────────────────────

/// Options for the `shadow-{prefix}-{n}` utility.
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredShadowOptions {
    pub prefix: String,
    pub shadow: ShadowOptions,
}

impl Default for ColoredShadowOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            shadow: ShadowOptions::default(),
        }
    }
}

/// The elevation utility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColoredShadow {
    options: ColoredShadowOptions,
}

impl ColoredShadow {
    #[must_use]
    pub const fn new(options: ColoredShadowOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ColoredShadowOptions {
        &self.options
    }

    /// `shadow-{prefix}`.
    #[must_use]
    pub fn utility_name(&self) -> String {
        format!("shadow-{}", self.options.prefix)
    }

    /// Theme values: `1, 5, 10, 20, …, 100`.
    #[must_use]
    pub const fn theme_values() -> &'static [u32] {
        &PRESET_VALUES
    }

    /// Declarations for a class value, `"20"` → elevation `0.2`.
    ///
    /// Returns `None` when the value is not a number.
    #[must_use]
    pub fn resolve(&self, value: &str) -> Option<Declarations> {
        let Ok(n) = value.trim().parse::<f64>() else {
            debug!(value, "ignoring non-numeric shadow value");
            return None;
        };
        Some(vec![Declaration::new(
            "box-shadow",
            box_shadow(n / 100.0, &self.options.shadow),
        )])
    }

    /// One rule per theme value.
    #[must_use]
    pub fn rules(&self) -> Vec<Rule> {
        let name = self.utility_name();
        Self::theme_values()
            .iter()
            .filter_map(|v| {
                let declarations = self.resolve(&v.to_string())?;
                Some(Rule::new(format!("{name}-{v}"), declarations))
            })
            .collect()
    }
}

// ─── Shadow Color ────────────────────────────────────────────────────────────

/// Options for the `{base}-{prefix}-{color}` utilities.
#[derive(Clone)]
pub struct ShadowColorOptions {
    /// Base class name → custom property name.
    pub utilities: BTreeMap<String, String>,
    pub prefix: String,
    pub generator: Arc<dyn ShadowColorGenerator + Send + Sync>,
}

impl Default for ShadowColorOptions {
    fn default() -> Self {
        Self {
            utilities: BTreeMap::from([("shadow".to_string(), SHADOW_COLOR_PROPERTY.to_string())]),
            prefix: DEFAULT_PREFIX.to_string(),
            generator: Arc::new(Darken::default()),
        }
    }
}

impl fmt::Debug for ShadowColorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShadowColorOptions")
            .field("utilities", &self.utilities)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

/// The shadow color utilities.
#[derive(Debug, Clone, Default)]
pub struct ShadowColor {
    options: ShadowColorOptions,
}

impl ShadowColor {
    #[must_use]
    pub const fn new(options: ShadowColorOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ShadowColorOptions {
        &self.options
    }

    /// `{base}-{prefix}` for every configured base class, in map order.
    #[must_use]
    pub fn utility_names(&self) -> Vec<String> {
        self.options
            .utilities
            .keys()
            .map(|base| format!("{base}-{}", self.options.prefix))
            .collect()
    }

    /// The custom property a utility name writes, if it is one of ours.
    #[must_use]
    pub fn property_for(&self, utility: &str) -> Option<&str> {
        let base = utility
            .strip_suffix(&self.options.prefix)?
            .strip_suffix('-')?;
        self.options.utilities.get(base).map(String::as_str)
    }

    /// Declarations for `utility` applied to a color string.
    ///
    /// Empty when the utility is unknown or the color does not parse.
    #[must_use]
    pub fn resolve(&self, utility: &str, color: &str) -> Declarations {
        let Some(property) = self.property_for(utility) else {
            return Vec::new();
        };
        let Some(generated) = generate_shadow_color(color, self.options.generator.as_ref()) else {
            return Vec::new();
        };
        vec![
            Declaration::new(property, generated.color),
            Declaration::new(format!("{property}-rgb"), generated.rgb),
            Declaration::new(format!("{property}-alpha"), number(generated.alpha)),
        ]
    }

    /// One rule per utility and palette entry; entries that do not parse
    /// are dropped.
    #[must_use]
    pub fn rules(&self, colors: &BTreeMap<String, String>) -> Vec<Rule> {
        let mut rules = Vec::new();
        for utility in self.utility_names() {
            for (name, color) in colors {
                let declarations = self.resolve(&utility, color);
                if declarations.is_empty() {
                    continue;
                }
                rules.push(Rule::new(format!("{utility}-{name}"), declarations));
            }
        }
        rules
    }
}
