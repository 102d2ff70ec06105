//! Nested color palettes and their flattening into utility values.
//!
//! Theme palettes nest shades under a color name:
//!
//! ```json
//! { "sky": { "200": "#bae6fd", "500": "#0ea5e9" }, "black": "#000",
//!   "brand": { "DEFAULT": "#f43f5e", "dark": "#9f1239" } }
//! ```
//!
//! Flattening joins the path with `-` and collapses `DEFAULT` into its
//! parent, giving the value names used in class names: `sky-200`,
//! `sky-500`, `black`, `brand`, `brand-dark`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A color value or a named group of palettes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Palette {
    Color(String),
    Group(BTreeMap<String, Palette>),
}

/// Key that maps to the parent name itself when flattening.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Flatten a palette map into `name → color string`.
#[must_use]
pub fn flatten_color_palette(colors: &BTreeMap<String, Palette>) -> BTreeMap<String, String> {
    let mut flat = BTreeMap::new();
    for (name, value) in colors {
        match value {
            Palette::Color(color) => {
                flat.insert(name.clone(), color.clone());
            }
            Palette::Group(group) => {
                for (shade, color) in flatten_color_palette(group) {
                    let key = if shade == DEFAULT_KEY {
                        name.clone()
                    } else {
                        format!("{name}-{shade}")
                    };
                    flat.insert(key, color);
                }
            }
        }
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn palette(json: &str) -> BTreeMap<String, Palette> {
        serde_json::from_str(json).unwrap()
    }

    fn flat(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn flat_colors_pass_through() {
        let p = palette(r##"{ "black": "#000", "white": "#fff" }"##);
        assert_eq!(
            flatten_color_palette(&p),
            flat(&[("black", "#000"), ("white", "#fff")])
        );
    }

    #[test]
    fn shades_are_joined_with_dash() {
        let p = palette(r##"{ "sky": { "200": "#bae6fd", "500": "#0ea5e9" } }"##);
        assert_eq!(
            flatten_color_palette(&p),
            flat(&[("sky-200", "#bae6fd"), ("sky-500", "#0ea5e9")])
        );
    }

    #[test]
    fn default_collapses_into_parent() {
        let p = palette(r##"{ "brand": { "DEFAULT": "#f43f5e", "dark": "#9f1239" } }"##);
        assert_eq!(
            flatten_color_palette(&p),
            flat(&[("brand", "#f43f5e"), ("brand-dark", "#9f1239")])
        );
    }

    #[test]
    fn deep_nesting() {
        let p = palette(r##"{ "a": { "b": { "c": "#123", "DEFAULT": "#456" } } }"##);
        assert_eq!(
            flatten_color_palette(&p),
            flat(&[("a-b", "#456"), ("a-b-c", "#123")])
        );
    }

    #[test]
    fn empty_palette() {
        assert!(flatten_color_palette(&BTreeMap::new()).is_empty());
    }
}
