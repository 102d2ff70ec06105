// SPDX-License-Identifier: MIT
//
// scgen — colored multi-layer shadows from the command line.
//
// This is the binary that wires the two crates to a terminal:
//
//   sc-color  → CSS color parsing, RGB/HSL/HSV conversion
//   sc-shadow → layer math, shadow colors, utilities, tuner helpers
//
// Every subcommand is a pure function from (config, arguments) to the text
// it prints, so `run` returns a String and `main` only does I/O:
//
//   args → Cli::parse → CliConfig::load_or_default → run → stdout
//                                                     └──→ stderr + exit 1
//
// Class values follow the utility syntax: presets are bare numbers
// (`shadow-sc-20`), anything else goes in brackets with `_` for spaces
// (`shadow-sc-[37]`, `shadow-sc-[rgb(0_0_0_/_0.5)]`).

mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use regex::Regex;
use thiserror::Error;
use tracing::{Level, debug};

use sc_shadow::css::{Declarations, Rule, Stylesheet};
use sc_shadow::tuner::{class_snippet, config_snippet, curve_path, preview_style};
use sc_color::{ParseColorError, parse_color};
use sc_shadow::{LayerCurve, UnitPoint, derive_shadow_color};

use crate::config::{CliConfig, ConfigError};

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "scgen", version)]
#[command(about = "Colored multi-layer box-shadow generator")]
struct Cli {
    /// JSON file with plugin options (offset, blur, spread, layerCount, …)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log skipped values and generated layers to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the box-shadow declaration for a class value (`20`, `[37]`)
    Shadow { value: String },
    /// Derive a shadow color and print it as JSON
    Color {
        color: String,
        /// Keep the color as is instead of darkening it
        #[arg(long)]
        identity: bool,
    },
    /// Print the stylesheet for every preset elevation
    Css {
        /// Also emit color utilities for the configured palette
        #[arg(long)]
        colors: bool,
    },
    /// Resolve a full class name to its declarations
    Class { class: String },
    /// Print the preview tile style at elevation z (0 to 1)
    Preview {
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },
    /// Print the class and config snippets for elevation z
    Snippet {
        #[arg(allow_negative_numbers = true)]
        z: f64,
        /// Color class to pair with the elevation class
        #[arg(long, value_name = "CLASS")]
        color_class: Option<String>,
    },
    /// Print the SVG path of the configured layer curve
    Curve,
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid class pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("not a shadow value: '{0}'")]
    ShadowValue(String),
    #[error("not a color: '{input}': {source}")]
    Color {
        input: String,
        #[source]
        source: ParseColorError,
    },
    #[error("unknown class: '{0}'")]
    UnknownClass(String),
}

/// Parse user color input, keeping the parser's reason on failure.
fn parse_input_color(input: &str) -> Result<sc_color::Color, CliError> {
    parse_color(input).map_err(|source| CliError::Color {
        input: input.to_string(),
        source,
    })
}

// ─── Class Values ───────────────────────────────────────────────────────────

/// Splits class values into preset names and bracketed arbitrary values.
struct ClassValues {
    arbitrary: Regex,
}

impl ClassValues {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            arbitrary: Regex::new(r"^\[(?<value>[^\]]+)\]$")?,
        })
    }

    /// The bracket contents with `_` read as a space, if `value` is
    /// bracketed.
    fn arbitrary(&self, value: &str) -> Option<String> {
        let caps = self.arbitrary.captures(value)?;
        Some(caps["value"].replace('_', " "))
    }

    /// Arbitrary contents, or the value itself.
    fn unwrap_value(&self, value: &str) -> String {
        self.arbitrary(value).unwrap_or_else(|| value.to_string())
    }
}

/// Resolve a full class name against both utilities.
///
/// Elevation wins when the value is numeric; otherwise the value is a
/// palette name or a bracketed color.
fn resolve_class(
    config: &CliConfig,
    values: &ClassValues,
    class: &str,
) -> Result<Declarations, CliError> {
    let colored_shadow = config.colored_shadow();
    let elevation = class
        .strip_prefix(&format!("{}-", colored_shadow.utility_name()))
        .and_then(|value| colored_shadow.resolve(&values.unwrap_value(value)));
    if let Some(declarations) = elevation {
        return Ok(declarations);
    }

    let shadow_color = config.shadow_color();
    let palette = config.palette();
    for utility in shadow_color.utility_names() {
        let Some(value) = class.strip_prefix(&format!("{utility}-")) else {
            continue;
        };
        let color = match values.arbitrary(value) {
            Some(color) => color,
            None => match palette.get(value) {
                Some(color) => color.clone(),
                None => continue,
            },
        };
        parse_input_color(&color)?;
        return Ok(shadow_color.resolve(&utility, &color));
    }

    Err(CliError::UnknownClass(class.to_string()))
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn run(command: &Command, config: &CliConfig) -> Result<String, CliError> {
    let values = ClassValues::new()?;
    let options = config.shadow_options();

    match command {
        Command::Shadow { value } => {
            let declarations = config
                .colored_shadow()
                .resolve(&values.unwrap_value(value))
                .ok_or_else(|| CliError::ShadowValue(value.clone()))?;
            Ok(render_declarations(&declarations))
        }
        Command::Color { color, identity } => {
            let original = parse_input_color(color)?;
            let generated = if *identity {
                derive_shadow_color(original, &sc_shadow::Identity)
            } else {
                derive_shadow_color(original, config.generator.build().as_ref())
            };
            Ok(serde_json::to_string_pretty(&generated)?)
        }
        Command::Css { colors } => {
            let mut sheet = Stylesheet::new();
            sheet.extend(config.colored_shadow().rules());
            if *colors {
                let palette = config.palette();
                if palette.is_empty() {
                    debug!("no colors configured, skipping color utilities");
                }
                sheet.extend(config.shadow_color().rules(&palette));
            }
            Ok(sheet.to_string().trim_end().to_string())
        }
        Command::Class { class } => {
            let declarations = resolve_class(config, &values, class)?;
            Ok(Rule::new(class.clone(), declarations).to_string())
        }
        Command::Preview { z } => Ok(preview_style(*z, &options).to_string()),
        Command::Snippet { z, color_class } => {
            let prefix = config.prefix();
            let color_class = color_class
                .clone()
                .unwrap_or_else(|| format!("shadow-{prefix}-black"));
            Ok(format!(
                "{}\n\n{}",
                class_snippet(&color_class, prefix, *z),
                config_snippet(&options).trim_end()
            ))
        }
        Command::Curve => {
            let [p1, p2] = options.layer_interval_curve;
            let curve = LayerCurve::new(UnitPoint::from(p1), UnitPoint::from(p2));
            Ok(curve_path(curve))
        }
    }
}

fn render_declarations(declarations: &Declarations) -> String {
    declarations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ─── Entry Point ────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = CliConfig::load_or_default(cli.config.as_deref())
        .map_err(CliError::from)
        .and_then(|config| run(&cli.command, &config));

    match output {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("scgen: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sc_shadow::{ShadowOptions, box_shadow};

    fn config(json: &str) -> CliConfig {
        serde_json::from_str(json).unwrap()
    }

    fn run_default(command: Command) -> Result<String, CliError> {
        run(&command, &CliConfig::default())
    }

    // ── Arguments ─────────────────────────────────────────────────────────

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["scgen", "shadow", "20", "-v", "--config", "x.json"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.json")));
        assert!(matches!(cli.command, Command::Shadow { ref value } if value == "20"));
    }

    #[test]
    fn parses_negative_elevation() {
        let cli = Cli::try_parse_from(["scgen", "preview", "-0.5"]).unwrap();
        assert!(matches!(cli.command, Command::Preview { z } if (z + 0.5).abs() < f64::EPSILON));
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    // ── Class values ──────────────────────────────────────────────────────

    #[test]
    fn arbitrary_values() {
        let values = ClassValues::new().unwrap();
        assert_eq!(values.arbitrary("[37]").as_deref(), Some("37"));
        assert_eq!(
            values.arbitrary("[rgb(0_0_0_/_0.5)]").as_deref(),
            Some("rgb(0 0 0 / 0.5)")
        );
        assert_eq!(values.arbitrary("37"), None);
        assert_eq!(values.arbitrary("[]"), None);
        assert_eq!(values.unwrap_value("20"), "20");
    }

    // ── Commands ──────────────────────────────────────────────────────────

    #[test]
    fn shadow_preset_value() {
        let out = run_default(Command::Shadow { value: "10".into() }).unwrap();
        assert_eq!(
            out,
            format!("box-shadow: {};", box_shadow(0.1, &ShadowOptions::default()))
        );
    }

    #[test]
    fn shadow_arbitrary_value() {
        let out = run_default(Command::Shadow { value: "[37]".into() }).unwrap();
        assert_eq!(
            out,
            format!("box-shadow: {};", box_shadow(0.37, &ShadowOptions::default()))
        );
    }

    #[test]
    fn shadow_rejects_non_numbers() {
        let err = run_default(Command::Shadow { value: "huge".into() }).unwrap_err();
        assert_eq!(err.to_string(), "not a shadow value: 'huge'");
    }

    #[test]
    fn shadow_uses_configured_options() {
        let cfg = config(r#"{ "layerCount": 1 }"#);
        let out = run(&Command::Shadow { value: "100".into() }, &cfg).unwrap();
        assert_eq!(out.matches("var(--tw-shadow-color-rgb)").count(), 1);
    }

    #[test]
    fn color_default_generator() {
        let out = run_default(Command::Color {
            color: "#fff".into(),
            identity: false,
        })
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["rgb"], "191 191 191");
        assert_eq!(json["color"], "rgb(191 191 191 / 1)");
    }

    #[test]
    fn color_identity_flag() {
        let out = run_default(Command::Color {
            color: "rgba(255, 255, 255, 0.5)".into(),
            identity: true,
        })
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["rgb"], "255 255 255");
        assert_eq!(json["alpha"], 0.5);
    }

    #[test]
    fn color_configured_generator() {
        let cfg = config(r#"{ "generator": "identity" }"#);
        let out = run(
            &Command::Color {
                color: "#fff".into(),
                identity: false,
            },
            &cfg,
        )
        .unwrap();
        assert!(out.contains("\"255 255 255\""));
    }

    #[test]
    fn color_rejects_invalid() {
        let err = run_default(Command::Color {
            color: "not-a-color".into(),
            identity: false,
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Color { .. }));
        assert_eq!(
            err.to_string(),
            "not a color: 'not-a-color': unsupported color syntax `not-a-color`"
        );
    }

    #[test]
    fn color_reports_parser_reason() {
        let err = run_default(Command::Color {
            color: "#12".into(),
            identity: false,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "not a color: '#12': invalid hex color `#12`");
    }

    #[test]
    fn color_named_keyword() {
        let out = run_default(Command::Color {
            color: "red".into(),
            identity: true,
        })
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["rgb"], "255 0 0");
    }

    #[test]
    fn css_has_every_preset() {
        let out = run_default(Command::Css { colors: false }).unwrap();
        assert_eq!(out.matches("box-shadow:").count(), 12);
        assert!(out.starts_with(".shadow-sc-1 {"));
        assert!(out.ends_with('}'));
    }

    #[test]
    fn css_with_colors() {
        let cfg = config(r##"{ "colors": { "white": "#fff", "current": "currentColor" } }"##);
        let out = run(&Command::Css { colors: true }, &cfg).unwrap();
        assert!(out.contains(".shadow-sc-white {\n  --tw-shadow-color: rgb(191 191 191 / 1);"));
        assert!(!out.contains("shadow-sc-current"));
    }

    #[test]
    fn class_elevation() {
        let out = run_default(Command::Class {
            class: "shadow-sc-[37]".into(),
        })
        .unwrap();
        assert!(out.starts_with(".shadow-sc-\\[37\\] {\n  box-shadow: "));
    }

    #[test]
    fn class_palette_color() {
        let cfg = config(r##"{ "colors": { "sky": { "500": "#0ea5e9" } } }"##);
        let out = run(
            &Command::Class {
                class: "shadow-sc-sky-500".into(),
            },
            &cfg,
        )
        .unwrap();
        assert!(out.contains("--tw-shadow-color-alpha: 1;"));
    }

    #[test]
    fn class_arbitrary_color() {
        let out = run_default(Command::Class {
            class: "shadow-sc-[#fff]".into(),
        })
        .unwrap();
        assert_eq!(
            out,
            ".shadow-sc-\\[\\#fff\\] {\n  --tw-shadow-color: rgb(191 191 191 / 1);\n  --tw-shadow-color-rgb: 191 191 191;\n  --tw-shadow-color-alpha: 1;\n}"
        );
    }

    #[test]
    fn class_unknown() {
        let err = run_default(Command::Class {
            class: "ring-sc-20".into(),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown class: 'ring-sc-20'");
    }

    #[test]
    fn class_invalid_arbitrary_color() {
        let err = run_default(Command::Class {
            class: "shadow-sc-[nope]".into(),
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "not a color: 'nope': unsupported color syntax `nope`"
        );
    }

    #[test]
    fn class_arbitrary_named_color() {
        let out = run_default(Command::Class {
            class: "shadow-sc-[red]".into(),
        })
        .unwrap();
        assert!(out.contains("--tw-shadow-color-rgb: 191 0 0;"));
    }

    #[test]
    fn preview_output() {
        let out = run_default(Command::Preview { z: 0.0 }).unwrap();
        assert!(out.ends_with("transform: translate(0.00px, 0.00px) scale(1);"));
    }

    #[test]
    fn snippet_output() {
        let out = run_default(Command::Snippet {
            z: 0.2,
            color_class: None,
        })
        .unwrap();
        assert!(out.starts_with(
            "className=\"shadow-sc-black shadow-sc-20\"\n\n// tailwind.config.js"
        ));
        assert!(out.contains("layerCount: 3"));
    }

    #[test]
    fn curve_output() {
        assert_eq!(
            run_default(Command::Curve).unwrap(),
            "M 0 0.5 C 0.5 0.5, 0.5 0, 1 0"
        );
    }

    #[test]
    fn curve_clamps_configured_points() {
        let cfg = config(r#"{ "layerIntervalCurve": [[0.2, 1.5], [2, 0.5]] }"#);
        assert_eq!(
            run(&Command::Curve, &cfg).unwrap(),
            "M 0 0.5 C 0.2 0, 1 0.25, 1 0"
        );
    }
}
