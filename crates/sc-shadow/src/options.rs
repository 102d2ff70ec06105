//! Shadow shape options and their explicit merge.
//!
//! [`ShadowOptions`] is the complete, immutable parameter set the layer
//! generator reads. [`ShadowOptionsPatch`] is what a user supplies: any
//! subset of the fields, deserialized from camelCase JSON. Merging is
//! explicit — every field the patch defines wins, every other field keeps
//! its default.
//!
//! | Field                | Default                    | Conventional range |
//! |----------------------|----------------------------|--------------------|
//! | `offset`             | `[-0.3, -0.6]`             | `[-1, 1]` each     |
//! | `blur`               | `0.7`                      | `[0, 1]`           |
//! | `spread`             | `-0.5`                     | `[-1, 1]`          |
//! | `layerCount`         | `3`                        | `>= 1`             |
//! | `layerIntervalCurve` | `[[0.5, 0], [0.5, 1]]`     | `[0, 1]` each      |
//!
//! Values are passed to the generator as given. Nothing here clamps or
//! rejects; out-of-range numbers extrapolate through the layer formulas.

use serde::{Deserialize, Serialize};

/// Complete shadow shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowOptions {
    /// Light direction; shadows are cast opposite to it.
    pub offset: [f64; 2],
    pub blur: f64,
    pub spread: f64,
    pub layer_count: usize,
    /// Bezier control points `[[x1, y1], [x2, y2]]`; only `y1`/`y2` affect
    /// layer spacing.
    pub layer_interval_curve: [[f64; 2]; 2],
}

impl Default for ShadowOptions {
    fn default() -> Self {
        Self {
            offset: [-0.3, -0.6],
            blur: 0.7,
            spread: -0.5,
            layer_count: 3,
            layer_interval_curve: [[0.5, 0.0], [0.5, 1.0]],
        }
    }
}

impl ShadowOptions {
    /// `self` with every field `patch` defines replaced.
    #[must_use]
    pub fn merged(self, patch: &ShadowOptionsPatch) -> Self {
        Self {
            offset: patch.offset.unwrap_or(self.offset),
            blur: patch.blur.unwrap_or(self.blur),
            spread: patch.spread.unwrap_or(self.spread),
            layer_count: patch.layer_count.unwrap_or(self.layer_count),
            layer_interval_curve: patch
                .layer_interval_curve
                .unwrap_or(self.layer_interval_curve),
        }
    }

    /// Y components of the two curve control points.
    #[must_use]
    pub const fn curve_y(&self) -> (f64, f64) {
        (
            self.layer_interval_curve[0][1],
            self.layer_interval_curve[1][1],
        )
    }
}

impl From<&ShadowOptionsPatch> for ShadowOptions {
    fn from(patch: &ShadowOptionsPatch) -> Self {
        Self::default().merged(patch)
    }
}

/// A partial [`ShadowOptions`]; `None` means "keep the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadowOptionsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_interval_curve: Option<[[f64; 2]; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_patch_keeps_defaults() {
        let merged = ShadowOptions::default().merged(&ShadowOptionsPatch::default());
        assert_eq!(merged, ShadowOptions::default());
    }

    #[test]
    fn patch_overrides_only_defined_fields() {
        let patch = ShadowOptionsPatch {
            blur: Some(0.2),
            layer_count: Some(5),
            ..ShadowOptionsPatch::default()
        };
        let merged = ShadowOptions::from(&patch);
        assert_eq!(
            merged,
            ShadowOptions {
                blur: 0.2,
                layer_count: 5,
                ..ShadowOptions::default()
            }
        );
    }

    #[test]
    fn merge_does_not_clamp() {
        let patch = ShadowOptionsPatch {
            offset: Some([3.0, -4.0]),
            spread: Some(-9.0),
            ..ShadowOptionsPatch::default()
        };
        let merged = ShadowOptions::from(&patch);
        assert_eq!(merged.offset, [3.0, -4.0]);
        assert!((merged.spread + 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn patch_from_camel_case_json() {
        let patch: ShadowOptionsPatch = serde_json::from_str(
            r#"{ "layerCount": 4, "layerIntervalCurve": [[0, 0.2], [1, 0.8]] }"#,
        )
        .unwrap();
        assert_eq!(patch.layer_count, Some(4));
        assert_eq!(patch.layer_interval_curve, Some([[0.0, 0.2], [1.0, 0.8]]));
        assert_eq!(patch.offset, None);
    }

    #[test]
    fn patch_rejects_wrong_shapes() {
        assert!(serde_json::from_str::<ShadowOptionsPatch>(r#"{ "offset": [1] }"#).is_err());
        assert!(serde_json::from_str::<ShadowOptionsPatch>(r#"{ "blur": "x" }"#).is_err());
    }

    #[test]
    fn options_serialize_camel_case() {
        let json = serde_json::to_value(ShadowOptions::default()).unwrap();
        assert_eq!(json["layerCount"], 3);
        assert_eq!(json["layerIntervalCurve"][1][1], 1.0);
    }

    #[test]
    fn curve_y_reads_second_components() {
        assert_eq!(ShadowOptions::default().curve_y(), (0.0, 1.0));
    }
}
