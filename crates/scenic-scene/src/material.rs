//! Material specifications, presets, and material-spec resolution

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Shading model of a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShadingModel {
    Basic,
    Lambert,
    Phong,
    Standard,
    Physical,
    Toon,
}

impl ShadingModel {
    /// Resolve a model by name; unknown names fall back to `Basic`
    pub fn from_name(name: &str) -> Self {
        match name {
            "lambert" => ShadingModel::Lambert,
            "phong" => ShadingModel::Phong,
            "standard" => ShadingModel::Standard,
            "physical" => ShadingModel::Physical,
            "toon" => ShadingModel::Toon,
            _ => ShadingModel::Basic,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShadingModel::Basic => "basic",
            ShadingModel::Lambert => "lambert",
            ShadingModel::Phong => "phong",
            ShadingModel::Standard => "standard",
            ShadingModel::Physical => "physical",
            ShadingModel::Toon => "toon",
        }
    }
}

/// A complete material description for one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub shading: ShadingModel,
    pub color: Color,
    pub opacity: f32,
    pub transparent: bool,
    pub wireframe: bool,
    /// URL of a texture applied via the texture command, if any
    pub texture: Option<String>,
    /// Preset name this material came from, for info output
    pub preset: Option<String>,
}

impl Default for MaterialSpec {
    fn default() -> Self {
        MaterialSpec {
            shading: ShadingModel::Basic,
            color: Color::WHITE,
            opacity: 1.0,
            transparent: false,
            wireframe: false,
            texture: None,
            preset: None,
        }
    }
}

impl MaterialSpec {
    fn colored(shading: ShadingModel, color: Color) -> Self {
        MaterialSpec {
            shading,
            color,
            ..Default::default()
        }
    }

    /// Look up a material preset by name.
    ///
    /// Single letters are basic colored materials (w r g b y m c k),
    /// shading-model names give a white material of that model, and
    /// `wireframe`, `transparent`, and `glass` are the special presets.
    pub fn preset(name: &str) -> Option<Self> {
        let mut mat = match name {
            "w" => Self::colored(ShadingModel::Basic, Color::WHITE),
            "r" => Self::colored(ShadingModel::Basic, Color::RED),
            "g" => Self::colored(ShadingModel::Basic, Color::GREEN),
            "b" => Self::colored(ShadingModel::Basic, Color::BLUE),
            "y" => Self::colored(ShadingModel::Basic, Color::YELLOW),
            "m" => Self::colored(ShadingModel::Basic, Color::MAGENTA),
            "c" => Self::colored(ShadingModel::Basic, Color::CYAN),
            "k" => Self::colored(ShadingModel::Basic, Color::BLACK),
            "basic" => Self::colored(ShadingModel::Basic, Color::WHITE),
            "lambert" => Self::colored(ShadingModel::Lambert, Color::WHITE),
            "phong" => Self::colored(ShadingModel::Phong, Color::WHITE),
            "standard" => Self::colored(ShadingModel::Standard, Color::WHITE),
            "physical" => Self::colored(ShadingModel::Physical, Color::WHITE),
            "wireframe" => MaterialSpec {
                wireframe: true,
                ..Default::default()
            },
            "transparent" => MaterialSpec {
                transparent: true,
                opacity: 0.5,
                ..Default::default()
            },
            "glass" => MaterialSpec {
                shading: ShadingModel::Physical,
                transparent: true,
                opacity: 0.1,
                ..Default::default()
            },
            _ => return None,
        };
        mat.preset = Some(name.to_string());
        Some(mat)
    }

    /// Number of named presets, for stats output
    pub const PRESET_COUNT: usize = 16;

    /// Resolve a material spec string.
    ///
    /// Order: preset name, then `#RRGGBB`, then `0xRRGGBB`, then a colon
    /// expression `type:color:opacity` with each section optional past the
    /// first. Anything unrecognized yields the default white basic material.
    pub fn resolve(spec: &str) -> Self {
        if let Some(preset) = Self::preset(spec) {
            return preset;
        }
        if spec.starts_with('#') || spec.starts_with("0x") || spec.starts_with("0X") {
            if let Some(color) = Color::parse(spec) {
                return Self::colored(ShadingModel::Basic, color);
            }
        }
        if spec.contains(':') {
            return Self::resolve_colon_expr(spec);
        }
        MaterialSpec::default()
    }

    fn resolve_colon_expr(spec: &str) -> Self {
        let mut sections = spec.split(':');
        let shading = ShadingModel::from_name(sections.next().unwrap_or(""));
        let color = sections
            .next()
            .and_then(Color::parse)
            .unwrap_or(Color::WHITE);

        let mut mat = Self::colored(shading, color);
        if let Some(raw) = sections.next() {
            mat.opacity = raw.parse().unwrap_or(1.0);
            mat.transparent = true;
        }
        mat
    }

    /// Name shown by info output: the preset it came from, or the
    /// shading model
    pub fn describe(&self) -> &str {
        match &self.preset {
            Some(name) => name,
            None => self.shading.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_presets_are_colored_basic() {
        let mat = MaterialSpec::resolve("r");
        assert_eq!(mat.shading, ShadingModel::Basic);
        assert_eq!(mat.color, Color::RED);
        assert_eq!(mat.preset.as_deref(), Some("r"));
    }

    #[test]
    fn glass_preset_is_transparent_physical() {
        let mat = MaterialSpec::resolve("glass");
        assert_eq!(mat.shading, ShadingModel::Physical);
        assert!(mat.transparent);
        assert!((mat.opacity - 0.1).abs() < 1e-6);
    }

    #[test]
    fn hex_spec_colors_a_basic_material() {
        let mat = MaterialSpec::resolve("#ff0000");
        assert_eq!(mat.color, Color::RED);
        assert!(mat.preset.is_none());
    }

    #[test]
    fn colon_expr_sets_model_color_and_opacity() {
        let mat = MaterialSpec::resolve("phong:red:0.5");
        assert_eq!(mat.shading, ShadingModel::Phong);
        assert_eq!(mat.color, Color::RED);
        assert!(mat.transparent);
        assert!((mat.opacity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn colon_expr_missing_sections_default() {
        let mat = MaterialSpec::resolve("standard:");
        assert_eq!(mat.shading, ShadingModel::Standard);
        assert_eq!(mat.color, Color::WHITE);
        assert!(!mat.transparent);
    }

    #[test]
    fn unrecognized_spec_falls_back_to_white_basic() {
        let mat = MaterialSpec::resolve("sparkly");
        assert_eq!(mat, MaterialSpec::default());
    }
}
