//! Light source specifications
//!
//! Position and orientation live on the owning entity's transform; the
//! spec holds only the parameters specific to each light kind.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Parameters of one light source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LightSpec {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Directional {
        color: Color,
        intensity: f32,
        cast_shadow: bool,
    },
    Point {
        color: Color,
        intensity: f32,
        /// 0 means unlimited range
        distance: f32,
        decay: f32,
    },
    Spot {
        color: Color,
        intensity: f32,
        angle: f32,
        penumbra: f32,
        decay: f32,
        target: Option<[f32; 3]>,
    },
    Hemisphere {
        sky: Color,
        ground: Color,
        intensity: f32,
    },
}

impl LightSpec {
    /// Human-readable kind, used in messages and info output
    pub fn kind_name(&self) -> &'static str {
        match self {
            LightSpec::Ambient { .. } => "ambient light",
            LightSpec::Directional { .. } => "directional light",
            LightSpec::Point { .. } => "point light",
            LightSpec::Spot { .. } => "spot light",
            LightSpec::Hemisphere { .. } => "hemisphere light",
        }
    }

    /// Prefix for generated ids of this light kind
    pub fn id_prefix(&self) -> &'static str {
        match self {
            LightSpec::Ambient { .. } => "ambLight",
            LightSpec::Directional { .. } => "dirLight",
            LightSpec::Point { .. } => "light",
            LightSpec::Spot { .. } => "spotLight",
            LightSpec::Hemisphere { .. } => "hemiLight",
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            LightSpec::Ambient { intensity, .. }
            | LightSpec::Directional { intensity, .. }
            | LightSpec::Point { intensity, .. }
            | LightSpec::Spot { intensity, .. }
            | LightSpec::Hemisphere { intensity, .. } => *intensity,
        }
    }

    pub fn set_intensity(&mut self, value: f32) {
        match self {
            LightSpec::Ambient { intensity, .. }
            | LightSpec::Directional { intensity, .. }
            | LightSpec::Point { intensity, .. }
            | LightSpec::Spot { intensity, .. }
            | LightSpec::Hemisphere { intensity, .. } => *intensity = value,
        }
    }
}
