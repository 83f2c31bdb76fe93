//! Geometry kinds and their parameter tables
//!
//! Every creatable shape has a fixed number of geometry parameters with
//! per-slot defaults. Parameters follow the conventional order of the shape
//! (radii before heights, segment counts last).

use serde::{Deserialize, Serialize};

/// The shapes the interpreter can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Cube,
    Sphere,
    Plane,
    Cylinder,
    Cone,
    Torus,
    Tetrahedron,
    Octahedron,
    Icosahedron,
    Dodecahedron,
    Ring,
    Capsule,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 12] = [
        GeometryKind::Cube,
        GeometryKind::Sphere,
        GeometryKind::Plane,
        GeometryKind::Cylinder,
        GeometryKind::Cone,
        GeometryKind::Torus,
        GeometryKind::Tetrahedron,
        GeometryKind::Octahedron,
        GeometryKind::Icosahedron,
        GeometryKind::Dodecahedron,
        GeometryKind::Ring,
        GeometryKind::Capsule,
    ];

    /// Resolve a canonical (post-alias) shape name
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "cube" => GeometryKind::Cube,
            "sphere" => GeometryKind::Sphere,
            "plane" => GeometryKind::Plane,
            "cylinder" => GeometryKind::Cylinder,
            "cone" => GeometryKind::Cone,
            "torus" => GeometryKind::Torus,
            "tetrahedron" => GeometryKind::Tetrahedron,
            "octahedron" => GeometryKind::Octahedron,
            "icosahedron" => GeometryKind::Icosahedron,
            "dodecahedron" => GeometryKind::Dodecahedron,
            "ring" => GeometryKind::Ring,
            "capsule" => GeometryKind::Capsule,
            _ => return None,
        };
        Some(kind)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GeometryKind::Cube => "cube",
            GeometryKind::Sphere => "sphere",
            GeometryKind::Plane => "plane",
            GeometryKind::Cylinder => "cylinder",
            GeometryKind::Cone => "cone",
            GeometryKind::Torus => "torus",
            GeometryKind::Tetrahedron => "tetrahedron",
            GeometryKind::Octahedron => "octahedron",
            GeometryKind::Icosahedron => "icosahedron",
            GeometryKind::Dodecahedron => "dodecahedron",
            GeometryKind::Ring => "ring",
            GeometryKind::Capsule => "capsule",
        }
    }

    /// How many leading positional arguments this shape consumes as
    /// geometry parameters
    pub fn param_count(&self) -> usize {
        self.defaults().len()
    }

    /// Per-slot parameter defaults.
    ///
    /// Slot meanings: cube w/h/d; sphere radius/widthSegs/heightSegs;
    /// plane w/h; cylinder radiusTop/radiusBottom/height/radialSegs;
    /// cone radius/height; torus radius/tube; polyhedra radius;
    /// ring innerRadius/outerRadius/thetaSegs; capsule radius/radius/height.
    pub fn defaults(&self) -> &'static [f32] {
        match self {
            GeometryKind::Cube => &[1.0, 1.0, 1.0],
            GeometryKind::Sphere => &[1.0, 32.0, 16.0],
            GeometryKind::Plane => &[1.0, 1.0],
            GeometryKind::Cylinder => &[1.0, 1.0, 1.0, 32.0],
            GeometryKind::Cone => &[1.0, 1.0],
            GeometryKind::Torus => &[1.0, 0.4],
            GeometryKind::Tetrahedron
            | GeometryKind::Octahedron
            | GeometryKind::Icosahedron
            | GeometryKind::Dodecahedron => &[1.0],
            GeometryKind::Ring => &[0.5, 1.0, 32.0],
            GeometryKind::Capsule => &[0.5, 0.5, 1.0],
        }
    }
}

/// A fully resolved geometry: kind plus one value per parameter slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometrySpec {
    pub kind: GeometryKind,
    pub params: Vec<f32>,
}

impl GeometrySpec {
    /// Build a spec from already-parsed parameter values, filling missing
    /// or `None` (unparseable) slots from the kind's defaults
    pub fn with_args(kind: GeometryKind, args: &[Option<f32>]) -> Self {
        let params = kind
            .defaults()
            .iter()
            .enumerate()
            .map(|(i, default)| args.get(i).copied().flatten().unwrap_or(*default))
            .collect();
        GeometrySpec { kind, params }
    }

    /// A spec with every slot at its default
    pub fn defaults(kind: GeometryKind) -> Self {
        GeometrySpec {
            kind,
            params: kind.defaults().to_vec(),
        }
    }

    fn param(&self, i: usize) -> f32 {
        self.params
            .get(i)
            .copied()
            .unwrap_or_else(|| self.kind.defaults()[i])
    }

    /// Local-space half extents of the shape's bounding box, before any
    /// transform is applied
    pub fn half_extents(&self) -> [f32; 3] {
        match self.kind {
            GeometryKind::Cube => [
                self.param(0) / 2.0,
                self.param(1) / 2.0,
                self.param(2) / 2.0,
            ],
            GeometryKind::Sphere => {
                let r = self.param(0);
                [r, r, r]
            }
            GeometryKind::Plane => [self.param(0) / 2.0, self.param(1) / 2.0, 0.0],
            GeometryKind::Cylinder => {
                let r = self.param(0).max(self.param(1));
                [r, self.param(2) / 2.0, r]
            }
            GeometryKind::Cone => {
                let r = self.param(0);
                [r, self.param(1) / 2.0, r]
            }
            GeometryKind::Torus => {
                let r = self.param(0) + self.param(1);
                [r, r, self.param(1)]
            }
            GeometryKind::Tetrahedron
            | GeometryKind::Octahedron
            | GeometryKind::Icosahedron
            | GeometryKind::Dodecahedron => {
                let r = self.param(0);
                [r, r, r]
            }
            GeometryKind::Ring => {
                let r = self.param(1);
                [r, r, 0.0]
            }
            GeometryKind::Capsule => {
                let r = self.param(0).max(self.param(1));
                // hemispherical caps extend past the cylindrical section
                [r, self.param(2) / 2.0 + r, r]
            }
        }
    }
}
