//! Scene entities: objects, lights, and groups

use lin_alg::f32::Vec3;

use crate::engine::NodeId;
use crate::geometry::GeometrySpec;
use crate::light::LightSpec;
use crate::material::MaterialSpec;

/// Position, Euler rotation (radians), and per-axis scale
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            position: Vec3::new(0.0, 0.0, 0.0),
            rotation: Vec3::new(0.0, 0.0, 0.0),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

/// What an entity is, which also decides the registry table it lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Object,
    Light,
    Group,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Object => "object",
            EntityKind::Light => "light",
            EntityKind::Group => "group",
        }
    }
}

/// One addressable thing in the scene.
///
/// Objects carry a geometry, lights carry a light spec, groups carry a
/// member list. All three share a transform, visibility, and a material
/// (meaningless for lights and groups but harmless).
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: String,
    pub kind: EntityKind,
    pub node: NodeId,
    pub transform: Transform,
    pub visible: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub material: MaterialSpec,
    pub geometry: Option<GeometrySpec>,
    pub light: Option<LightSpec>,
    /// Member entity ids, for groups
    pub children: Vec<String>,
}

impl Entity {
    pub fn object(id: String, node: NodeId, geometry: GeometrySpec, material: MaterialSpec) -> Self {
        Entity {
            id,
            kind: EntityKind::Object,
            node,
            transform: Transform::default(),
            visible: true,
            cast_shadow: true,
            receive_shadow: true,
            material,
            geometry: Some(geometry),
            light: None,
            children: Vec::new(),
        }
    }

    pub fn light(id: String, node: NodeId, spec: LightSpec) -> Self {
        let cast_shadow = matches!(
            spec,
            LightSpec::Directional { .. } | LightSpec::Spot { .. }
        );
        Entity {
            id,
            kind: EntityKind::Light,
            node,
            transform: Transform::default(),
            visible: true,
            cast_shadow,
            receive_shadow: false,
            material: MaterialSpec::default(),
            geometry: None,
            light: Some(spec),
            children: Vec::new(),
        }
    }

    pub fn group(id: String, node: NodeId) -> Self {
        Entity {
            id,
            kind: EntityKind::Group,
            node,
            transform: Transform::default(),
            visible: true,
            cast_shadow: false,
            receive_shadow: false,
            material: MaterialSpec::default(),
            geometry: None,
            light: None,
            children: Vec::new(),
        }
    }

    /// Type label shown by info and list output: the geometry kind for
    /// objects, the light kind for lights, "group" for groups
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            EntityKind::Object => self
                .geometry
                .as_ref()
                .map(|g| g.kind.name())
                .unwrap_or("object"),
            EntityKind::Light => self
                .light
                .as_ref()
                .map(|l| l.kind_name())
                .unwrap_or("light"),
            EntityKind::Group => "group",
        }
    }
}
