//! The render-engine abstraction
//!
//! The interpreter owns scene semantics; everything that touches the actual
//! scene graph or GPU goes through [`RenderEngine`]. Backends that cannot
//! support an optional capability keep the default method bodies, which
//! either do nothing or report the capability as unsupported.

use lin_alg::f32::Vec3;

use crate::camera::CameraState;
use crate::color::Color;
use crate::entity::Transform;
use crate::error::SceneError;
use crate::geometry::GeometrySpec;
use crate::light::LightSpec;
use crate::material::MaterialSpec;

/// Opaque handle to a node in the backend scene graph
pub type NodeId = u64;

/// Handle for an in-flight texture load
pub type TextureTicket = u64;

/// State of a texture load started with
/// [`RenderEngine::begin_texture_load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Ready,
    Failed,
}

/// One ray intersection, nearest-first in raycast results
#[derive(Debug, Clone)]
pub struct RayHit {
    pub node: NodeId,
    pub distance: f32,
    pub point: Vec3,
}

/// Axis-aligned bounding box in world space
#[derive(Debug, Clone)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Scene fog
#[derive(Debug, Clone)]
pub enum FogSpec {
    Linear { color: Color, near: f32, far: f32 },
    Exponential { color: Color, density: f32 },
}

/// Togglable scene helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperKind {
    Grid,
    Axes,
}

/// Backend interface the interpreter drives.
///
/// Node creation does not attach to the scene; callers pair `create_*`
/// with [`add_to_scene`](RenderEngine::add_to_scene) or
/// [`set_parent`](RenderEngine::set_parent).
pub trait RenderEngine {
    fn create_mesh(&mut self, geometry: &GeometrySpec, material: &MaterialSpec) -> NodeId;
    fn create_light(&mut self, light: &LightSpec) -> NodeId;
    fn create_group(&mut self) -> NodeId;

    fn add_to_scene(&mut self, node: NodeId);
    fn remove_from_scene(&mut self, node: NodeId);
    /// Re-home a node under a group node, removing it from its previous
    /// parent
    fn set_parent(&mut self, child: NodeId, parent: NodeId);
    /// Detach a node from its parent without re-adding it anywhere
    fn detach(&mut self, child: NodeId, parent: NodeId);
    /// Free backend resources for a node that will not be used again
    fn free_node(&mut self, _node: NodeId) {}

    fn set_transform(&mut self, node: NodeId, transform: &Transform);
    fn set_material(&mut self, node: NodeId, material: &MaterialSpec);
    fn set_light(&mut self, _node: NodeId, _light: &LightSpec) {}
    fn set_visible(&mut self, node: NodeId, visible: bool);

    /// All mesh intersections along a ray, nearest first. Direction is
    /// expected normalized.
    fn raycast(&self, origin: Vec3, direction: Vec3) -> Vec<RayHit>;

    /// World-space bounds of a mesh node; `None` for nodes without geometry
    fn bounding_box(&self, _node: NodeId) -> Option<Aabb> {
        None
    }

    fn set_background(&mut self, _color: Color) {}
    fn set_fog(&mut self, _fog: Option<FogSpec>) {}
    fn set_environment(&mut self, _name: &str) {}
    fn set_helper(&mut self, _kind: HelperKind, _enabled: bool, _size: f32, _divisions: u32) {}
    fn helper_enabled(&self, _kind: HelperKind) -> bool {
        false
    }

    fn update_camera(&mut self, _camera: &CameraState) {}

    /// Issue a draw call
    fn render(&mut self) {}

    /// Start loading a texture for a mesh node. The engine applies the
    /// texture itself once the load completes; callers poll the returned
    /// ticket with [`texture_status`](RenderEngine::texture_status).
    fn begin_texture_load(&mut self, node: NodeId, url: &str, repeat: (f32, f32)) -> TextureTicket;
    fn texture_status(&self, ticket: TextureTicket) -> TextureStatus;

    fn export_scene(&self) -> Result<String, SceneError> {
        Err(SceneError::Unsupported("scene export"))
    }

    fn import_scene(&mut self, _data: &str) -> Result<(), SceneError> {
        Err(SceneError::Unsupported("scene import"))
    }

    fn snapshot(&mut self, _path: Option<&str>) -> Result<String, SceneError> {
        Err(SceneError::Unsupported("snapshot capture"))
    }
}
