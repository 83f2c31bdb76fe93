//! Headless render engine
//!
//! A full [`RenderEngine`] that keeps the scene graph as plain bookkeeping
//! and draws nothing. It backs the test suite and any embedding that wants
//! interpreter semantics without a GPU. Raycasts intersect axis-aligned
//! bounding boxes; node rotation is not taken into account.

use ahash::AHashMap;
use lin_alg::f32::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraState;
use crate::color::Color;
use crate::engine::{
    Aabb, FogSpec, HelperKind, NodeId, RayHit, RenderEngine, TextureStatus, TextureTicket,
};
use crate::entity::Transform;
use crate::error::SceneError;
use crate::geometry::GeometrySpec;
use crate::light::LightSpec;
use crate::material::MaterialSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Mesh,
    Light,
    Group,
}

#[derive(Debug)]
struct NodeRecord {
    kind: NodeKind,
    half_extents: [f32; 3],
    position: [f32; 3],
    rotation: [f32; 3],
    scale: [f32; 3],
    visible: bool,
    parent: Option<NodeId>,
    in_scene: bool,
    texture: Option<String>,
}

impl NodeRecord {
    fn new(kind: NodeKind, half_extents: [f32; 3]) -> Self {
        NodeRecord {
            kind,
            half_extents,
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
            visible: true,
            parent: None,
            in_scene: false,
            texture: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SceneDump {
    nodes: Vec<NodeDump>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeDump {
    node: NodeId,
    kind: String,
    position: [f32; 3],
    rotation: [f32; 3],
    scale: [f32; 3],
    visible: bool,
}

/// In-memory engine with no rendering output
#[derive(Debug, Default)]
pub struct HeadlessEngine {
    nodes: AHashMap<NodeId, NodeRecord>,
    next_node: NodeId,
    next_ticket: TextureTicket,
    textures: AHashMap<TextureTicket, TextureStatus>,
    background: Option<Color>,
    fog: Option<FogSpec>,
    environment: Option<String>,
    grid: bool,
    axes: bool,
    camera: Option<CameraState>,
    render_count: u64,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of render calls issued so far
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn has_fog(&self) -> bool {
        self.fog.is_some()
    }

    /// Texture URL currently applied to a node, if any
    pub fn node_texture(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).and_then(|n| n.texture.as_deref())
    }

    fn alloc(&mut self, record: NodeRecord) -> NodeId {
        let id = self.next_node;
        self.next_node += 1;
        self.nodes.insert(id, record);
        id
    }

    /// Whether a node is reachable from the scene root through its parent
    /// chain
    fn attached(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            let Some(record) = self.nodes.get(&current) else {
                return false;
            };
            if record.in_scene {
                return true;
            }
            match record.parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// World position with ancestor group offsets applied
    fn world_position(&self, node: NodeId) -> [f32; 3] {
        let mut pos = [0.0f32; 3];
        let mut current = Some(node);
        while let Some(id) = current {
            let Some(record) = self.nodes.get(&id) else {
                break;
            };
            for axis in 0..3 {
                pos[axis] += record.position[axis];
            }
            current = record.parent;
        }
        pos
    }

    fn world_aabb(&self, node: NodeId) -> Option<([f32; 3], [f32; 3])> {
        let record = self.nodes.get(&node)?;
        if record.kind != NodeKind::Mesh {
            return None;
        }
        let center = self.world_position(node);
        let mut min = [0.0f32; 3];
        let mut max = [0.0f32; 3];
        for axis in 0..3 {
            let half = record.half_extents[axis] * record.scale[axis].abs();
            min[axis] = center[axis] - half;
            max[axis] = center[axis] + half;
        }
        Some((min, max))
    }

    fn ray_vs_aabb(origin: &[f32; 3], dir: &[f32; 3], min: &[f32; 3], max: &[f32; 3]) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            if dir[axis].abs() < 1e-8 {
                if origin[axis] < min[axis] || origin[axis] > max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / dir[axis];
            let mut t1 = (min[axis] - origin[axis]) * inv;
            let mut t2 = (max[axis] - origin[axis]) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_near = t_near.max(t1);
            t_far = t_far.min(t2);
            if t_near > t_far || t_far < 0.0 {
                return None;
            }
        }

        Some(if t_near >= 0.0 { t_near } else { t_far })
    }
}

impl RenderEngine for HeadlessEngine {
    fn create_mesh(&mut self, geometry: &GeometrySpec, _material: &MaterialSpec) -> NodeId {
        self.alloc(NodeRecord::new(NodeKind::Mesh, geometry.half_extents()))
    }

    fn create_light(&mut self, _light: &LightSpec) -> NodeId {
        self.alloc(NodeRecord::new(NodeKind::Light, [0.0; 3]))
    }

    fn create_group(&mut self) -> NodeId {
        self.alloc(NodeRecord::new(NodeKind::Group, [0.0; 3]))
    }

    fn add_to_scene(&mut self, node: NodeId) {
        if let Some(record) = self.nodes.get_mut(&node) {
            record.in_scene = true;
            record.parent = None;
        }
    }

    fn remove_from_scene(&mut self, node: NodeId) {
        if let Some(record) = self.nodes.get_mut(&node) {
            record.in_scene = false;
        }
    }

    fn set_parent(&mut self, child: NodeId, parent: NodeId) {
        if let Some(record) = self.nodes.get_mut(&child) {
            record.in_scene = false;
            record.parent = Some(parent);
        }
    }

    fn detach(&mut self, child: NodeId, parent: NodeId) {
        if let Some(record) = self.nodes.get_mut(&child) {
            if record.parent == Some(parent) {
                record.parent = None;
            }
        }
    }

    fn free_node(&mut self, node: NodeId) {
        self.nodes.remove(&node);
    }

    fn set_transform(&mut self, node: NodeId, transform: &Transform) {
        if let Some(record) = self.nodes.get_mut(&node) {
            let p = &transform.position;
            let r = &transform.rotation;
            let s = &transform.scale;
            record.position = [p.x, p.y, p.z];
            record.rotation = [r.x, r.y, r.z];
            record.scale = [s.x, s.y, s.z];
        }
    }

    fn set_material(&mut self, _node: NodeId, _material: &MaterialSpec) {}

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(record) = self.nodes.get_mut(&node) {
            record.visible = visible;
        }
    }

    fn raycast(&self, origin: Vec3, direction: Vec3) -> Vec<RayHit> {
        let o = [origin.x, origin.y, origin.z];
        let d = [direction.x, direction.y, direction.z];

        let mut hits: Vec<RayHit> = self
            .nodes
            .iter()
            .filter(|(id, record)| {
                record.kind == NodeKind::Mesh && record.visible && self.attached(**id)
            })
            .filter_map(|(id, _)| {
                let (min, max) = self.world_aabb(*id)?;
                let t = Self::ray_vs_aabb(&o, &d, &min, &max)?;
                Some(RayHit {
                    node: *id,
                    distance: t,
                    point: Vec3::new(o[0] + d[0] * t, o[1] + d[1] * t, o[2] + d[2] * t),
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn bounding_box(&self, node: NodeId) -> Option<Aabb> {
        let (min, max) = self.world_aabb(node)?;
        Some(Aabb {
            min: Vec3::new(min[0], min[1], min[2]),
            max: Vec3::new(max[0], max[1], max[2]),
        })
    }

    fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    fn set_fog(&mut self, fog: Option<FogSpec>) {
        self.fog = fog;
    }

    fn set_environment(&mut self, name: &str) {
        self.environment = Some(name.to_string());
    }

    fn set_helper(&mut self, kind: HelperKind, enabled: bool, _size: f32, _divisions: u32) {
        match kind {
            HelperKind::Grid => self.grid = enabled,
            HelperKind::Axes => self.axes = enabled,
        }
    }

    fn helper_enabled(&self, kind: HelperKind) -> bool {
        match kind {
            HelperKind::Grid => self.grid,
            HelperKind::Axes => self.axes,
        }
    }

    fn update_camera(&mut self, camera: &CameraState) {
        self.camera = Some(camera.clone());
    }

    fn render(&mut self) {
        self.render_count += 1;
    }

    fn begin_texture_load(&mut self, node: NodeId, url: &str, _repeat: (f32, f32)) -> TextureTicket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;

        // no I/O here; loads resolve instantly, with a hook for tests to
        // exercise the failure path
        let status = if url.ends_with(".invalid") {
            TextureStatus::Failed
        } else {
            if let Some(record) = self.nodes.get_mut(&node) {
                record.texture = Some(url.to_string());
            }
            TextureStatus::Ready
        };
        self.textures.insert(ticket, status);
        ticket
    }

    fn texture_status(&self, ticket: TextureTicket) -> TextureStatus {
        self.textures
            .get(&ticket)
            .copied()
            .unwrap_or(TextureStatus::Failed)
    }

    fn export_scene(&self) -> Result<String, SceneError> {
        let mut nodes: Vec<NodeDump> = self
            .nodes
            .iter()
            .filter(|(id, _)| self.attached(**id))
            .map(|(id, record)| NodeDump {
                node: *id,
                kind: match record.kind {
                    NodeKind::Mesh => "mesh".to_string(),
                    NodeKind::Light => "light".to_string(),
                    NodeKind::Group => "group".to_string(),
                },
                position: record.position,
                rotation: record.rotation,
                scale: record.scale,
                visible: record.visible,
            })
            .collect();
        nodes.sort_by_key(|n| n.node);

        serde_json::to_string(&SceneDump { nodes }).map_err(|e| SceneError::Export(e.to_string()))
    }

    fn import_scene(&mut self, data: &str) -> Result<(), SceneError> {
        let dump: SceneDump =
            serde_json::from_str(data).map_err(|e| SceneError::Import(e.to_string()))?;

        for node in dump.nodes {
            if let Some(record) = self.nodes.get_mut(&node.node) {
                record.position = node.position;
                record.rotation = node.rotation;
                record.scale = node.scale;
                record.visible = node.visible;
            }
        }
        Ok(())
    }
}
