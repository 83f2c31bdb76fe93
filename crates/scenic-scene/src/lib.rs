//! Scene-side data model for scenic.
//!
//! This crate owns everything that describes a live scene: entities and
//! their transforms, geometry and material specifications, lights, the
//! camera, the id registry, and the animation engine. Rendering itself is
//! abstracted behind the [`engine::RenderEngine`] trait so the interpreter
//! can drive a real GPU backend or the bundled [`headless::HeadlessEngine`]
//! interchangeably.

pub mod animate;
pub mod camera;
pub mod color;
pub mod engine;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod light;
pub mod material;
pub mod registry;

pub use animate::{Animation, AnimationEngine, Easing, PropertyPath};
pub use camera::CameraState;
pub use color::Color;
pub use engine::{
    Aabb, FogSpec, HelperKind, NodeId, RayHit, RenderEngine, TextureStatus, TextureTicket,
};
pub use entity::{Entity, EntityKind, Transform};
pub use error::SceneError;
pub use geometry::{GeometryKind, GeometrySpec};
pub use headless::HeadlessEngine;
pub use light::LightSpec;
pub use material::{MaterialSpec, ShadingModel};
pub use registry::SceneRegistry;
