//! Property animation engine
//!
//! Animations interpolate one scalar property of one entity between two
//! values over a duration. The engine is driven by explicit timestamps
//! from the embedder's render tick, so time never advances on its own;
//! an animation arms itself on the first tick that sees it.

use lin_alg::f32::Vec3;
use log::debug;

use crate::engine::RenderEngine;
use crate::entity::Entity;
use crate::registry::SceneRegistry;

/// Easing curves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Resolve by name; unknown names fall back to linear
    pub fn from_name(name: &str) -> Self {
        match name {
            "ease-in" => Easing::EaseIn,
            "ease-out" => Easing::EaseOut,
            "ease-in-out" => Easing::EaseInOut,
            _ => Easing::Linear,
        }
    }

    /// Map linear progress `t` in [0, 1] through the curve
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A typed, animatable property path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyPath {
    Position(Axis),
    Rotation(Axis),
    Scale(Axis),
    Opacity,
    Intensity,
}

impl PropertyPath {
    /// Parse dot notation such as `position.y`, `material.opacity`, or
    /// `intensity`. Unknown paths are rejected here, before an animation
    /// is created.
    pub fn parse(path: &str) -> Result<Self, String> {
        let axis = |name: &str| match name {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        };

        let parsed = match path.split_once('.') {
            Some(("position", ax)) => axis(ax).map(PropertyPath::Position),
            Some(("rotation", ax)) => axis(ax).map(PropertyPath::Rotation),
            Some(("scale", ax)) => axis(ax).map(PropertyPath::Scale),
            Some(("material", "opacity")) => Some(PropertyPath::Opacity),
            None if path == "opacity" => Some(PropertyPath::Opacity),
            None if path == "intensity" => Some(PropertyPath::Intensity),
            _ => None,
        };

        parsed.ok_or_else(|| format!("Cannot animate property '{path}'"))
    }

    fn write(&self, entity: &mut Entity, value: f32, engine: &mut dyn RenderEngine) {
        let set = |v: &mut Vec3, axis: Axis| match axis {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        };
        match self {
            PropertyPath::Position(ax) => set(&mut entity.transform.position, *ax),
            PropertyPath::Rotation(ax) => set(&mut entity.transform.rotation, *ax),
            PropertyPath::Scale(ax) => set(&mut entity.transform.scale, *ax),
            PropertyPath::Opacity => entity.material.opacity = value,
            PropertyPath::Intensity => {
                if let Some(light) = entity.light.as_mut() {
                    light.set_intensity(value);
                }
            }
        }
        match self {
            PropertyPath::Position(_) | PropertyPath::Rotation(_) | PropertyPath::Scale(_) => {
                engine.set_transform(entity.node, &entity.transform);
            }
            PropertyPath::Opacity => engine.set_material(entity.node, &entity.material),
            PropertyPath::Intensity => {
                if let Some(light) = entity.light.as_ref() {
                    engine.set_light(entity.node, light);
                }
            }
        }
    }
}

/// One running animation
#[derive(Debug, Clone)]
pub struct Animation {
    pub target: String,
    pub path: PropertyPath,
    /// The path as the user wrote it, for messages and selective stops
    pub source_path: String,
    pub from: f32,
    pub to: f32,
    pub duration_ms: f32,
    pub easing: Easing,
    /// Timestamp of the first tick that saw this animation
    started: Option<f64>,
}

/// Owns running animations and advances them on each tick
#[derive(Debug, Default)]
pub struct AnimationEngine {
    animations: Vec<(String, Animation)>,
    next_seq: u64,
}

impl AnimationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an animation, returning its generated id
    pub fn spawn(
        &mut self,
        target: String,
        path: PropertyPath,
        source_path: String,
        from: f32,
        to: f32,
        duration_ms: f32,
        easing: Easing,
    ) -> String {
        let id = format!("{}_{}_{}", target, source_path, self.next_seq);
        self.next_seq += 1;
        self.animations.push((
            id.clone(),
            Animation {
                target,
                path,
                source_path,
                from,
                to,
                duration_ms,
                easing,
                started: None,
            },
        ));
        id
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Remove animations targeting an entity, optionally restricted to one
    /// property path. Returns how many were removed.
    pub fn stop_for_target(&mut self, target: &str, path: Option<&str>) -> usize {
        let before = self.animations.len();
        self.animations.retain(|(_, anim)| {
            anim.target != target || path.is_some_and(|p| anim.source_path != p)
        });
        before - self.animations.len()
    }

    pub fn clear(&mut self) {
        self.animations.clear();
    }

    /// Advance all animations to `now_ms`. Finished animations snap to
    /// their end value and are removed; animations whose target entity no
    /// longer exists are dropped.
    pub fn update(
        &mut self,
        now_ms: f64,
        registry: &mut SceneRegistry,
        engine: &mut dyn RenderEngine,
    ) {
        let mut animations = std::mem::take(&mut self.animations);

        animations.retain_mut(|(id, anim)| {
            let Some(entity) = registry.get_mut(&anim.target) else {
                debug!("dropping animation {id}: target '{}' is gone", anim.target);
                return false;
            };

            let started = *anim.started.get_or_insert(now_ms);
            let elapsed = (now_ms - started) as f32;

            if anim.duration_ms <= 0.0 || elapsed >= anim.duration_ms {
                anim.path.write(entity, anim.to, engine);
                return false;
            }

            let t = anim.easing.apply(elapsed / anim.duration_ms);
            anim.path.write(entity, anim.from + (anim.to - anim.from) * t, engine);
            true
        });

        // animations spawned re-entrantly during the walk come after
        animations.append(&mut self.animations);
        self.animations = animations;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{GeometryKind, GeometrySpec};
    use crate::headless::HeadlessEngine;
    use crate::material::MaterialSpec;
    use crate::Entity;

    fn world() -> (SceneRegistry, HeadlessEngine) {
        let mut registry = SceneRegistry::new();
        let mut engine = HeadlessEngine::new();
        let node = engine.create_mesh(
            &GeometrySpec::defaults(GeometryKind::Cube),
            &MaterialSpec::default(),
        );
        engine.add_to_scene(node);
        registry.insert(Entity::object(
            "cube0".to_string(),
            node,
            GeometrySpec::defaults(GeometryKind::Cube),
            MaterialSpec::default(),
        ));
        (registry, engine)
    }

    #[test]
    fn easing_curves_hit_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!((easing.apply(0.0)).abs() < 1e-6);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
        }
        assert!((Easing::EaseIn.apply(0.5) - 0.25).abs() < 1e-6);
        assert!((Easing::EaseOut.apply(0.5) - 0.75).abs() < 1e-6);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn parses_property_paths() {
        assert_eq!(
            PropertyPath::parse("position.y").unwrap(),
            PropertyPath::Position(Axis::Y)
        );
        assert_eq!(
            PropertyPath::parse("material.opacity").unwrap(),
            PropertyPath::Opacity
        );
        assert_eq!(
            PropertyPath::parse("intensity").unwrap(),
            PropertyPath::Intensity
        );
        assert!(PropertyPath::parse("position.w").is_err());
        assert!(PropertyPath::parse("velocity").is_err());
    }

    #[test]
    fn animation_arms_on_first_tick_and_snaps_at_end() {
        let (mut registry, mut engine) = world();
        let mut anims = AnimationEngine::new();
        anims.spawn(
            "cube0".to_string(),
            PropertyPath::Position(Axis::Y),
            "position.y".to_string(),
            0.0,
            5.0,
            2000.0,
            Easing::Linear,
        );

        // first tick arms the clock at its own timestamp
        anims.update(1000.0, &mut registry, &mut engine);
        assert!((registry.get("cube0").unwrap().transform.position.y).abs() < 1e-4);

        anims.update(2000.0, &mut registry, &mut engine);
        let y = registry.get("cube0").unwrap().transform.position.y;
        assert!((y - 2.5).abs() < 1e-4);

        // past the end: snap to the target and remove
        anims.update(3500.0, &mut registry, &mut engine);
        let y = registry.get("cube0").unwrap().transform.position.y;
        assert!((y - 5.0).abs() < 1e-4);
        assert!(anims.is_empty());
    }

    #[test]
    fn deleted_target_drops_the_animation() {
        let (mut registry, mut engine) = world();
        let mut anims = AnimationEngine::new();
        anims.spawn(
            "cube0".to_string(),
            PropertyPath::Opacity,
            "opacity".to_string(),
            1.0,
            0.0,
            1000.0,
            Easing::Linear,
        );

        registry.remove("cube0");
        anims.update(0.0, &mut registry, &mut engine);
        assert!(anims.is_empty());
    }

    #[test]
    fn stop_for_target_can_filter_by_path() {
        let mut anims = AnimationEngine::new();
        anims.spawn(
            "cube0".to_string(),
            PropertyPath::Position(Axis::X),
            "position.x".to_string(),
            0.0,
            1.0,
            1000.0,
            Easing::Linear,
        );
        anims.spawn(
            "cube0".to_string(),
            PropertyPath::Position(Axis::Y),
            "position.y".to_string(),
            0.0,
            1.0,
            1000.0,
            Easing::Linear,
        );

        assert_eq!(anims.stop_for_target("cube0", Some("position.x")), 1);
        assert_eq!(anims.len(), 1);
        assert_eq!(anims.stop_for_target("cube0", None), 1);
        assert!(anims.is_empty());
    }
}
