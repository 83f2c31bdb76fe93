//! Entity registry
//!
//! Objects, lights, and groups live in three separate tables that share
//! one id namespace and one monotonic counter for generated ids. Lookups
//! probe objects first, then lights, then groups.

use ahash::AHashMap;

use crate::engine::NodeId;
use crate::entity::{Entity, EntityKind};

#[derive(Debug, Default)]
pub struct SceneRegistry {
    objects: AHashMap<String, Entity>,
    lights: AHashMap<String, Entity>,
    groups: AHashMap<String, Entity>,
    next_id: u64,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next id for a prefix. The counter is shared across all
    /// prefixes and never reused, even after deletions.
    pub fn generate_id(&mut self, prefix: &str) -> String {
        let id = format!("{}{}", prefix, self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert an entity into the table matching its kind, replacing any
    /// previous holder of the id in that table
    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        let table = match entity.kind {
            EntityKind::Object => &mut self.objects,
            EntityKind::Light => &mut self.lights,
            EntityKind::Group => &mut self.groups,
        };
        table.insert(entity.id.clone(), entity)
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.objects
            .get(id)
            .or_else(|| self.lights.get(id))
            .or_else(|| self.groups.get(id))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Entity> {
        if self.objects.contains_key(id) {
            return self.objects.get_mut(id);
        }
        if self.lights.contains_key(id) {
            return self.lights.get_mut(id);
        }
        self.groups.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.objects.contains_key(id)
            || self.lights.contains_key(id)
            || self.groups.contains_key(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Entity> {
        self.objects
            .remove(id)
            .or_else(|| self.lights.remove(id))
            .or_else(|| self.groups.remove(id))
    }

    pub fn get_group(&self, id: &str) -> Option<&Entity> {
        self.groups.get(id)
    }

    pub fn get_group_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.groups.get_mut(id)
    }

    pub fn remove_group(&mut self, id: &str) -> Option<Entity> {
        self.groups.remove(id)
    }

    pub fn iter_objects(&self) -> impl Iterator<Item = &Entity> {
        self.objects.values()
    }

    pub fn iter_lights(&self) -> impl Iterator<Item = &Entity> {
        self.lights.values()
    }

    pub fn iter_groups(&self) -> impl Iterator<Item = &Entity> {
        self.groups.values()
    }

    /// Ids in one table, sorted for stable output
    pub fn sorted_ids(&self, kind: EntityKind) -> Vec<&str> {
        let table = match kind {
            EntityKind::Object => &self.objects,
            EntityKind::Light => &self.lights,
            EntityKind::Group => &self.groups,
        };
        let mut ids: Vec<&str> = table.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn counts(&self) -> (usize, usize, usize) {
        (self.objects.len(), self.lights.len(), self.groups.len())
    }

    /// Drain one table, handing the removed entities to the caller so it
    /// can release their scene nodes
    pub fn drain_kind(&mut self, kind: EntityKind) -> Vec<Entity> {
        let table = match kind {
            EntityKind::Object => &mut self.objects,
            EntityKind::Light => &mut self.lights,
            EntityKind::Group => &mut self.groups,
        };
        table.drain().map(|(_, e)| e).collect()
    }

    /// Reverse lookup from a backend node to the owning object entity
    pub fn object_by_node(&self, node: NodeId) -> Option<&Entity> {
        self.objects.values().find(|e| e.node == node)
    }

    /// Strip an id from every group's member list. Called before the id
    /// joins a new group, so membership stays exclusive.
    pub fn remove_membership(&mut self, member: &str) {
        for group in self.groups.values_mut() {
            group.children.retain(|c| c != member);
        }
    }

    /// The group whose member list contains the given id, if any
    pub fn group_containing(&self, member: &str) -> Option<&str> {
        self.groups
            .values()
            .find(|g| g.children.iter().any(|c| c == member))
            .map(|g| g.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{GeometryKind, GeometrySpec};
    use crate::light::LightSpec;
    use crate::material::MaterialSpec;
    use crate::Color;

    fn obj(id: &str, node: NodeId) -> Entity {
        Entity::object(
            id.to_string(),
            node,
            GeometrySpec::defaults(GeometryKind::Cube),
            MaterialSpec::default(),
        )
    }

    #[test]
    fn generated_ids_are_monotonic_across_prefixes() {
        let mut reg = SceneRegistry::new();
        assert_eq!(reg.generate_id("cube"), "cube0");
        assert_eq!(reg.generate_id("sphere"), "sphere1");
        assert_eq!(reg.generate_id("cube"), "cube2");
    }

    #[test]
    fn counter_never_reuses_after_removal() {
        let mut reg = SceneRegistry::new();
        let id = reg.generate_id("cube");
        reg.insert(obj(&id, 1));
        reg.remove(&id);
        assert_eq!(reg.generate_id("cube"), "cube1");
    }

    #[test]
    fn lookup_probes_objects_before_lights_and_groups() {
        let mut reg = SceneRegistry::new();
        reg.insert(Entity::light(
            "thing".to_string(),
            1,
            LightSpec::Ambient {
                color: Color::WHITE,
                intensity: 0.5,
            },
        ));
        reg.insert(obj("thing", 2));
        assert_eq!(reg.get("thing").unwrap().kind, EntityKind::Object);
        // removal follows the same order
        assert_eq!(reg.remove("thing").unwrap().kind, EntityKind::Object);
        assert_eq!(reg.get("thing").unwrap().kind, EntityKind::Light);
    }

    #[test]
    fn remove_membership_strips_every_group() {
        let mut reg = SceneRegistry::new();
        let mut g1 = Entity::group("g1".to_string(), 8);
        g1.children.push("cube0".to_string());
        let mut g2 = Entity::group("g2".to_string(), 9);
        g2.children.push("cube0".to_string());
        g2.children.push("cube1".to_string());
        reg.insert(g1);
        reg.insert(g2);

        reg.remove_membership("cube0");
        assert_eq!(reg.group_containing("cube0"), None);
        assert_eq!(reg.group_containing("cube1"), Some("g2"));
    }

    #[test]
    fn group_membership_lookup() {
        let mut reg = SceneRegistry::new();
        let mut group = Entity::group("g1".to_string(), 9);
        group.children.push("cube0".to_string());
        reg.insert(group);
        assert_eq!(reg.group_containing("cube0"), Some("g1"));
        assert_eq!(reg.group_containing("cube1"), None);
    }
}
