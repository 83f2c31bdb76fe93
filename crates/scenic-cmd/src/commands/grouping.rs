//! Grouping: group, ungroup, parent, unparent
//!
//! Grouped entities keep their local transform; on ungroup the group's
//! position and rotation are added component-wise onto each child. That
//! recombination ignores the group's scale and rotation-order effects and
//! is kept as-is for compatibility with established scripts.
//!
//! Membership is exclusive: grouping or parenting an entity strips it from
//! any group it previously belonged to, matching the engine-side reparent.

use scenic_scene::Entity;

use crate::commands::required;
use crate::error::{CmdError, CmdResult};
use crate::interp::Interpreter;

pub(crate) fn group(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    if args.len() < 2 {
        return Err(CmdError::InvalidArgument(
            "No objects specified for grouping".to_string(),
        ));
    }

    let group_id = args[args.len() - 1].clone();
    let members = &args[..args.len() - 1];

    let group_node = interp.engine.create_group();
    let mut children = Vec::new();

    for member in members {
        let Some(entity) = interp.registry.get(member) else {
            continue;
        };
        let node = entity.node;
        interp.registry.remove_membership(member);
        interp.engine.remove_from_scene(node);
        interp.engine.set_parent(node, group_node);
        children.push(member.clone());
    }

    if children.is_empty() {
        interp.engine.free_node(group_node);
        return Err(CmdError::InvalidArgument(
            "No valid objects found to group".to_string(),
        ));
    }

    let count = children.len();
    let mut group = Entity::group(group_id.clone(), group_node);
    group.children = children;
    interp.insert_entity(group);

    Ok(format!("Created group '{group_id}' with {count} objects"))
}

pub(crate) fn ungroup(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let group_id = required(args, 0, "group id")?;
    let group = interp
        .registry
        .remove_group(group_id)
        .ok_or_else(|| CmdError::GroupNotFound(group_id.to_string()))?;

    let mut moved = 0usize;
    for child_id in &group.children {
        let Some(child) = interp.registry.get_mut(child_id) else {
            continue;
        };
        child.transform.position = child.transform.position + group.transform.position;
        child.transform.rotation = child.transform.rotation + group.transform.rotation;
        let node = child.node;

        interp.engine.detach(node, group.node);
        interp.engine.add_to_scene(node);
        interp.push_transform(child_id);
        moved += 1;
    }

    interp.engine.remove_from_scene(group.node);
    interp.engine.free_node(group.node);

    Ok(format!(
        "Ungrouped '{group_id}', moved {moved} objects to scene"
    ))
}

pub(crate) fn parent(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let child_id = required(args, 0, "child id")?.to_string();
    let group_id = required(args, 1, "group id")?.to_string();

    if child_id == group_id {
        return Err(CmdError::InvalidArgument(
            "Cannot parent a group to itself".to_string(),
        ));
    }

    let child_node = interp.entity(&child_id)?.node;
    let group_node = interp
        .registry
        .get_group(&group_id)
        .ok_or_else(|| CmdError::GroupNotFound(group_id.clone()))?
        .node;

    interp.registry.remove_membership(&child_id);
    interp.engine.remove_from_scene(child_node);
    interp.engine.set_parent(child_node, group_node);
    if let Some(group) = interp.registry.get_group_mut(&group_id) {
        group.children.push(child_id.clone());
    }

    Ok(format!("Parented '{child_id}' to '{group_id}'"))
}

pub(crate) fn unparent(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let child_id = required(args, 0, "child id")?.to_string();

    let group_id = interp
        .registry
        .group_containing(&child_id)
        .ok_or_else(|| {
            CmdError::InvalidArgument(format!("'{child_id}' has no parent group"))
        })?
        .to_string();

    let group = interp
        .registry
        .get_group(&group_id)
        .ok_or_else(|| CmdError::GroupNotFound(group_id.clone()))?;
    let group_node = group.node;
    let group_pos = group.transform.position;
    let group_rot = group.transform.rotation;

    let child = interp.entity_mut(&child_id)?;
    child.transform.position = child.transform.position + group_pos;
    child.transform.rotation = child.transform.rotation + group_rot;
    let child_node = child.node;

    interp.engine.detach(child_node, group_node);
    interp.engine.add_to_scene(child_node);
    interp.push_transform(&child_id);

    if let Some(group) = interp.registry.get_group_mut(&group_id) {
        group.children.retain(|c| c != &child_id);
    }

    Ok(format!("Unparented '{child_id}' from '{group_id}'"))
}
