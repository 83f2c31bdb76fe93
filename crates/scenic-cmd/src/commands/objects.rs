//! Object lifecycle: delete, clone, clipboard, selection, hide/show

use scenic_scene::{Entity, EntityKind};

use crate::commands::{arg, required};
use crate::error::{CmdError, CmdResult};
use crate::interp::Interpreter;

pub(crate) fn delete(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?;
    let entity = interp
        .remove_entity(id)
        .ok_or_else(|| CmdError::EntityNotFound(id.to_string()))?;

    Ok(format!("Deleted {} '{id}'", entity.kind.name()))
}

/// Materialize a copy of an entity under a new id. Groups are shallow
/// containers of other registered entities, so they cannot be cloned.
fn instantiate(
    interp: &mut Interpreter,
    template: &Entity,
    id: String,
    position: [Option<f32>; 3],
) -> CmdResult<()> {
    let node = match template.kind {
        EntityKind::Object => {
            let geometry = template
                .geometry
                .as_ref()
                .ok_or_else(|| CmdError::InvalidArgument("Source has no geometry".to_string()))?;
            interp.engine.create_mesh(geometry, &template.material)
        }
        EntityKind::Light => {
            let light = template
                .light
                .as_ref()
                .ok_or_else(|| CmdError::InvalidArgument("Source has no light".to_string()))?;
            interp.engine.create_light(light)
        }
        EntityKind::Group => {
            return Err(CmdError::InvalidArgument(
                "Groups cannot be cloned".to_string(),
            ));
        }
    };

    let mut entity = template.clone();
    entity.id = id;
    entity.node = node;
    entity.children.clear();

    if let Some(x) = position[0] {
        entity.transform.position.x = x;
    }
    if let Some(y) = position[1] {
        entity.transform.position.y = y;
    }
    if let Some(z) = position[2] {
        entity.transform.position.z = z;
    }

    interp.engine.set_transform(node, &entity.transform);
    interp.engine.set_material(node, &entity.material);
    interp.engine.set_visible(node, entity.visible);
    interp.insert_entity(entity);
    Ok(())
}

fn position_overrides(args: &[String], from: usize) -> [Option<f32>; 3] {
    [
        args.get(from).and_then(|s| s.parse().ok()),
        args.get(from + 1).and_then(|s| s.parse().ok()),
        args.get(from + 2).and_then(|s| s.parse().ok()),
    ]
}

pub(crate) fn clone_entity(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let source_id = required(args, 0, "source id")?;
    let template = interp.entity(source_id)?.clone();
    let source_id = source_id.to_string();

    let id = match arg(args, 1) {
        Some(id) => id.to_string(),
        None => interp.registry.generate_id("clone"),
    };
    instantiate(interp, &template, id.clone(), position_overrides(args, 2))?;

    Ok(format!("Cloned '{source_id}' as '{id}'"))
}

pub(crate) fn copy_entity(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?;
    let entity = interp.entity(id)?.clone();
    let id = id.to_string();
    interp.clipboard = Some(entity);

    Ok(format!("Copied '{id}' to clipboard"))
}

pub(crate) fn paste_entity(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let template = interp.clipboard.clone().ok_or(CmdError::EmptyClipboard)?;

    let id = match arg(args, 0) {
        Some(id) => id.to_string(),
        None => interp.registry.generate_id("paste"),
    };
    instantiate(interp, &template, id.clone(), position_overrides(args, 1))?;

    Ok(format!("Pasted as '{id}'"))
}

pub(crate) fn select(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?;
    interp.entity(id)?;
    interp.selected = Some(id.to_string());

    Ok(format!("Selected '{id}'"))
}

pub(crate) fn deselect(interp: &mut Interpreter, _args: &[String]) -> CmdResult {
    interp.selected = None;
    Ok("Selection cleared".to_string())
}

pub(crate) fn hide(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();
    let entity = interp.entity_mut(&id)?;
    entity.visible = false;
    interp.push_visibility(&id);

    Ok(format!("Hidden '{id}'"))
}

pub(crate) fn show(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();
    let entity = interp.entity_mut(&id)?;
    entity.visible = true;
    interp.push_visibility(&id);

    Ok(format!("Shown '{id}'"))
}
