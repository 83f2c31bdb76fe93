//! Transform commands: move, rotate, scale, center, reset

use lin_alg::f32::Vec3;

use crate::commands::{float_or, required};
use crate::error::CmdResult;
use crate::interp::Interpreter;

pub(crate) fn move_entity(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();
    let x = float_or(args, 1, 0.0);
    let y = float_or(args, 2, 0.0);
    let z = float_or(args, 3, 0.0);

    let entity = interp.entity_mut(&id)?;
    entity.transform.position = Vec3::new(x, y, z);
    interp.push_transform(&id);

    Ok(format!("Moved '{id}' to ({x}, {y}, {z})"))
}

pub(crate) fn rotate_entity(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();
    let x = float_or(args, 1, 0.0);
    let y = float_or(args, 2, 0.0);
    let z = float_or(args, 3, 0.0);

    let entity = interp.entity_mut(&id)?;
    entity.transform.rotation = Vec3::new(x, y, z);
    interp.push_transform(&id);

    Ok(format!("Rotated '{id}' to ({x}, {y}, {z})"))
}

/// Missing or invalid Y/Z fall back to the X value, so `scale id 2` scales
/// uniformly; an invalid X falls back to 1
pub(crate) fn scale_entity(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();
    let sx = float_or(args, 1, 1.0);
    let sy = float_or(args, 2, sx);
    let sz = float_or(args, 3, sx);

    let entity = interp.entity_mut(&id)?;
    entity.transform.scale = Vec3::new(sx, sy, sz);
    interp.push_transform(&id);

    Ok(format!("Scaled '{id}' to ({sx}, {sy}, {sz})"))
}

/// Recenter a mesh so its bounding-box center sits at the origin; entities
/// without geometry just move to the origin
pub(crate) fn center_entity(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();
    let entity = interp.entity(&id)?;

    let offset = if entity.geometry.is_some() {
        interp.engine.bounding_box(entity.node).map(|bb| bb.center())
    } else {
        None
    };

    let entity = interp.entity_mut(&id)?;
    match offset {
        Some(center) => {
            entity.transform.position = entity.transform.position - center;
        }
        None => entity.transform.position = Vec3::new(0.0, 0.0, 0.0),
    }
    interp.push_transform(&id);

    Ok(format!("Centered '{id}'"))
}

pub(crate) fn reset_entity(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();

    let entity = interp.entity_mut(&id)?;
    entity.transform = Default::default();
    interp.push_transform(&id);

    Ok(format!("Reset transforms for '{id}'"))
}
