//! Introspection: list, info, stats, distance, angle, boundingBox,
//! raycast, and the engine pass-throughs export/import/snapshot

use lin_alg::f32::Vec3;

use scenic_scene::{EntityKind, MaterialSpec};

use crate::commands::{arg, float_or, required};
use crate::error::{CmdError, CmdResult};
use crate::interp::Interpreter;

/// `list [filter]` — ids per table, filtered by substring
pub(crate) fn list(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let filter = arg(args, 0).unwrap_or("");

    let section = |label: &str, kind: EntityKind| {
        let ids: Vec<&str> = interp
            .registry
            .sorted_ids(kind)
            .into_iter()
            .filter(|id| id.contains(filter))
            .collect();
        if ids.is_empty() {
            None
        } else {
            Some(format!("{label}: {}", ids.join(", ")))
        }
    };

    let sections: Vec<String> = [
        section("Objects", EntityKind::Object),
        section("Lights", EntityKind::Light),
        section("Groups", EntityKind::Group),
    ]
    .into_iter()
    .flatten()
    .collect();

    if sections.is_empty() {
        Ok("No objects found".to_string())
    } else {
        Ok(sections.join("\n"))
    }
}

pub(crate) fn info(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?;
    let entity = interp.entity(id)?;

    let fmt = |v: &Vec3| format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z);

    let mut out = format!("Object '{id}' Info:\n");
    out.push_str(&format!("  type: {}\n", entity.type_name()));
    out.push_str(&format!("  position: {}\n", fmt(&entity.transform.position)));
    out.push_str(&format!("  rotation: {}\n", fmt(&entity.transform.rotation)));
    out.push_str(&format!("  scale: {}\n", fmt(&entity.transform.scale)));
    out.push_str(&format!("  visible: {}\n", entity.visible));
    out.push_str(&format!("  castShadow: {}\n", entity.cast_shadow));
    out.push_str(&format!("  receiveShadow: {}\n", entity.receive_shadow));
    if entity.kind == EntityKind::Object {
        out.push_str(&format!("  material: {}\n", entity.material.describe()));
    }
    if let Some(light) = &entity.light {
        out.push_str(&format!("  intensity: {}\n", light.intensity()));
    }

    Ok(out)
}

pub(crate) fn stats(interp: &mut Interpreter, _args: &[String]) -> CmdResult {
    let (objects, lights, groups) = interp.registry.counts();

    let mut out = String::from("Scene Statistics:\n");
    out.push_str(&format!("  objects: {objects}\n"));
    out.push_str(&format!("  lights: {lights}\n"));
    out.push_str(&format!("  groups: {groups}\n"));
    out.push_str(&format!("  animations: {}\n", interp.animations.len()));
    out.push_str(&format!("  materials: {}\n", MaterialSpec::PRESET_COUNT));
    out.push_str(&format!(
        "  pendingTextures: {}\n",
        interp.pending_textures.len()
    ));

    Ok(out)
}

pub(crate) fn export(interp: &mut Interpreter, _args: &[String]) -> CmdResult {
    Ok(interp.engine.export_scene()?)
}

pub(crate) fn import(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let data = required(args, 0, "scene data")?;
    interp.engine.import_scene(data)?;
    Ok("Imported scene".to_string())
}

pub(crate) fn snapshot(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    Ok(interp.engine.snapshot(arg(args, 0))?)
}

/// `distance id1 id2` at the configured precision
pub(crate) fn distance(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id1 = required(args, 0, "first object id")?;
    let id2 = required(args, 1, "second object id")?;

    let p1 = interp.entity(id1)?.transform.position;
    let p2 = interp.entity(id2)?.transform.position;
    let distance = (p1 - p2).magnitude();

    Ok(format!(
        "Distance between '{id1}' and '{id2}': {distance:.prec$}",
        prec = interp.config.precision
    ))
}

/// `angle id1 id2 id3` — the angle at the vertex `id2`, in degrees
pub(crate) fn angle(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id1 = required(args, 0, "first object id")?;
    let id2 = required(args, 1, "vertex object id")?;
    let id3 = required(args, 2, "third object id")?;

    let p1 = interp.entity(id1)?.transform.position;
    let p2 = interp.entity(id2)?.transform.position;
    let p3 = interp.entity(id3)?.transform.position;

    let v1 = p1 - p2;
    let v2 = p3 - p2;
    let m1 = v1.magnitude();
    let m2 = v2.magnitude();
    if m1 < 1e-6 || m2 < 1e-6 {
        return Err(CmdError::InvalidArgument(
            "Objects are coincident, angle is undefined".to_string(),
        ));
    }

    let cos = (v1.dot(v2) / (m1 * m2)).clamp(-1.0, 1.0);
    let degrees = cos.acos().to_degrees();

    Ok(format!(
        "Angle at '{id2}' between '{id1}' and '{id3}': {degrees:.1} degrees"
    ))
}

pub(crate) fn bounding_box(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?;
    let entity = interp.entity(id)?;

    if entity.geometry.is_none() {
        return Err(CmdError::InvalidArgument(format!(
            "Object '{id}' has no geometry"
        )));
    }
    let bb = interp
        .engine
        .bounding_box(entity.node)
        .ok_or_else(|| CmdError::InvalidArgument(format!("Object '{id}' has no geometry")))?;

    let size = bb.size();
    let center = bb.center();
    Ok(format!(
        "Bounding box for '{id}':\n  Size: ({:.2}, {:.2}, {:.2})\n  Center: ({:.2}, {:.2}, {:.2})",
        size.x, size.y, size.z, center.x, center.y, center.z
    ))
}

/// `raycast [ox oy oz dx dy dz]` — first hit over the object table
pub(crate) fn raycast(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let origin = Vec3::new(
        float_or(args, 0, 0.0),
        float_or(args, 1, 0.0),
        float_or(args, 2, 0.0),
    );
    let mut direction = Vec3::new(
        float_or(args, 3, 0.0),
        float_or(args, 4, -1.0),
        float_or(args, 5, 0.0),
    );
    if direction.magnitude() < 1e-6 {
        direction = Vec3::new(0.0, -1.0, 0.0);
    }
    let direction = direction.to_normalized();

    let hits = interp.engine.raycast(origin, direction);
    let Some((hit, entity)) = hits
        .iter()
        .find_map(|hit| interp.registry.object_by_node(hit.node).map(|e| (hit, e)))
    else {
        return Ok("No intersections found".to_string());
    };

    Ok(format!(
        "Raycast hit '{}' at distance {:.3}, point: ({:.2}, {:.2}, {:.2})",
        entity.id, hit.distance, hit.point.x, hit.point.y, hit.point.z
    ))
}
