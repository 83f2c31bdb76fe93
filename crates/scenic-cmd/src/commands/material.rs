//! Material commands: color, material, texture, opacity, visible, wireframe

use log::debug;

use scenic_scene::{Color, EntityKind, ShadingModel};

use crate::commands::{arg, float_or, required};
use crate::error::{CmdError, CmdResult};
use crate::interp::Interpreter;

pub(crate) fn color_entity(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();
    let spec = required(args, 1, "color")?;
    let color = Color::parse(spec)
        .ok_or_else(|| CmdError::InvalidArgument(format!("Invalid color: {spec}")))?;
    let spec = spec.to_string();

    let entity = interp.entity_mut(&id)?;
    entity.material.color = color;
    entity.material.preset = None;
    interp.push_material(&id);

    Ok(format!("Set color for '{id}' to {spec}"))
}

/// Rebuild an entity's material from a shading model plus property pairs,
/// e.g. `material box1 phong color red opacity 0.5`
pub(crate) fn set_material(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();
    let model_name = required(args, 1, "material type")?.to_string();

    let entity = interp
        .registry
        .get_mut(&id)
        .filter(|e| e.kind == EntityKind::Object)
        .ok_or_else(|| CmdError::NoMaterial(id.clone()))?;

    entity.material.shading = ShadingModel::from_name(&model_name);
    entity.material.preset = None;

    let mut pairs = args[2..].chunks_exact(2);
    for pair in &mut pairs {
        let (prop, value) = (pair[0].as_str(), pair[1].as_str());
        match prop {
            "color" => {
                entity.material.color = Color::parse(value).unwrap_or(Color::WHITE);
            }
            "opacity" => {
                entity.material.opacity = value.parse().unwrap_or(1.0);
            }
            "transparent" => entity.material.transparent = value == "true",
            "wireframe" => entity.material.wireframe = value == "true",
            "visible" => entity.visible = value == "true",
            other => debug!("ignoring unsupported material property '{other}'"),
        }
    }

    interp.push_material(&id);
    interp.push_visibility(&id);

    Ok(format!("Set material for '{id}' to {model_name}"))
}

/// Start an asynchronous texture load. The command reports success as soon
/// as the load is underway; completion and failure are observed on tick.
pub(crate) fn set_texture(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();
    let url = required(args, 1, "texture url")?.to_string();
    let repeat_u = float_or(args, 2, 1.0);
    let repeat_v = float_or(args, 3, 1.0);

    let entity = interp
        .registry
        .get(&id)
        .filter(|e| e.kind == EntityKind::Object)
        .ok_or_else(|| CmdError::NoMaterial(id.clone()))?;
    let node = entity.node;

    let ticket = interp
        .engine
        .begin_texture_load(node, &url, (repeat_u, repeat_v));
    interp.pending_textures.push((ticket, id.clone(), url.clone()));

    if let Some(entity) = interp.registry.get_mut(&id) {
        entity.material.texture = Some(url.clone());
    }

    Ok(format!("Loading texture '{url}' for '{id}'"))
}

/// Opacity below 1 implicitly enables transparency
pub(crate) fn set_opacity(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();
    let opacity = float_or(args, 1, 1.0);

    let entity = interp
        .registry
        .get_mut(&id)
        .filter(|e| e.kind == EntityKind::Object)
        .ok_or_else(|| CmdError::NoMaterial(id.clone()))?;

    entity.material.opacity = opacity;
    if opacity < 1.0 {
        entity.material.transparent = true;
    }
    interp.push_material(&id);

    Ok(format!("Set opacity for '{id}' to {opacity}"))
}

pub(crate) fn set_visibility(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();
    let visible = matches!(arg(args, 1), Some("true") | Some("1"));

    let entity = interp.entity_mut(&id)?;
    entity.visible = visible;
    interp.push_visibility(&id);

    Ok(format!("Set visibility for '{id}' to {visible}"))
}

pub(crate) fn toggle_wireframe(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?.to_string();

    let entity = interp
        .registry
        .get_mut(&id)
        .filter(|e| e.kind == EntityKind::Object)
        .ok_or_else(|| CmdError::NoMaterial(id.clone()))?;

    entity.material.wireframe = !entity.material.wireframe;
    let state = if entity.material.wireframe {
        "enabled"
    } else {
        "disabled"
    };
    interp.push_material(&id);

    Ok(format!("Wireframe {state} for '{id}'"))
}
