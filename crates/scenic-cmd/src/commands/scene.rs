//! Scene environment: clear, background, fog, environment, grid, axes

use scenic_scene::{Color, EntityKind, FogSpec, HelperKind};

use crate::commands::{arg, float_or, required};
use crate::error::{CmdError, CmdResult};
use crate::interp::Interpreter;

fn clear_kind(interp: &mut Interpreter, kind: EntityKind) {
    for entity in interp.registry.drain_kind(kind) {
        interp.engine.remove_from_scene(entity.node);
        interp.engine.free_node(entity.node);
    }
}

/// `clear [all|objects|lights|groups]`
pub(crate) fn clear(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let which = arg(args, 0).unwrap_or("all");

    let message = match which {
        "all" => {
            clear_kind(interp, EntityKind::Object);
            clear_kind(interp, EntityKind::Light);
            clear_kind(interp, EntityKind::Group);
            interp.selected = None;
            "Cleared entire scene"
        }
        "objects" => {
            clear_kind(interp, EntityKind::Object);
            "Cleared all objects"
        }
        "lights" => {
            clear_kind(interp, EntityKind::Light);
            "Cleared all lights"
        }
        "groups" => {
            clear_kind(interp, EntityKind::Group);
            "Cleared all groups"
        }
        other => {
            return Err(CmdError::InvalidArgument(format!(
                "Unknown clear type: {other}"
            )));
        }
    };

    Ok(message.to_string())
}

pub(crate) fn background(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let spec = required(args, 0, "color")?;
    let color = Color::parse(spec)
        .ok_or_else(|| CmdError::InvalidArgument(format!("Invalid color: {spec}")))?;

    interp.engine.set_background(color);
    Ok(format!("Set background to {spec}"))
}

/// `fog linear near far [color] | fog exp density [color] | fog none`
pub(crate) fn fog(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let kind = required(args, 0, "fog type")?;

    match kind {
        "linear" => {
            let near = float_or(args, 1, 1.0);
            let far = float_or(args, 2, 1000.0);
            let color = arg(args, 3).and_then(Color::parse).unwrap_or(Color::WHITE);
            interp
                .engine
                .set_fog(Some(FogSpec::Linear { color, near, far }));
            Ok(format!("Set linear fog from {near} to {far}"))
        }
        "exp" => {
            let density = float_or(args, 1, 0.00025);
            let color = arg(args, 2).and_then(Color::parse).unwrap_or(Color::WHITE);
            interp
                .engine
                .set_fog(Some(FogSpec::Exponential { color, density }));
            Ok(format!("Set exponential fog with density {density}"))
        }
        "none" => {
            interp.engine.set_fog(None);
            Ok("Removed fog".to_string())
        }
        other => Err(CmdError::InvalidArgument(format!(
            "Unknown fog type: {other}. Use 'linear', 'exp', or 'none'"
        ))),
    }
}

pub(crate) fn environment(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let name = required(args, 0, "environment name")?;
    interp.engine.set_environment(name);
    Ok(format!("Set environment to '{name}'"))
}

/// `grid [size divisions]` toggles the ground grid
pub(crate) fn grid(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    if interp.engine.helper_enabled(HelperKind::Grid) {
        interp.engine.set_helper(HelperKind::Grid, false, 0.0, 0);
        return Ok("Grid hidden".to_string());
    }

    let size = float_or(args, 0, 10.0);
    let divisions = float_or(args, 1, 10.0) as u32;
    interp
        .engine
        .set_helper(HelperKind::Grid, true, size, divisions);
    Ok("Grid shown".to_string())
}

/// `axes [size]` toggles the axis helper
pub(crate) fn axes(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    if interp.engine.helper_enabled(HelperKind::Axes) {
        interp.engine.set_helper(HelperKind::Axes, false, 0.0, 0);
        return Ok("Axes hidden".to_string());
    }

    let size = float_or(args, 0, 5.0);
    interp.engine.set_helper(HelperKind::Axes, true, size, 0);
    Ok("Axes shown".to_string())
}
