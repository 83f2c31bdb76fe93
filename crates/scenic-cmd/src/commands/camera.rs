//! Camera commands: camera, lookAt, orbit, zoom

use lin_alg::f32::Vec3;

use crate::commands::{float_or, required};
use crate::error::{CmdError, CmdResult};
use crate::interp::Interpreter;

/// `camera move|rotate|fov ...`
pub(crate) fn control(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let action = required(args, 0, "camera action")?;

    let message = match action {
        "move" => {
            let x = float_or(args, 1, 0.0);
            let y = float_or(args, 2, 0.0);
            let z = float_or(args, 3, 0.0);
            interp.camera.move_to(x, y, z);
            format!("Moved camera to ({x}, {y}, {z})")
        }
        "rotate" => {
            let rx = float_or(args, 1, 0.0);
            let ry = float_or(args, 2, 0.0);
            let rz = float_or(args, 3, 0.0);
            interp.camera.rotate_to(rx, ry, rz);
            format!("Rotated camera to ({rx}, {ry}, {rz})")
        }
        "fov" => {
            let fov = float_or(args, 1, 75.0);
            interp.camera.fov = fov;
            format!("Set camera FOV to {fov}")
        }
        other => {
            return Err(CmdError::InvalidArgument(format!(
                "Unknown camera action: {other}"
            )));
        }
    };

    interp.engine.update_camera(&interp.camera);
    Ok(message)
}

pub(crate) fn look_at(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let x = float_or(args, 0, 0.0);
    let y = float_or(args, 1, 0.0);
    let z = float_or(args, 2, 0.0);

    interp.camera.look_at(Vec3::new(x, y, z));
    interp.engine.update_camera(&interp.camera);

    Ok(format!("Camera looking at ({x}, {y}, {z})"))
}

/// `orbit radius azimuth° elevation°` — spherical coordinates around the
/// origin, looking at the origin
pub(crate) fn orbit(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let radius = float_or(args, 0, 10.0);
    let azimuth = float_or(args, 1, 0.0);
    let elevation = float_or(args, 2, 0.0);

    interp.camera.orbit(radius, azimuth, elevation);
    interp.engine.update_camera(&interp.camera);

    Ok(format!(
        "Camera orbiting at radius {radius}, azimuth {azimuth}°, elevation {elevation}°"
    ))
}

/// `zoom factor` — scale the camera's distance from the origin by
/// `1/factor`
pub(crate) fn zoom(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let factor = float_or(args, 0, 1.0);
    if factor <= 0.0 {
        return Err(CmdError::InvalidArgument(format!(
            "Invalid zoom factor: {factor}"
        )));
    }

    interp.camera.zoom(factor);
    interp.engine.update_camera(&interp.camera);

    Ok(format!("Camera zoomed by {factor}"))
}
