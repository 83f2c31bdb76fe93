//! Light creation
//!
//! Argument orders follow the compact convention: intensity first, then
//! position where the light kind has one, then color, then id. Color specs
//! accept names, `#RRGGBB`, and `0x` literals.

use lin_alg::f32::Vec3;

use scenic_scene::{Color, Entity, LightSpec};

use crate::commands::{arg, float_or};
use crate::error::CmdResult;
use crate::interp::Interpreter;

fn color_or(args: &[String], index: usize, default: Color) -> Color {
    arg(args, index).and_then(Color::parse).unwrap_or(default)
}

fn register(
    interp: &mut Interpreter,
    spec: LightSpec,
    position: Option<Vec3>,
    id: Option<&str>,
) -> String {
    let id = match id {
        Some(id) => id.to_string(),
        None => interp.registry.generate_id(spec.id_prefix()),
    };

    let node = interp.engine.create_light(&spec);
    let kind = spec.kind_name();
    let mut entity = Entity::light(id.clone(), node, spec);
    if let Some(position) = position {
        entity.transform.position = position;
    }

    interp.engine.set_transform(node, &entity.transform);
    interp.insert_entity(entity);

    format!("Created {kind} '{id}'")
}

/// `ambientLight [intensity] [color] [id]`
pub(crate) fn ambient(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let spec = LightSpec::Ambient {
        color: color_or(args, 1, Color::from_u32(0x404040)),
        intensity: float_or(args, 0, 0.5),
    };
    Ok(register(interp, spec, None, arg(args, 2)))
}

/// `directionalLight [intensity] [x y z] [color] [id]`
pub(crate) fn directional(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let spec = LightSpec::Directional {
        color: color_or(args, 4, Color::WHITE),
        intensity: float_or(args, 0, 1.0),
        cast_shadow: true,
    };
    let position = Vec3::new(
        float_or(args, 1, 0.0),
        float_or(args, 2, 10.0),
        float_or(args, 3, 0.0),
    );
    Ok(register(interp, spec, Some(position), arg(args, 5)))
}

/// `pointLight [intensity] [x y z] [color] [id]`
pub(crate) fn point(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let spec = LightSpec::Point {
        color: color_or(args, 4, Color::WHITE),
        intensity: float_or(args, 0, 1.0),
        distance: 0.0,
        decay: 2.0,
    };
    let position = Vec3::new(
        float_or(args, 1, 0.0),
        float_or(args, 2, 0.0),
        float_or(args, 3, 0.0),
    );
    Ok(register(interp, spec, Some(position), arg(args, 5)))
}

/// `spotLight [intensity] [x y z] [tx ty tz] [angle] [penumbra] [id]`
pub(crate) fn spot(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let target = arg(args, 4).map(|_| {
        [
            float_or(args, 4, 0.0),
            float_or(args, 5, 0.0),
            float_or(args, 6, 0.0),
        ]
    });
    let spec = LightSpec::Spot {
        color: Color::WHITE,
        intensity: float_or(args, 0, 1.0),
        angle: float_or(args, 7, std::f32::consts::FRAC_PI_3),
        penumbra: float_or(args, 8, 0.0),
        decay: 2.0,
        target,
    };
    let position = Vec3::new(
        float_or(args, 1, 0.0),
        float_or(args, 2, 10.0),
        float_or(args, 3, 0.0),
    );
    Ok(register(interp, spec, Some(position), arg(args, 9)))
}

/// `hemisphereLight [skyColor] [groundColor] [intensity] [id]`
pub(crate) fn hemisphere(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let spec = LightSpec::Hemisphere {
        sky: color_or(args, 0, Color::from_u32(0xffffbb)),
        ground: color_or(args, 1, Color::from_u32(0x080820)),
        intensity: float_or(args, 2, 1.0),
    };
    Ok(register(interp, spec, None, arg(args, 3)))
}
