//! Shape creation
//!
//! Two argument forms coexist. The keyed form (`pos=x,y,z`, `material=...`,
//! `id=...`) is unambiguous and wins over anything positional. The
//! positional form consumes a fixed number of geometry slots, then up to
//! three numeric position values, then a material spec, then an id; this
//! ordering is a heuristic and non-numeric ids or materials that look like
//! numbers cannot be expressed with it.

use lin_alg::f32::Vec3;
use log::debug;

use scenic_scene::{Entity, GeometryKind, GeometrySpec, MaterialSpec};

use crate::error::{CmdError, CmdResult};
use crate::interp::Interpreter;

#[derive(Debug, Default)]
struct ShapeArgs {
    geometry: Vec<Option<f32>>,
    position: [f32; 3],
    keyed_pos: bool,
    material: Option<String>,
    id: Option<String>,
}

fn parse_keyed(token: &str, out: &mut ShapeArgs) -> Result<bool, CmdError> {
    let Some((key, value)) = token.split_once('=') else {
        return Ok(false);
    };

    match key {
        "pos" | "position" => {
            for (slot, part) in out.position.iter_mut().zip(value.split(',')) {
                *slot = part.parse().unwrap_or(0.0);
            }
            out.keyed_pos = true;
        }
        "material" | "mat" | "color" => out.material = Some(value.to_string()),
        "id" | "name" => out.id = Some(value.to_string()),
        other => {
            return Err(CmdError::InvalidArgument(format!(
                "Unknown argument '{other}'"
            )));
        }
    }
    Ok(true)
}

fn parse_args(kind: GeometryKind, args: &[String]) -> Result<ShapeArgs, CmdError> {
    let mut out = ShapeArgs::default();
    let mut positional: Vec<&str> = Vec::new();

    for token in args {
        if !parse_keyed(token, &mut out)? {
            positional.push(token);
        }
    }

    let mut rest = positional.into_iter();

    // fixed geometry slots come first, defaulting per-slot
    out.geometry = rest
        .by_ref()
        .take(kind.param_count())
        .map(|tok| tok.parse().ok())
        .collect();

    let mut rest = rest.peekable();
    for slot in 0..3 {
        let Some(value) = rest.peek().and_then(|tok| tok.parse::<f32>().ok()) else {
            break;
        };
        rest.next();
        if !out.keyed_pos {
            out.position[slot] = value;
        }
    }

    if let Some(tok) = rest.peek() {
        if tok.parse::<f32>().is_err() {
            let tok = rest.next().unwrap_or_default();
            if out.material.is_none() {
                out.material = Some(tok.to_string());
            }
        }
    }
    if let Some(tok) = rest.peek() {
        if tok.parse::<f32>().is_err() {
            let tok = rest.next().unwrap_or_default();
            if out.id.is_none() {
                out.id = Some(tok.to_string());
            }
        }
    }
    if rest.peek().is_some() {
        debug!("ignoring trailing arguments after id: {:?}", rest.collect::<Vec<_>>());
    }

    Ok(out)
}

pub(crate) fn create(interp: &mut Interpreter, kind: GeometryKind, args: &[String]) -> CmdResult {
    let parsed = parse_args(kind, args)?;

    let geometry = GeometrySpec::with_args(kind, &parsed.geometry);
    let material = parsed
        .material
        .as_deref()
        .map(MaterialSpec::resolve)
        .unwrap_or_else(|| MaterialSpec::resolve("w"));

    // the counter advances even when an explicit id overrides it
    let generated = interp.registry.generate_id(kind.name());
    let id = parsed.id.unwrap_or(generated);

    let node = interp.engine.create_mesh(&geometry, &material);
    let mut entity = Entity::object(id.clone(), node, geometry, material);
    entity.transform.position = Vec3::new(
        parsed.position[0],
        parsed.position[1],
        parsed.position[2],
    );

    interp.engine.set_transform(node, &entity.transform);
    interp.engine.set_material(node, &entity.material);
    interp.insert_entity(entity);

    Ok(format!("Created {} '{}'", kind.name(), id))
}
