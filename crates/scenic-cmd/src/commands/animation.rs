//! Animation commands: animate, stopAnimation, timeline

use scenic_scene::{Easing, PropertyPath};

use crate::commands::{arg, float_or, required};
use crate::error::{CmdError, CmdResult};
use crate::interp::{Interpreter, TimelineEntry};

/// `animate id property from to durationSeconds [easing]`
pub(crate) fn animate(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?;
    let property = required(args, 1, "property path")?.to_string();
    interp.entity(id)?;
    let id = id.to_string();

    let path = PropertyPath::parse(&property).map_err(CmdError::InvalidArgument)?;
    let from = float_or(args, 2, 0.0);
    let to = float_or(args, 3, 0.0);
    let duration_ms = float_or(args, 4, 0.0) * 1000.0;
    let easing = Easing::from_name(arg(args, 5).unwrap_or("linear"));

    let anim_id = interp
        .animations
        .spawn(id, path, property, from, to, duration_ms, easing);

    Ok(format!("Created animation '{anim_id}'"))
}

/// `stopAnimation id [property]` removes matching running animations
pub(crate) fn stop(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let id = required(args, 0, "object id")?;
    let removed = interp.animations.stop_for_target(id, arg(args, 1));

    Ok(format!("Stopped {removed} animation(s) for '{id}'"))
}

/// `timeline name atSeconds "command"` schedules a command for a future
/// tick. The offset counts from the first tick after scheduling.
pub(crate) fn timeline(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let name = required(args, 0, "timeline name")?.to_string();
    let at_seconds = float_or(args, 1, 0.0);
    let command = required(args, 2, "command")?.to_string();

    interp.timeline.push(TimelineEntry {
        name: name.clone(),
        offset_ms: f64::from(at_seconds) * 1000.0,
        command,
        armed_at: None,
    });

    Ok(format!("Scheduled '{name}' at {at_seconds}s"))
}
