//! Command handlers, grouped by category
//!
//! Handlers are free functions over the interpreter; each returns its
//! user-facing success message or a `CmdError`. Argument parsing is
//! deliberately lenient: unparseable numbers take the documented default
//! rather than failing the command.

pub(crate) mod animation;
pub(crate) mod camera;
pub(crate) mod grouping;
pub(crate) mod lighting;
pub(crate) mod material;
pub(crate) mod objects;
pub(crate) mod query;
pub(crate) mod scene;
pub(crate) mod shapes;
pub(crate) mod system;
pub(crate) mod transform;

use crate::command::CommandKind;
use crate::error::{CmdError, CmdResult};
use crate::interp::Interpreter;

pub(crate) fn dispatch(interp: &mut Interpreter, kind: CommandKind, args: &[String]) -> CmdResult {
    use CommandKind::*;

    match kind {
        Move => transform::move_entity(interp, args),
        Rotate => transform::rotate_entity(interp, args),
        Scale => transform::scale_entity(interp, args),
        Center => transform::center_entity(interp, args),
        Reset => transform::reset_entity(interp, args),

        Color => material::color_entity(interp, args),
        Material => material::set_material(interp, args),
        Texture => material::set_texture(interp, args),
        Opacity => material::set_opacity(interp, args),
        Visible => material::set_visibility(interp, args),
        Wireframe => material::toggle_wireframe(interp, args),

        Delete => objects::delete(interp, args),
        Clone => objects::clone_entity(interp, args),
        Copy => objects::copy_entity(interp, args),
        Paste => objects::paste_entity(interp, args),
        Select => objects::select(interp, args),
        Deselect => objects::deselect(interp, args),
        Hide => objects::hide(interp, args),
        Show => objects::show(interp, args),

        Group => grouping::group(interp, args),
        Ungroup => grouping::ungroup(interp, args),
        Parent => grouping::parent(interp, args),
        Unparent => grouping::unparent(interp, args),

        AmbientLight => lighting::ambient(interp, args),
        DirectionalLight => lighting::directional(interp, args),
        PointLight => lighting::point(interp, args),
        SpotLight => lighting::spot(interp, args),
        HemisphereLight => lighting::hemisphere(interp, args),

        Animate => animation::animate(interp, args),
        StopAnimation => animation::stop(interp, args),
        PauseAnimation => Err(CmdError::Unimplemented("Animation pause")),
        ResumeAnimation => Err(CmdError::Unimplemented("Animation resume")),
        Timeline => animation::timeline(interp, args),

        Camera => camera::control(interp, args),
        LookAt => camera::look_at(interp, args),
        Orbit => camera::orbit(interp, args),
        Zoom => camera::zoom(interp, args),

        Clear => scene::clear(interp, args),
        Background => scene::background(interp, args),
        Fog => scene::fog(interp, args),
        Environment => scene::environment(interp, args),
        Grid => scene::grid(interp, args),
        Axes => scene::axes(interp, args),

        List => query::list(interp, args),
        Info => query::info(interp, args),
        Stats => query::stats(interp, args),
        Export => query::export(interp, args),
        Import => query::import(interp, args),
        Snapshot => query::snapshot(interp, args),
        Distance => query::distance(interp, args),
        Angle => query::angle(interp, args),
        BoundingBox => query::bounding_box(interp, args),
        Raycast => query::raycast(interp, args),

        Undo => Err(CmdError::Unimplemented("Undo")),
        Redo => Err(CmdError::Unimplemented("Redo")),
        Save => system::save(interp, args),
        Load => system::load(interp, args),
        History => system::history(interp, args),
        Config => system::config(interp, args),
        Help => system::help(interp, args),
        Commands => system::commands(interp, args),
        Examples => system::examples(interp, args),
        Debug => system::debug(interp, args),
    }
}

/// `args[index]` as a float, or `default` when absent or unparseable
pub(crate) fn float_or(args: &[String], index: usize, default: f32) -> f32 {
    args.get(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

pub(crate) fn arg(args: &[String], index: usize) -> Option<&str> {
    args.get(index).map(String::as_str)
}

pub(crate) fn required<'a>(args: &'a [String], index: usize, what: &str) -> Result<&'a str, CmdError> {
    arg(args, index).ok_or_else(|| CmdError::InvalidArgument(format!("Missing argument: {what}")))
}
