//! System commands: save/load slots, history, config, help, debug

use log::info;

use crate::command::CATEGORIES;
use crate::commands::arg;
use crate::error::{CmdError, CmdResult};
use crate::interp::Interpreter;

/// `save [slot]` — snapshot the engine-exported scene into a named slot
pub(crate) fn save(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let slot = arg(args, 0).unwrap_or("default").to_string();
    let data = interp.engine.export_scene()?;
    interp.saved_scenes.insert(slot.clone(), data);

    Ok(format!("Saved scene to slot '{slot}'"))
}

/// `load [slot]`
pub(crate) fn load(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let slot = arg(args, 0).unwrap_or("default");
    let data = interp
        .saved_scenes
        .get(slot)
        .cloned()
        .ok_or_else(|| CmdError::InvalidArgument(format!("No saved scene in slot '{slot}'")))?;

    interp.engine.import_scene(&data)?;
    Ok(format!("Loaded scene from slot '{slot}'"))
}

/// `history [n]` — the most recent commands, oldest first
pub(crate) fn history(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    if interp.history.is_empty() {
        return Ok("History is empty".to_string());
    }

    let n = arg(args, 0)
        .and_then(|s| s.parse().ok())
        .unwrap_or(interp.history.len());
    let lines: Vec<&str> = interp.history.last_n(n).collect();

    Ok(lines.join("\n"))
}

/// `config` prints everything; `config key value` sets one key
pub(crate) fn config(interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let Some(key) = arg(args, 0) else {
        return Ok(interp.config.describe());
    };
    let value = arg(args, 1).unwrap_or("");

    let message = interp.config.set(key, value)?;
    interp.history.set_max_size(interp.config.max_history);
    Ok(message)
}

pub(crate) fn help(_interp: &mut Interpreter, args: &[String]) -> CmdResult {
    if let Some(topic) = arg(args, 0) {
        return Ok(format!("Help for '{topic}' not implemented yet"));
    }

    Ok(r#"
Scene CLI Help
==============

Basic Usage:
  command [args...]     Execute a command
  help [topic]          Show help for specific topic
  commands              List all available commands
  examples              Show usage examples

Ultra-compact syntax examples:
  c 1 1 1 0 0 0 r       # Red cube at origin
  s 2 5 0 0 g ball      # Green sphere named 'ball'
  mv ball -2 0 0        # Move ball left
  pl 2 10 10 10         # Point light above
  an ball position.y 0 5 2  # Animate ball up
"#
    .to_string())
}

/// `commands [category]`
pub(crate) fn commands(_interp: &mut Interpreter, args: &[String]) -> CmdResult {
    if let Some(wanted) = arg(args, 0) {
        if let Some((name, cmds)) = CATEGORIES.iter().find(|(name, _)| *name == wanted) {
            return Ok(format!("{name} commands: {}", cmds.join(", ")));
        }
    }

    let mut out = String::from("Available Commands:\n");
    for (name, cmds) in CATEGORIES {
        out.push_str(&format!("\n{name}: {}", cmds.join(", ")));
    }
    Ok(out)
}

pub(crate) fn examples(_interp: &mut Interpreter, args: &[String]) -> CmdResult {
    let topic = arg(args, 0).unwrap_or("basic");

    let text = match topic {
        "basic" => {
            r#"Basic Shape Creation:
  c 2 1 1 0 0 0 r box1        # Red box 2x1x1 at origin
  s 1.5 3 0 0 g sphere1       # Green sphere radius 1.5 at (3,0,0)
  cy 1 0.5 2 0 2 0 b          # Blue cylinder at (0,2,0)

Transforms:
  mv box1 -2 0 0              # Move box left
  rt sphere1 0 1.57 0         # Rotate sphere 90 degrees
  sc box1 2 2 2               # Scale box to 2x size"#
        }
        "advanced" => {
            r#"Advanced Features:
  c 1 1 1 0 0 0 "standard:red:0.8" glass_cube
  an glass_cube rotation.y 0 6.28 5 ease-in-out
  pl 2 5 5 5 white light1
  gr box1 sphere1 light1 scene_group

Materials:
  mt box1 physical           # Change to physical material
  cl sphere1 #ff6600         # Orange color
  tx box1 "wood.jpg"         # Apply wood texture"#
        }
        "scene" => {
            r#"Scene Setup:
  clear all                  # Clear everything
  background #87CEEB         # Sky blue background
  fog linear 0.1 100 #ffffff # White fog
  grid 20                    # 20x20 grid
  axes 10                    # 10-unit axes

Camera:
  cm move 10 10 10           # Move camera
  lk 0 0 0                   # Look at origin
  orbit 45 30 15             # Orbit view"#
        }
        "animation" => {
            r#"Animation Examples:
  an box1 position.x 0 10 3           # Move box right over 3 seconds
  an sphere1 rotation.y 0 6.28 2      # Full turn over 2 seconds
  an light1 intensity 1 0 1 ease-out  # Fading light

Timeline:
  timeline scene1 0 "c 1 1 1"
  timeline scene1 1 "mv cube0 5 0 0"
  timeline scene1 2 "rt cube0 0 3.14 0""#
        }
        _ => "Unknown example topic. Try: basic, advanced, scene, animation",
    };

    Ok(text.to_string())
}

/// `debug` toggles verbose interpreter logging
pub(crate) fn debug(interp: &mut Interpreter, _args: &[String]) -> CmdResult {
    interp.debug = !interp.debug;
    let state = if interp.debug { "enabled" } else { "disabled" };
    info!("debug mode {state}");

    Ok(format!("Debug mode {state}"))
}
