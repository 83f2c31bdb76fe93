//! The interpreter: state, dispatch, batch execution, and the render tick

use ahash::AHashMap;
use log::{debug, warn};

use scenic_scene::{
    AnimationEngine, CameraState, Entity, GeometryKind, HeadlessEngine, RenderEngine,
    SceneRegistry, TextureStatus, TextureTicket,
};

use crate::alias;
use crate::command::CommandKind;
use crate::commands;
use crate::config::Config;
use crate::error::CmdError;
use crate::history::CommandHistory;
use crate::token::tokenize;

/// What every command returns to the caller. Handler errors are flattened
/// into `{ok: false, message}` here; nothing propagates past the
/// interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub ok: bool,
    pub message: String,
}

impl CommandOutput {
    fn success(message: impl Into<String>) -> Self {
        CommandOutput {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        CommandOutput {
            ok: false,
            message: message.into(),
        }
    }
}

/// A command scheduled for deferred execution. The offset counts from the
/// first tick that sees the entry, like an animation.
#[derive(Debug)]
pub(crate) struct TimelineEntry {
    pub name: String,
    pub offset_ms: f64,
    pub command: String,
    pub armed_at: Option<f64>,
}

/// Owns all interpreter state and a render engine.
///
/// Time never advances on its own: the embedder calls
/// [`tick`](Interpreter::tick) once per frame with a monotonic timestamp,
/// which runs due timeline entries, advances animations, polls texture
/// loads, and issues the frame's draw call.
pub struct Interpreter {
    pub(crate) engine: Box<dyn RenderEngine>,
    pub(crate) registry: SceneRegistry,
    pub(crate) camera: CameraState,
    pub(crate) animations: AnimationEngine,
    pub(crate) timeline: Vec<TimelineEntry>,
    pub(crate) clipboard: Option<Entity>,
    pub(crate) selected: Option<String>,
    pub(crate) config: Config,
    pub(crate) history: CommandHistory,
    pub(crate) saved_scenes: AHashMap<String, String>,
    /// (ticket, entity id, url) for in-flight texture loads
    pub(crate) pending_textures: Vec<(TextureTicket, String, String)>,
    pub(crate) debug: bool,
}

impl Interpreter {
    pub fn new(engine: Box<dyn RenderEngine>) -> Self {
        Self::with_config(engine, Config::default())
    }

    pub fn with_config(engine: Box<dyn RenderEngine>, config: Config) -> Self {
        let history = CommandHistory::new(config.max_history);
        Interpreter {
            engine,
            registry: SceneRegistry::new(),
            camera: CameraState::default(),
            animations: AnimationEngine::new(),
            timeline: Vec::new(),
            clipboard: None,
            selected: None,
            config,
            history,
            saved_scenes: AHashMap::new(),
            pending_textures: Vec::new(),
            debug: false,
        }
    }

    /// An interpreter over the bundled no-output engine
    pub fn headless() -> Self {
        Self::new(Box::new(HeadlessEngine::new()))
    }

    /// Execute one command line (or a batch, if the input contains line
    /// breaks)
    pub fn execute(&mut self, command: &str) -> CommandOutput {
        if command.is_empty() {
            return CommandOutput::failure("Invalid command");
        }
        if command.contains('\n') {
            return self.batch(command);
        }

        let tokens = tokenize(command.trim());
        if tokens.is_empty() {
            return CommandOutput::success("");
        }

        if self.config.enable_history {
            self.history.set_max_size(self.config.max_history);
            self.history.push(command);
        }

        let canonical = alias::resolve(&tokens[0]).to_string();
        let args = &tokens[1..];

        let result = if let Some(kind) = GeometryKind::from_name(&canonical) {
            commands::shapes::create(self, kind, args)
        } else if let Some(cmd) = CommandKind::from_name(&canonical) {
            commands::dispatch(self, cmd, args)
        } else {
            Err(CmdError::UnknownCommand(canonical.clone()))
        };

        if self.config.auto_render {
            self.engine.render();
        }

        match result {
            Ok(message) => CommandOutput::success(message),
            Err(err) => {
                debug!("command '{canonical}' failed: {err}");
                CommandOutput::failure(err.to_string())
            }
        }
    }

    /// Execute a multi-line script. Blank lines are ignored; `#` and `//`
    /// lines are comments and neither run nor count. Failing lines record
    /// their error and execution continues.
    pub fn batch(&mut self, commands: &str) -> CommandOutput {
        let mut results = Vec::new();
        let mut executed = 0usize;

        for line in commands.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
                continue;
            }
            let result = self.execute(line);
            executed += 1;
            results.push(format!("{line}: {}", result.message));
        }

        CommandOutput::success(format!(
            "Executed {executed} commands:\n{}",
            results.join("\n")
        ))
    }

    /// Advance one frame: fire due timeline entries, step animations, poll
    /// texture loads, and render. `now_ms` must be monotonic across calls.
    pub fn tick(&mut self, now_ms: f64) {
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.timeline.len() {
            let entry = &mut self.timeline[i];
            let armed = *entry.armed_at.get_or_insert(now_ms);
            if now_ms - armed >= entry.offset_ms {
                due.push(self.timeline.remove(i));
            } else {
                i += 1;
            }
        }
        for entry in due {
            let result = self.execute(&entry.command);
            if !result.ok {
                warn!(
                    "timeline '{}' command '{}' failed: {}",
                    entry.name, entry.command, result.message
                );
            }
        }

        self.animations
            .update(now_ms, &mut self.registry, self.engine.as_mut());

        let mut pending = std::mem::take(&mut self.pending_textures);
        pending.retain(|(ticket, id, url)| match self.engine.texture_status(*ticket) {
            TextureStatus::Pending => true,
            TextureStatus::Ready => {
                debug!("texture '{url}' applied to '{id}'");
                false
            }
            TextureStatus::Failed => {
                warn!("failed to load texture '{url}' for '{id}'");
                false
            }
        });
        pending.append(&mut self.pending_textures);
        self.pending_textures = pending;

        self.engine.render();
    }

    /// Texture loads started but not yet resolved by a tick
    pub fn pending_texture_loads(&self) -> usize {
        self.pending_textures.len()
    }

    pub fn active_animations(&self) -> usize {
        self.animations.len()
    }

    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn engine(&self) -> &dyn RenderEngine {
        self.engine.as_ref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    // --------------------------------------------------------------------
    // Shared plumbing for command handlers
    // --------------------------------------------------------------------

    pub(crate) fn entity(&self, id: &str) -> Result<&Entity, CmdError> {
        self.registry
            .get(id)
            .ok_or_else(|| CmdError::EntityNotFound(id.to_string()))
    }

    pub(crate) fn entity_mut(&mut self, id: &str) -> Result<&mut Entity, CmdError> {
        self.registry
            .get_mut(id)
            .ok_or_else(|| CmdError::EntityNotFound(id.to_string()))
    }

    /// Insert an entity, attached at top level. A previous holder of the
    /// same id in the same table is removed from the scene first.
    pub(crate) fn insert_entity(&mut self, entity: Entity) {
        self.engine.add_to_scene(entity.node);
        if let Some(old) = self.registry.insert(entity) {
            self.engine.remove_from_scene(old.node);
            self.engine.free_node(old.node);
        }
    }

    /// Remove an entity from both the registry and the scene graph
    pub(crate) fn remove_entity(&mut self, id: &str) -> Option<Entity> {
        let entity = self.registry.remove(id)?;
        self.engine.remove_from_scene(entity.node);
        self.engine.free_node(entity.node);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Some(entity)
    }

    pub(crate) fn push_transform(&mut self, id: &str) {
        if let Some(entity) = self.registry.get(id) {
            self.engine.set_transform(entity.node, &entity.transform);
        }
    }

    pub(crate) fn push_material(&mut self, id: &str) {
        if let Some(entity) = self.registry.get(id) {
            self.engine.set_material(entity.node, &entity.material);
        }
    }

    pub(crate) fn push_visibility(&mut self, id: &str) {
        if let Some(entity) = self.registry.get(id) {
            self.engine.set_visible(entity.node, entity.visible);
        }
    }
}
