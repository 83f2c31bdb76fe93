//! The command vocabulary
//!
//! Dispatch goes through this enum rather than a string-keyed table, so an
//! unhandled command is a compile error instead of a runtime surprise.
//! Shape creation is routed separately (see the interpreter): any canonical
//! geometry name is a command of its own.

/// Every built-in (non-shape) command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    // object manipulation
    Move,
    Rotate,
    Scale,
    Color,
    Material,
    Texture,
    Opacity,
    Visible,
    Wireframe,

    // object management
    Delete,
    Clone,
    Copy,
    Paste,
    Select,
    Deselect,
    Hide,
    Show,
    Center,
    Reset,

    // grouping
    Group,
    Ungroup,
    Parent,
    Unparent,

    // lighting
    AmbientLight,
    DirectionalLight,
    PointLight,
    SpotLight,
    HemisphereLight,

    // animation
    Animate,
    StopAnimation,
    PauseAnimation,
    ResumeAnimation,
    Timeline,

    // camera
    Camera,
    LookAt,
    Orbit,
    Zoom,

    // scene management
    Clear,
    Background,
    Fog,
    Environment,
    Grid,
    Axes,

    // introspection
    List,
    Info,
    Stats,
    Export,
    Import,
    Snapshot,
    Distance,
    Angle,
    BoundingBox,
    Raycast,

    // history and system
    Undo,
    Redo,
    Save,
    Load,
    History,
    Config,
    Help,
    Commands,
    Examples,
    Debug,
}

impl CommandKind {
    /// Resolve a canonical (post-alias) command name
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "move" => CommandKind::Move,
            "rotate" => CommandKind::Rotate,
            "scale" => CommandKind::Scale,
            "color" => CommandKind::Color,
            "material" => CommandKind::Material,
            "texture" => CommandKind::Texture,
            "opacity" => CommandKind::Opacity,
            "visible" => CommandKind::Visible,
            "wireframe" => CommandKind::Wireframe,
            "delete" => CommandKind::Delete,
            "clone" => CommandKind::Clone,
            "copy" => CommandKind::Copy,
            "paste" => CommandKind::Paste,
            "select" => CommandKind::Select,
            "deselect" => CommandKind::Deselect,
            "hide" => CommandKind::Hide,
            "show" => CommandKind::Show,
            "center" => CommandKind::Center,
            "reset" => CommandKind::Reset,
            "group" => CommandKind::Group,
            "ungroup" => CommandKind::Ungroup,
            "parent" => CommandKind::Parent,
            "unparent" => CommandKind::Unparent,
            "ambientLight" => CommandKind::AmbientLight,
            "directionalLight" => CommandKind::DirectionalLight,
            "pointLight" => CommandKind::PointLight,
            "spotLight" => CommandKind::SpotLight,
            "hemisphereLight" => CommandKind::HemisphereLight,
            "animate" => CommandKind::Animate,
            "stopAnimation" => CommandKind::StopAnimation,
            "pauseAnimation" => CommandKind::PauseAnimation,
            "resumeAnimation" => CommandKind::ResumeAnimation,
            "timeline" => CommandKind::Timeline,
            "camera" => CommandKind::Camera,
            "lookAt" => CommandKind::LookAt,
            "orbit" => CommandKind::Orbit,
            "zoom" => CommandKind::Zoom,
            "clear" => CommandKind::Clear,
            "background" => CommandKind::Background,
            "fog" => CommandKind::Fog,
            "environment" => CommandKind::Environment,
            "grid" => CommandKind::Grid,
            "axes" => CommandKind::Axes,
            "list" => CommandKind::List,
            "info" => CommandKind::Info,
            "stats" => CommandKind::Stats,
            "export" => CommandKind::Export,
            "import" => CommandKind::Import,
            "snapshot" => CommandKind::Snapshot,
            "distance" => CommandKind::Distance,
            "angle" => CommandKind::Angle,
            "boundingBox" => CommandKind::BoundingBox,
            "raycast" => CommandKind::Raycast,
            "undo" => CommandKind::Undo,
            "redo" => CommandKind::Redo,
            "save" => CommandKind::Save,
            "load" => CommandKind::Load,
            "history" => CommandKind::History,
            "config" => CommandKind::Config,
            "help" => CommandKind::Help,
            "commands" => CommandKind::Commands,
            "examples" => CommandKind::Examples,
            "debug" => CommandKind::Debug,
            _ => return None,
        };
        Some(kind)
    }
}

/// Command names grouped by category, for the `commands` listing
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Shapes",
        &[
            "cube",
            "sphere",
            "plane",
            "cylinder",
            "cone",
            "torus",
            "tetrahedron",
            "octahedron",
            "icosahedron",
            "dodecahedron",
            "ring",
            "capsule",
        ],
    ),
    ("Transforms", &["move", "rotate", "scale", "center", "reset"]),
    (
        "Materials",
        &["color", "material", "texture", "opacity", "wireframe"],
    ),
    (
        "Objects",
        &["delete", "clone", "copy", "paste", "hide", "show", "select", "info"],
    ),
    ("Groups", &["group", "ungroup", "parent", "unparent"]),
    (
        "Lights",
        &[
            "ambientLight",
            "directionalLight",
            "pointLight",
            "spotLight",
            "hemisphereLight",
        ],
    ),
    ("Camera", &["camera", "lookAt", "orbit", "zoom"]),
    (
        "Animation",
        &[
            "animate",
            "stopAnimation",
            "pauseAnimation",
            "resumeAnimation",
            "timeline",
        ],
    ),
    (
        "Scene",
        &["clear", "background", "fog", "environment", "grid", "axes"],
    ),
    (
        "Utilities",
        &[
            "list", "stats", "export", "import", "snapshot", "distance", "angle", "raycast",
        ],
    ),
    (
        "System",
        &["undo", "redo", "save", "load", "config", "help", "debug"],
    ),
];
