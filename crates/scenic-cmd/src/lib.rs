//! Command interpreter for scenic.
//!
//! A compact textual command language over a live 3D scene: shape creation
//! with ultra-short aliases (`c 1 1 1 0 0 0 r box1`), transforms, materials,
//! lights, grouping, camera control, property animation, and scene
//! introspection. Commands never panic the caller: every line yields a
//! [`CommandOutput`] with a success flag and a message.
//!
//! ```no_run
//! use scenic_cmd::Interpreter;
//!
//! let mut cli = Interpreter::headless();
//! cli.execute("c 2 1 1 0 0 0 r box1");
//! cli.execute("an box1 rotation.y 0 6.28 3");
//! cli.tick(16.0);
//! ```

pub mod alias;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod interp;
pub mod token;

pub use command::CommandKind;
pub use config::Config;
pub use error::{CmdError, CmdResult};
pub use history::CommandHistory;
pub use interp::{CommandOutput, Interpreter};
