//! Terminal chess (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_chess::{core,input,term,types}` and owns the
//! runtime configuration used by the binary.

pub mod config;

pub use tui_chess_core as core;
pub use tui_chess_input as input;
pub use tui_chess_term as term;
pub use tui_chess_types as types;

pub use config::AppConfig;
