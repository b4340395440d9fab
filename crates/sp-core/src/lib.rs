//! `sp-core` — pieces shared by every `sp-*` crate.
//!
//! This crate has no `sp-*` dependencies.
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`error`]     | `SpError`, `SpResult`                             |
//! | [`output`]    | `write_line` — the one way demos emit text        |
//! | [`logging`]   | `init` — stderr `tracing` subscriber for binaries |

pub mod error;
pub mod logging;
pub mod output;


pub use error::{SpError, SpResult};
pub use output::write_line;
