//! The Raxol terminal emulator core.
//!
//! Ingests a byte stream of host program output, drives an ANSI/VT parser
//! state machine (delegated to [`raxol_vterm`]), mutates a screen model
//! (primary/alternate buffers, cursor, styles, scroll region, modes),
//! maintains a bounded scrollback, and exposes a stable [`snapshot`] for
//! downstream renderers. The reverse direction — logical key events to
//! host-bound bytes — lives in [`encode`].
//!
//! Out of scope: glyph rasterization, font shaping, pixel rendering, Sixel
//! raster decoding (payloads are accepted and stashed, not decoded), OS
//! clipboard integration, network transport, and any plugin mechanism.

#![warn(clippy::pedantic)]

pub mod config;
pub mod encode;
pub mod exec;
pub mod model;
pub mod snapshot;

pub use config::{Config, ConfigError};
pub use encode::{KeyEvent, KeyMods, LogicalKey};
pub use model::Emulator;
pub use snapshot::Snapshot;
