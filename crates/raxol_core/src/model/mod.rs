//! The owned data model: cells, cursor, buffers, scrollback, and the
//! `Emulator` that ties them together (spec §3).

pub mod buffer;
pub mod cell;
pub mod color;
pub mod cursor;
pub mod dirty;
pub mod emulator;
pub mod modes;
pub mod scroll_region;
pub mod scrollback;

pub use buffer::{Buffer, BufferKind};
pub use cell::{Cell, Codepoint};
pub use color::{Color, StyleAttr, Underline};
pub use cursor::{CharsetState, Cursor, GSet, SavedCursor};
pub use dirty::DirtyRows;
pub use emulator::Emulator;
pub use modes::Modes;
pub use scroll_region::ScrollRegion;
pub use scrollback::Scrollback;
