//! Protocol model for the vendor LED SDK.
//!
//! Everything in this crate is pure data and pure functions: the command id
//! table, the canonical LED universe with its four address-translation
//! schemes, and the stateless interpreter that turns `(command id, payload)`
//! into a [`LightingEvent`]. No I/O, no shared state — fully unit-testable
//! without a live connection.

pub mod color;
pub mod command;
pub mod decode;
pub mod device;
pub mod event;
pub mod keymap;
pub mod led;

pub use color::Color;
pub use command::Command;
pub use decode::decode;
pub use device::DeviceTarget;
pub use event::LightingEvent;
pub use keymap::{BITMAP_BYTES_PER_CELL, BITMAP_HEIGHT, BITMAP_SIZE, BITMAP_WIDTH};
pub use led::LedId;
