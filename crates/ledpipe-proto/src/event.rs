use crate::color::Color;
use crate::device::DeviceTarget;
use crate::led::LedId;

/// The decoded, semantic effect of one frame.
///
/// Events are ephemeral: the interpreter produces one per frame, the state
/// store applies it, and it is discarded. Addresses are already resolved to
/// canonical LED ids — translation misses never reach the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightingEvent {
    /// Fill every LED (per-key targets) or the background (everything else).
    SetGlobal(Color),
    /// Set one key's color.
    SetKey { led: LedId, color: Color },
    /// Set every mapped bitmap cell's color. Exclusions are applied by the
    /// store, which owns the sticky exclusion set.
    SetBitmap(Vec<(LedId, Color)>),
    /// Switch the device-target mode.
    SetMode(DeviceTarget),
    /// Add keys to the bitmap exclusion set.
    ExcludeKeys(Vec<LedId>),
    /// Clear all state back to defaults (the protocol's shutdown).
    Reset,
    /// A client-side log line forwarded through the pipe.
    Log(String),
    /// No effect: informational commands, unmodeled effects, unknown ids,
    /// malformed payloads, and unmapped addresses.
    Ignore,
}
