//! The four vendor addressing schemes, mapped onto the canonical LED space.
//!
//! One row per key: the vendor symbolic key-name code (scan-code derived,
//! `0x1xx` for extended keys, `0xFFFx`/`0xFFFFx` for G-keys and logo zones),
//! the DirectInput scan code, the USB HID usage id, and the cell this key
//! occupies in the 21×6 bitmap grid. A code of 0 means the key is not
//! addressable by that scheme; the G-keys and logo zones only exist in the
//! key-name scheme, and vendor address spaces are sparser than the LED
//! universe in general — lookup misses are expected, not errors.

use crate::led::LedId::{self, *};

/// Bitmap grid width in cells.
pub const BITMAP_WIDTH: usize = 21;
/// Bitmap grid height in cells.
pub const BITMAP_HEIGHT: usize = 6;
/// Bytes per bitmap cell (B, G, R, A on the wire).
pub const BITMAP_BYTES_PER_CELL: usize = 4;
/// Total bitmap payload size in bytes.
pub const BITMAP_SIZE: usize = BITMAP_WIDTH * BITMAP_HEIGHT * BITMAP_BYTES_PER_CELL;

/// One key's addresses across all four schemes.
#[derive(Debug, Clone, Copy)]
pub struct KeyDef {
    pub led: LedId,
    pub key_name: u32,
    pub scan_code: u32,
    pub hid_code: u32,
    pub bitmap_cell: Option<u8>,
}

const fn k(led: LedId, key_name: u32, scan_code: u32, hid_code: u32, cell: Option<u8>) -> KeyDef {
    KeyDef {
        led,
        key_name,
        scan_code,
        hid_code,
        bitmap_cell: cell,
    }
}

const fn cell(row: usize, col: usize) -> Option<u8> {
    Some((row * BITMAP_WIDTH + col) as u8)
}

/// The canonical LED universe with every vendor address it answers to.
#[rustfmt::skip]
pub const KEY_TABLE: &[KeyDef] = &[
    // Function row (bitmap row 0)
    k(Escape,       0x001, 0x01, 0x29, cell(0, 0)),
    k(F1,           0x03B, 0x3B, 0x3A, cell(0, 2)),
    k(F2,           0x03C, 0x3C, 0x3B, cell(0, 3)),
    k(F3,           0x03D, 0x3D, 0x3C, cell(0, 4)),
    k(F4,           0x03E, 0x3E, 0x3D, cell(0, 5)),
    k(F5,           0x03F, 0x3F, 0x3E, cell(0, 6)),
    k(F6,           0x040, 0x40, 0x3F, cell(0, 7)),
    k(F7,           0x041, 0x41, 0x40, cell(0, 8)),
    k(F8,           0x042, 0x42, 0x41, cell(0, 9)),
    k(F9,           0x043, 0x43, 0x42, cell(0, 10)),
    k(F10,          0x044, 0x44, 0x43, cell(0, 11)),
    k(F11,          0x057, 0x57, 0x44, cell(0, 12)),
    k(F12,          0x058, 0x58, 0x45, cell(0, 13)),
    k(PrintScreen,  0x137, 0xB7, 0x46, cell(0, 14)),
    k(ScrollLock,   0x046, 0x46, 0x47, cell(0, 15)),
    k(PauseBreak,   0x145, 0xC5, 0x48, cell(0, 16)),
    // Number row (bitmap row 1)
    k(Grave,        0x029, 0x29, 0x35, cell(1, 0)),
    k(One,          0x002, 0x02, 0x1E, cell(1, 1)),
    k(Two,          0x003, 0x03, 0x1F, cell(1, 2)),
    k(Three,        0x004, 0x04, 0x20, cell(1, 3)),
    k(Four,         0x005, 0x05, 0x21, cell(1, 4)),
    k(Five,         0x006, 0x06, 0x22, cell(1, 5)),
    k(Six,          0x007, 0x07, 0x23, cell(1, 6)),
    k(Seven,        0x008, 0x08, 0x24, cell(1, 7)),
    k(Eight,        0x009, 0x09, 0x25, cell(1, 8)),
    k(Nine,         0x00A, 0x0A, 0x26, cell(1, 9)),
    k(Zero,         0x00B, 0x0B, 0x27, cell(1, 10)),
    k(Minus,        0x00C, 0x0C, 0x2D, cell(1, 11)),
    k(Equals,       0x00D, 0x0D, 0x2E, cell(1, 12)),
    k(Backspace,    0x00E, 0x0E, 0x2A, cell(1, 13)),
    k(Insert,       0x152, 0xD2, 0x49, cell(1, 14)),
    k(Home,         0x147, 0xC7, 0x4A, cell(1, 15)),
    k(PageUp,       0x149, 0xC9, 0x4B, cell(1, 16)),
    k(NumLock,      0x045, 0x45, 0x53, cell(1, 17)),
    k(NumSlash,     0x135, 0xB5, 0x54, cell(1, 18)),
    k(NumAsterisk,  0x037, 0x37, 0x55, cell(1, 19)),
    k(NumMinus,     0x04A, 0x4A, 0x56, cell(1, 20)),
    // Top letter row (bitmap row 2)
    k(Tab,          0x00F, 0x0F, 0x2B, cell(2, 0)),
    k(Q,            0x010, 0x10, 0x14, cell(2, 1)),
    k(W,            0x011, 0x11, 0x1A, cell(2, 2)),
    k(E,            0x012, 0x12, 0x08, cell(2, 3)),
    k(R,            0x013, 0x13, 0x15, cell(2, 4)),
    k(T,            0x014, 0x14, 0x17, cell(2, 5)),
    k(Y,            0x015, 0x15, 0x1C, cell(2, 6)),
    k(U,            0x016, 0x16, 0x18, cell(2, 7)),
    k(I,            0x017, 0x17, 0x0C, cell(2, 8)),
    k(O,            0x018, 0x18, 0x12, cell(2, 9)),
    k(P,            0x019, 0x19, 0x13, cell(2, 10)),
    k(BracketLeft,  0x01A, 0x1A, 0x2F, cell(2, 11)),
    k(BracketRight, 0x01B, 0x1B, 0x30, cell(2, 12)),
    k(Backslash,    0x02B, 0x2B, 0x31, cell(2, 13)),
    k(Delete,       0x153, 0xD3, 0x4C, cell(2, 14)),
    k(End,          0x14F, 0xCF, 0x4D, cell(2, 15)),
    k(PageDown,     0x151, 0xD1, 0x4E, cell(2, 16)),
    k(NumSeven,     0x047, 0x47, 0x5F, cell(2, 17)),
    k(NumEight,     0x048, 0x48, 0x60, cell(2, 18)),
    k(NumNine,      0x049, 0x49, 0x61, cell(2, 19)),
    k(NumPlus,      0x04E, 0x4E, 0x57, cell(2, 20)),
    // Home row (bitmap row 3)
    k(CapsLock,     0x03A, 0x3A, 0x39, cell(3, 0)),
    k(A,            0x01E, 0x1E, 0x04, cell(3, 1)),
    k(S,            0x01F, 0x1F, 0x16, cell(3, 2)),
    k(D,            0x020, 0x20, 0x07, cell(3, 3)),
    k(F,            0x021, 0x21, 0x09, cell(3, 4)),
    k(G,            0x022, 0x22, 0x0A, cell(3, 5)),
    k(H,            0x023, 0x23, 0x0B, cell(3, 6)),
    k(J,            0x024, 0x24, 0x0D, cell(3, 7)),
    k(K,            0x025, 0x25, 0x0E, cell(3, 8)),
    k(L,            0x026, 0x26, 0x0F, cell(3, 9)),
    k(Semicolon,    0x027, 0x27, 0x33, cell(3, 10)),
    k(Apostrophe,   0x028, 0x28, 0x34, cell(3, 11)),
    k(Enter,        0x01C, 0x1C, 0x28, cell(3, 13)),
    k(NumFour,      0x04B, 0x4B, 0x5C, cell(3, 17)),
    k(NumFive,      0x04C, 0x4C, 0x5D, cell(3, 18)),
    k(NumSix,       0x04D, 0x4D, 0x5E, cell(3, 19)),
    // Bottom letter row (bitmap row 4)
    k(LeftShift,    0x02A, 0x2A, 0xE1, cell(4, 0)),
    k(Z,            0x02C, 0x2C, 0x1D, cell(4, 2)),
    k(X,            0x02D, 0x2D, 0x1B, cell(4, 3)),
    k(C,            0x02E, 0x2E, 0x06, cell(4, 4)),
    k(V,            0x02F, 0x2F, 0x19, cell(4, 5)),
    k(B,            0x030, 0x30, 0x05, cell(4, 6)),
    k(N,            0x031, 0x31, 0x11, cell(4, 7)),
    k(M,            0x032, 0x32, 0x10, cell(4, 8)),
    k(Comma,        0x033, 0x33, 0x36, cell(4, 9)),
    k(Period,       0x034, 0x34, 0x37, cell(4, 10)),
    k(Slash,        0x035, 0x35, 0x38, cell(4, 11)),
    k(RightShift,   0x036, 0x36, 0xE5, cell(4, 13)),
    k(ArrowUp,      0x148, 0xC8, 0x52, cell(4, 15)),
    k(NumOne,       0x04F, 0x4F, 0x59, cell(4, 17)),
    k(NumTwo,       0x050, 0x50, 0x5A, cell(4, 18)),
    k(NumThree,     0x051, 0x51, 0x5B, cell(4, 19)),
    k(NumEnter,     0x11C, 0x9C, 0x58, cell(4, 20)),
    // Modifier row (bitmap row 5)
    k(LeftControl,  0x01D, 0x1D, 0xE0, cell(5, 0)),
    k(LeftWindows,  0x15B, 0xDB, 0xE3, cell(5, 1)),
    k(LeftAlt,      0x038, 0x38, 0xE2, cell(5, 2)),
    k(Space,        0x039, 0x39, 0x2C, cell(5, 6)),
    k(RightAlt,     0x138, 0xB8, 0xE6, cell(5, 10)),
    k(RightWindows, 0x15C, 0xDC, 0xE7, cell(5, 11)),
    k(Application,  0x15D, 0xDD, 0x65, cell(5, 12)),
    k(RightControl, 0x11D, 0x9D, 0xE4, cell(5, 13)),
    k(ArrowLeft,    0x14B, 0xCB, 0x50, cell(5, 14)),
    k(ArrowDown,    0x150, 0xD0, 0x51, cell(5, 15)),
    k(ArrowRight,   0x14D, 0xCD, 0x4F, cell(5, 16)),
    k(NumZero,      0x052, 0x52, 0x62, cell(5, 18)),
    k(NumPeriod,    0x053, 0x53, 0x63, cell(5, 19)),
    // G-keys and logo zones: key-name scheme only, no bitmap presence
    k(G1,    0x0FFF1, 0, 0, None),
    k(G2,    0x0FFF2, 0, 0, None),
    k(G3,    0x0FFF3, 0, 0, None),
    k(G4,    0x0FFF4, 0, 0, None),
    k(G5,    0x0FFF5, 0, 0, None),
    k(G6,    0x0FFF6, 0, 0, None),
    k(G7,    0x0FFF7, 0, 0, None),
    k(G8,    0x0FFF8, 0, 0, None),
    k(G9,    0x0FFF9, 0, 0, None),
    k(Logo,  0xFFFF1, 0, 0, None),
    k(Badge, 0xFFFF2, 0, 0, None),
];

fn lookup(code: u32, field: impl Fn(&KeyDef) -> u32) -> Option<LedId> {
    if code == 0 {
        return None;
    }
    KEY_TABLE
        .iter()
        .find(|def| field(def) == code)
        .map(|def| def.led)
}

/// Resolve a vendor symbolic key-name code.
pub fn from_key_name(code: u32) -> Option<LedId> {
    lookup(code, |def| def.key_name)
}

/// Resolve a DirectInput scan code.
pub fn from_scan_code(code: u32) -> Option<LedId> {
    lookup(code, |def| def.scan_code)
}

/// Resolve a USB HID usage id.
pub fn from_hid_code(code: u32) -> Option<LedId> {
    lookup(code, |def| def.hid_code)
}

/// Resolve a bitmap cell index (0..126, row-major over the 21×6 grid).
pub fn from_bitmap_cell(index: usize) -> Option<LedId> {
    if index >= BITMAP_WIDTH * BITMAP_HEIGHT {
        return None;
    }
    KEY_TABLE
        .iter()
        .find(|def| def.bitmap_cell == Some(index as u8))
        .map(|def| def.led)
}

/// Every canonical LED id, in table order.
pub fn all_leds() -> impl Iterator<Item = LedId> {
    KEY_TABLE.iter().map(|def| def.led)
}
