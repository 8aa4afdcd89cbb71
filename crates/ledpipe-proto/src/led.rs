use serde::Serialize;

/// The canonical, addressing-scheme-independent id of one lighting zone.
///
/// The universe is fixed at build time: the 104-key ANSI keyboard plus the
/// vendor's G-keys, logo and badge zones. Every id is addressable by at
/// least one of the four vendor schemes (see [`crate::keymap`]); vendor
/// addresses with no entry here are silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LedId {
    // Function row
    Escape,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    PrintScreen,
    ScrollLock,
    PauseBreak,
    // Number row
    Grave,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Zero,
    Minus,
    Equals,
    Backspace,
    // Top letter row
    Tab,
    Q,
    W,
    E,
    R,
    T,
    Y,
    U,
    I,
    O,
    P,
    BracketLeft,
    BracketRight,
    Backslash,
    // Home row
    CapsLock,
    A,
    S,
    D,
    F,
    G,
    H,
    J,
    K,
    L,
    Semicolon,
    Apostrophe,
    Enter,
    // Bottom letter row
    LeftShift,
    Z,
    X,
    C,
    V,
    B,
    N,
    M,
    Comma,
    Period,
    Slash,
    RightShift,
    // Modifier row
    LeftControl,
    LeftWindows,
    LeftAlt,
    Space,
    RightAlt,
    RightWindows,
    Application,
    RightControl,
    // Navigation cluster
    Insert,
    Home,
    PageUp,
    Delete,
    End,
    PageDown,
    ArrowUp,
    ArrowLeft,
    ArrowDown,
    ArrowRight,
    // Keypad
    NumLock,
    NumSlash,
    NumAsterisk,
    NumMinus,
    NumPlus,
    NumEnter,
    NumOne,
    NumTwo,
    NumThree,
    NumFour,
    NumFive,
    NumSix,
    NumSeven,
    NumEight,
    NumNine,
    NumZero,
    NumPeriod,
    // Vendor extras (key-name scheme only)
    G1,
    G2,
    G3,
    G4,
    G5,
    G6,
    G7,
    G8,
    G9,
    Logo,
    Badge,
}
