//! ANSI colour constants for the terminal board

// Board felt
pub const FELT_BG: &str = "\x1b[42m";

// Disk colours drawn on the felt
pub const BLACK_DISK: &str = "\x1b[30m";
pub const WHITE_DISK: &str = "\x1b[37m";

// Markers
pub const LAST_MOVE_BG: &str = "\x1b[43m";

pub const RESET: &str = "\x1b[00m";

/// Glyph used for a disk when colours are on
pub const DISK_GLYPH: char = '*';
/// Glyph used for an empty cell
pub const EMPTY_GLYPH: char = '.';
