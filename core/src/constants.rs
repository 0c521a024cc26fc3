//! Fixed dimensions and tables of the machine.

/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Where programs are loaded and where execution begins. Everything below
/// this address is reserved for the interpreter (the font set lives there).
pub const PROGRAM_START: u16 = 0x200;

/// Nesting depth of the call stack.
pub const STACK_DEPTH: usize = 16;

/// Number of keys on the hexadecimal keypad.
pub const KEY_COUNT: usize = 16;

/// Horizontal resolution of the display in pixels.
pub const DISPLAY_WIDTH: usize = 64;

/// Vertical resolution of the display in pixels.
pub const DISPLAY_HEIGHT: usize = 32;

/// Bytes per hexadecimal font glyph.
pub const GLYPH_SIZE: u16 = 5;

/// Nanoseconds per machine cycle; one instruction and one timer tick per
/// cycle at roughly 60Hz.
pub const CLOCK_SPEED: u32 = 16_666_667;

/// Glyphs for the hexadecimal digits 0..F, five bytes each, one bit per
/// pixel with the leftmost pixel in the most significant bit. Written to the
/// bottom of memory at reset so `Fx29` can point `I` at them.
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
