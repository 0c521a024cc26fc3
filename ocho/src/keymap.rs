use sdl2::keyboard::Keycode;

/// # Keymap
/// Maps host keys onto the hexadecimal keypad.
///
/// The digit keys (top row or keypad) give 0..9 directly and the letter
/// keys A..F give the remaining six, so every keypad key is the key with
/// its own label.
pub fn keymap(key: Keycode) -> Option<u8> {
    match key {
        Keycode::Num0 | Keycode::Kp0 => Some(0x0),
        Keycode::Num1 | Keycode::Kp1 => Some(0x1),
        Keycode::Num2 | Keycode::Kp2 => Some(0x2),
        Keycode::Num3 | Keycode::Kp3 => Some(0x3),
        Keycode::Num4 | Keycode::Kp4 => Some(0x4),
        Keycode::Num5 | Keycode::Kp5 => Some(0x5),
        Keycode::Num6 | Keycode::Kp6 => Some(0x6),
        Keycode::Num7 | Keycode::Kp7 => Some(0x7),
        Keycode::Num8 | Keycode::Kp8 => Some(0x8),
        Keycode::Num9 | Keycode::Kp9 => Some(0x9),
        Keycode::A => Some(0xA),
        Keycode::B => Some(0xB),
        Keycode::C => Some(0xC),
        Keycode::D => Some(0xD),
        Keycode::E => Some(0xE),
        Keycode::F => Some(0xF),
        _ => None,
    }
}
