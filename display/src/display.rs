use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use ocho_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use ocho_core::FrameBuffer;

/// Host-window edge length of every native pixel.
const SCALE: usize = 10;

/// # Display
/// A scaled SDL2 window presenting the 64x32 monochrome framebuffer.
///
/// The machine core knows nothing about this type; the run loop calls
/// `render` whenever a cycle reports that the framebuffer changed, passing
/// the frame exactly as the core exposes it (row-major, origin top left).
pub struct Display {
    canvas: WindowCanvas,
}

impl Display {
    /// Opens the window on an SDL2 context.
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let video = sdl.video()?;
        let window = video
            .window(
                "ocho",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        Ok(Display { canvas })
    }

    /// Streams the framebuffer into an RGB24 texture and presents it.
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = rgb_pixels(frame);
        texture.with_lock(None, |buffer: &mut [u8], _pitch: usize| {
            buffer.copy_from_slice(&pixels);
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

/// Expands the one-byte-per-pixel framebuffer into RGB24: rows are
/// concatenated and every pixel becomes three identical channel bytes, 0
/// for off and 255 for on.
fn rgb_pixels(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .iter()
        .flatten()
        .flat_map(|&px| [px * 255; 3])
        .collect()
}
