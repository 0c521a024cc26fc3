use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use ocho_core::constants::CLOCK_SPEED;
use ocho_core::{EmulationError, Machine, Snapshot};
use ocho_display::Display;

use crate::audio::Beeper;
use crate::keymap::keymap;

pub fn run(rom: PathBuf) -> Result<(), String> {
    let mut machine = Machine::new();

    let program =
        fs::read(&rom).map_err(|e| format!("could not read {}: {e}", rom.display()))?;
    machine.load_program(&program).map_err(|e| e.to_string())?;
    log::info!("loaded {} ({} bytes)", rom.display(), program.len());

    // Get SDL2 context
    let sdl = sdl2::init()?;
    let mut display = Display::new(&sdl)?;
    let beeper = Beeper::new(&sdl)?;
    let mut events = sdl.event_pump()?;

    // Set initial timing
    let cycle_time = Duration::new(0, CLOCK_SPEED);
    let mut last_cycle = Instant::now();

    // Debug mode pauses the machine; while it is on, each step request runs
    // exactly one cycle and dumps the register file.
    let mut debug = false;
    let mut step_requested = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => machine.set_key(kc, true),
                    (Keycode::F12, _) => {
                        debug = !debug;
                        log::info!("debug mode {}", if debug { "on" } else { "off" });
                    }
                    (Keycode::F8, _) => step_requested = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match keymap(key) {
                    Some(kc) => machine.set_key(kc, false),
                    None => continue,
                },
                _ => continue,
            };
        }

        // Update state
        if !debug || step_requested {
            step_requested = false;
            match machine.run_cycle() {
                Ok(outcome) => {
                    if outcome.framebuffer_changed {
                        display.render(outcome.frame)?;
                    }
                    beeper.set_tone(outcome.tone_requested);
                }
                // Unrecognized instructions are reported and skipped
                Err(e @ EmulationError::UnknownOpcode { .. }) => log::warn!("{e}"),
                Err(e) => return Err(e.to_string()),
            }
            if debug {
                log_snapshot(&machine.snapshot());
            }
        }

        // Handle timing
        let now = Instant::now();
        let elapsed = now - last_cycle;
        if cycle_time > elapsed {
            std::thread::sleep(cycle_time - elapsed);
        }
        last_cycle = now;
    }

    Ok(())
}

/// One-line register dump for debug stepping.
fn log_snapshot(snap: &Snapshot) {
    log::info!(
        "pc {:04X} i {:04X} sp {:02X} dt {:02X} st {:02X} v {:02X?}",
        snap.pc,
        snap.i,
        snap.sp,
        snap.delay_timer,
        snap.sound_timer,
        snap.v
    );
}
