use crate::constants::{KEY_COUNT, MEMORY_SIZE, PROGRAM_START};
use crate::error::{EmulationError, LoadError};
use crate::instruction;
use crate::opcode::Opcode;
use crate::state::{FrameBuffer, Keys, Snapshot, State};

/// # Machine
/// The machine itself: memory, registers, stack, timers, framebuffer, and
/// the input latch, advanced exactly one cycle per call.
///
/// The caller owns pacing, presentation, input collection, and audio:
/// - `reset` and `load_program` prepare a run
/// - `set_key` mirrors the host keyboard into the input latch
/// - `run_cycle` executes one fetch/decode/execute/timer step and returns a
///   [`CycleOutcome`] telling the collaborators what to do about it
/// - `snapshot` exposes the register file for debug stepping
///
/// Single ownership is assumed; nothing here locks, and a cycle either
/// completes or reports an [`EmulationError`].
pub struct Machine {
    state: State,
    keys: Keys,
}

impl Machine {
    pub fn new() -> Self {
        Machine {
            state: State::new(),
            keys: [false; KEY_COUNT],
        }
    }

    /// Returns the machine to its power-on state: memory cleared and the
    /// font set rewritten, registers/stack/timers/framebuffer zeroed, input
    /// latch released, program counter at the program origin.
    pub fn reset(&mut self) {
        self.state = State::new();
        self.keys = [false; KEY_COUNT];
    }

    /// Copies a program into memory at the program origin.
    ///
    /// A program larger than the memory above the reserved region is
    /// rejected without copying anything.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), LoadError> {
        let start = PROGRAM_START as usize;
        let capacity = MEMORY_SIZE - start;
        if program.len() > capacity {
            return Err(LoadError::TooLarge {
                size: program.len(),
                capacity,
            });
        }
        self.state.memory[start..start + program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Latches the pressed state of a keypad key.
    ///
    /// Key indices above 0xF name no keypad key; the call is ignored and
    /// reported.
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        match self.keys.get_mut(key as usize) {
            Some(latched) => *latched = pressed,
            None => log::warn!("ignoring key {key:#04X} outside the 0x0..=0xF keypad"),
        }
    }

    /// Runs one fetch/decode/execute step followed by one timer tick.
    ///
    /// The program counter advances past the instruction before it
    /// executes, so control-transfer instructions overwrite the advanced
    /// value. On [`EmulationError::UnknownOpcode`] nothing has run (timers
    /// included) apart from that advance, and the caller may keep cycling;
    /// any other error ends the current run.
    pub fn run_cycle(&mut self) -> Result<CycleOutcome<'_>, EmulationError> {
        let op = self.fetch()?;
        self.state.pc += 0x2;

        let operation = instruction::from_op(op)?;
        log::trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        self.state = operation(&op, &self.state, self.keys)?;

        let tone_requested = self.tick_timers();
        let clear_requested = op.nibbles() == (0x0, 0x0, 0xE, 0x0);
        let framebuffer_changed = clear_requested || op.family() == 0xD;
        Ok(CycleOutcome {
            framebuffer_changed,
            clear_requested,
            tone_requested,
            frame: &self.state.frame_buffer,
        })
    }

    /// Point-in-time view of the register file and timers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pc: self.state.pc,
            i: self.state.i,
            sp: self.state.sp,
            v: self.state.v,
            delay_timer: self.state.delay_timer,
            sound_timer: self.state.sound_timer,
        }
    }

    /// The current display contents.
    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Big-endian instruction word at the program counter.
    fn fetch(&self) -> Result<u16, EmulationError> {
        let word = &self.state.memory[self.state.mem_range(self.state.pc, 2)?];
        Ok(u16::from(word[0]) << 8 | u16::from(word[1]))
    }

    /// Counts both timers down one step and reports whether a tone should
    /// sound this cycle.
    ///
    /// The tone is requested only while the sound timer is still nonzero
    /// after its decrement; the cycle that lands it on zero stays silent.
    fn tick_timers(&mut self) -> bool {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
            self.state.sound_timer > 0
        } else {
            false
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

/// What one cycle asks of the collaborators, consumed once per cycle.
#[derive(Clone, Copy, Debug)]
pub struct CycleOutcome<'a> {
    /// The framebuffer differs from what was last presented; redraw.
    pub framebuffer_changed: bool,
    /// The cycle executed a clear-display instruction.
    pub clear_requested: bool,
    /// A tone should sound for this cycle.
    pub tone_requested: bool,
    /// The display contents after this cycle, row-major from the top left.
    pub frame: &'a FrameBuffer,
}
