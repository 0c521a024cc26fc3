//! The machine core: memory, registers, stack, timers, framebuffer, and a
//! cycle engine that fetches, decodes, and executes one instruction per
//! call. Presentation, input collection, audio, and pacing belong to the
//! caller, which drives the machine through [`Machine`] and observes each
//! cycle's side effects through the [`CycleOutcome`] it returns.

pub use crate::error::{EmulationError, LoadError};
pub use crate::machine::{CycleOutcome, Machine};
pub use crate::state::{FrameBuffer, Snapshot};

pub mod constants;
mod error;
mod instruction;
mod machine;
mod opcode;
mod operations;
mod state;
