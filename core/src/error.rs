use thiserror::Error;

/// Rejected program load.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum LoadError {
    /// The program does not fit in the memory above the reserved region.
    /// Oversized programs are rejected outright, never truncated.
    #[error("program is {size} bytes but only {capacity} bytes are available")]
    TooLarge { size: usize, capacity: usize },
}

/// Failure raised by a single machine cycle.
///
/// Only [`EmulationError::UnknownOpcode`] is recoverable; the other variants
/// indicate a corrupt program or an engine defect and end the current run.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum EmulationError {
    /// A fetch or memory operand fell outside the 4096 byte memory.
    #[error("memory access out of bounds at {address:#06X}")]
    OutOfBounds { address: u16 },

    /// The instruction word matched no opcode family or sub-selector. The
    /// machine is unchanged apart from the program counter having advanced
    /// past the offending word; the caller may keep cycling.
    #[error("unknown opcode {opcode:#06X}")]
    UnknownOpcode { opcode: u16 },

    /// A subroutine call was made with all stack slots in use.
    #[error("call stack overflow")]
    StackOverflow,

    /// A subroutine return was executed with no call outstanding.
    #[error("call stack underflow")]
    StackUnderflow,
}
