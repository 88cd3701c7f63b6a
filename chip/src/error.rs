use thiserror::Error;

use crate::opcode::Opcode;

/// Errors raised while constructing a machine, before any cycle ran.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoadError {
    #[error("The rom is {len} bytes long, but only {max} bytes fit into memory.")]
    RomTooLarge { len: usize, max: usize },
}

/// Errors raised while executing a single cycle.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ProcessError {
    #[error("Invalid stack state '{0}'.")]
    Stack(#[from] StackError),
    #[error("Invalid memory access '{0}'.")]
    Memory(#[from] MemoryError),
    #[error("The key {key:#X} does not exist on the keypad.")]
    Keypad { key: usize },
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum OpcodeError {
    #[error("An unsupported opcode was used {0:#06X?}.")]
    InvalidOpcode(Opcode),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum MemoryError {
    #[error("Pointer location invalid, there can not be {wanted} byte(s) at {address:#06X}, if memory len is {len}")]
    OutOfBounds {
        address: usize,
        wanted: usize,
        len: usize,
    },
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Full,
    #[error("Stack is empty!")]
    Empty,
}
