pub mod chip8;
pub mod definitions;
pub mod devices;
pub mod opcode;
pub mod quirks;
pub mod timer;
mod error;
mod runner;

// reexporting for convinience
pub use error::*;
pub use runner::*;
