use std::{convert::TryFrom, ops::Range};

use {
    crate::{
        definitions::{cpu, display, keyboard, memory},
        devices::Keyboard,
        opcode::{self, ChipOpcodes, Opcode, Opcodes, Operation, ProgramCounter, ProgramCounterStep},
        quirks::Quirks,
        timer::Timer,
        LoadError, MemoryError, ProcessError, StackError,
    },
    rand::RngCore,
    tinyvec::ArrayVec,
};

/// The monochrome framebuffer, stored row by row.
pub type Framebuffer = [[bool; display::WIDTH]; display::HEIGHT];

/// The ChipSet struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instant on the
/// Chip8 CPU.
pub struct ChipSet {
    /// all two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    /// - `0x000-0x1FF` - Chip 8 interpreter (contains font set in emu)
    /// - `0x050-0x0A0` - Used for the built in `4x5` pixel font set (`0-F`)
    /// - `0x200-0xFFF` - Program ROM and work RAM
    pub(super) memory: Vec<u8>,
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles as a flag for some
    /// instructions; thus, it should be avoided. In an addition operation, `VF` is the carry flag,
    /// while in subtraction, it is the "no borrow" flag. In the draw instruction `VF` is set upon
    /// pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index for the register, this is a special register entry
    /// called index `I`
    pub(super) index_register: u16,
    /// The program counter is a CPU register in the computer processor which has the address of the
    /// next instruction to be executed from memory.
    pub(super) program_counter: u16,
    /// The stack is only used to store return addresses when subroutines are called. The original
    /// [RCA 1802](https://de.wikipedia.org/wiki/RCA1802) version allocated `48` bytes for up to
    /// `12` levels of nesting; modern implementations usually have more.
    /// (here we are using `16`)
    pub(super) stack: ArrayVec<[u16; cpu::stack::SIZE]>,
    /// Delay timer: This timer is intended to be used for timing the events of games. Its value
    /// can be set and read.
    pub(super) delay_timer: Timer,
    /// Sound timer: This timer is used for sound effects. When its value is nonzero, a beeping
    /// sound should be made by the host.
    pub(super) sound_timer: Timer,
    /// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
    /// `(64 x 32)`.
    pub(super) display: Box<Framebuffer>,
    /// The hex keyboard, written by the driver between cycles.
    pub(super) keyboard: Keyboard,
    /// The compatibility switches this machine runs with.
    pub(super) quirks: Quirks,
    /// This stores the random number generator, used by the chipset.
    /// It is stored into the chipset, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: Box<dyn RngCore + Send>,
}

impl ChipSet {
    /// will create a new chipset object with the default quirks
    pub fn new(rom: &[u8]) -> Result<Self, LoadError> {
        Self::with_quirks(rom, Quirks::default())
    }

    /// will create a new chipset object running with the given quirks
    pub fn with_quirks(rom: &[u8], quirks: Quirks) -> Result<Self, LoadError> {
        if rom.len() > cpu::MAX_PROGRAM_SIZE {
            return Err(LoadError::RomTooLarge {
                len: rom.len(),
                max: cpu::MAX_PROGRAM_SIZE,
            });
        }

        // initialize all the memory with 0
        let mut ram = vec![0; memory::SIZE];

        // load fonts
        let fonts = display::fontset::LOCATION;
        ram[fonts..(fonts + display::fontset::FONTSET.len())]
            .copy_from_slice(&display::fontset::FONTSET);

        // write the rom data into memory
        let start = cpu::PROGRAM_COUNTER as usize;
        ram[start..(start + rom.len())].copy_from_slice(rom);

        log::debug!("loaded rom with {} bytes, running with {:?}", rom.len(), quirks);

        Ok(Self {
            opcode: 0,
            memory: ram,
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER,
            stack: ArrayVec::default(),
            delay_timer: Timer::default(),
            sound_timer: Timer::default(),
            display: Box::new([[false; display::WIDTH]; display::HEIGHT]),
            keyboard: Keyboard::new(),
            quirks,
            rng: Box::new(rand::rngs::OsRng),
        })
    }

    /// Replaces the random number generator used by `CXNN`.
    pub fn with_rng<R>(mut self, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        self.rng = Box::new(rng);
        self
    }

    /// will get the next opcode from memory
    pub(super) fn set_opcode(&mut self) -> Result<(), MemoryError> {
        // will build the opcode given from the pointer
        self.opcode = opcode::build_opcode(&self.memory, self.program_counter as usize)?;
        Ok(())
    }

    /// will advance the program by a single step
    ///
    /// Fetches the opcode at the program counter, moves the counter past it,
    /// runs the instruction and finally ticks both timers. Opcodes that do not
    /// decode to any instruction are skipped without touching the state.
    pub fn next(&mut self) -> Result<Operation, ProcessError> {
        // get next opcode
        self.set_opcode()?;
        log::trace!("pc {:#06X} opcode {:#06X}", self.program_counter, self.opcode);

        self.program_counter = self.program_counter.wrapping_add(memory::opcodes::SIZE);

        // run the opcode
        let operation = match Opcodes::try_from(self.opcode) {
            Ok(decoded) => self.calc(&decoded)?,
            Err(err) => {
                log::warn!("{} Skipping it.", err);
                Operation::None
            }
        };

        self.delay_timer.tick();
        self.sound_timer.tick();

        Ok(operation)
    }

    /// Will write keyboard data into interncal keyboard representation.
    pub fn set_keyboard(&mut self, keys: &[bool; keyboard::SIZE]) {
        self.keyboard.set_mult(keys);
    }

    /// Will set the value of the given key
    pub fn set_key(&mut self, key: usize, to: bool) {
        self.keyboard.set_key(key, to)
    }

    /// Will toggle the given key
    pub fn toggle_key(&mut self, key: usize) {
        self.keyboard.toggle_key(key)
    }

    /// Will get the current state of the keyboard
    pub fn get_keyboard(&self) -> &[bool] {
        self.keyboard.get_keys()
    }

    /// will return the sound timer
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer.get_value()
    }

    /// will return if the host should currently play a sound
    pub fn is_sound_active(&self) -> bool {
        self.sound_timer.is_active()
    }

    /// will return the delay timer
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer.get_value()
    }

    /// Will return a immutable slice of the current display configuration
    pub fn get_display(&self) -> &[[bool; display::WIDTH]] {
        &self.display[..]
    }

    /// will return the registers `V0` to `VF`
    pub fn get_registers(&self) -> &[u8] {
        &self.registers
    }

    /// will return the index register `I`
    pub fn get_index_register(&self) -> u16 {
        self.index_register
    }

    /// will return the address of the next instruction
    pub fn get_program_counter(&self) -> u16 {
        self.program_counter
    }

    /// will return the whole memory, including the fontset
    pub fn get_memory(&self) -> &[u8] {
        &self.memory
    }

    /// will return the quirks the machine is running with
    pub fn get_quirks(&self) -> Quirks {
        self.quirks
    }

    /// Will push the given pointer to the stack
    pub(super) fn push_stack(&mut self, pointer: u16) -> Result<(), StackError> {
        match self.stack.try_push(pointer) {
            None => Ok(()),
            Some(_) => Err(StackError::Full),
        }
    }

    /// Will pop from the stack
    pub(super) fn pop_stack(&mut self) -> Result<u16, StackError> {
        self.stack.pop().ok_or(StackError::Empty)
    }

    /// Checks that `len` bytes starting at `from` are inside of the memory
    /// and returns them as a range.
    pub(super) fn memory_range(&self, from: usize, len: usize) -> Result<Range<usize>, MemoryError> {
        let to = from + len;
        if to <= self.memory.len() {
            Ok(from..to)
        } else {
            Err(MemoryError::OutOfBounds {
                address: from,
                wanted: len,
                len: self.memory.len(),
            })
        }
    }
}

impl ProgramCounter for ChipSet {
    fn step(&mut self, step: ProgramCounterStep) {
        self.program_counter = step.apply(self.program_counter);
    }
}
