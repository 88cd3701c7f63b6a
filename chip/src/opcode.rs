//! Opcode abstractions, functionality and constants.
use std::convert::{TryFrom, TryInto};

use crate::{
    definitions::memory,
    MemoryError, OpcodeError, ProcessError,
};

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bits
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bits
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bits
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bits
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bits
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bits
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the size of a single byte
const BYTE_SIZE: u16 = 0x8;

/// the size of a single nibble
const NIBBLE_SIZE: u16 = BYTE_SIZE / 2;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// will build an opcode from data and the given point
/// # Arguments
///
/// - `data` - A slice of u8 data entries used to generate the opcodes
/// - `pointer` - Where in the data the opcode shall be extracted, so `pointer` and `pointer + 1` make
/// the opcode up
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
/// # use chip::MemoryError;
///  const OPCODES: [Opcode; 2] = [0x00EE, 0x1EDA];
///  const SPLIT_OPCODE: [u8; 4] = [0x00, 0xEE, 0x1E, 0xDA];
///  for (i, val) in OPCODES.iter().enumerate() {
///      let opcode = build_opcode(&SPLIT_OPCODE, i * 2).expect("This will work.");
///      assert_eq!(opcode, *val);
///  }
/// # let address = 3;
/// # let err = MemoryError::OutOfBounds { address, wanted: 2, len: SPLIT_OPCODE.len() };
/// # assert_eq!(Err(err), build_opcode(&SPLIT_OPCODE, address));
/// ```
pub fn build_opcode(data: &[u8], pointer: usize) -> Result<Opcode, MemoryError> {
    // controlling that there is no illegal access here
    if pointer + 1 < data.len() {
        Ok(Opcode::from_be_bytes([data[pointer], data[pointer + 1]]))
    } else {
        Err(MemoryError::OutOfBounds {
            address: pointer,
            wanted: memory::opcodes::SIZE as usize,
            len: data.len(),
        })
    }
}

/// These are special traits used to filter out information
/// from opcodes
pub trait OpcodeTrait {
    /// this is an opcode extractor that will return the
    /// instruction family (the high nibble) of any opcode
    fn t(&self) -> usize;

    /// this is an opcode extractor for the opcode type `TNNN`
    /// - `T` is the opcode type
    /// - `NNN` is an address
    fn nnn(&self) -> u16;

    /// this is an opcode extractor for the opcode type `TXNN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `NN` is a constant
    fn xnn(&self) -> (usize, u8);

    /// this is an opcode extractor for the opcode type `TXYN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    /// - `N` is a constant or an opcode subtype
    fn xyn(&self) -> (usize, usize, usize);

    /// this is an opcode extractor for the opcode type `TXYT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    fn xy(&self) -> (usize, usize);

    /// this is an opcode extractor for the opcode type `TXTT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    fn x(&self) -> usize;
}

impl OpcodeTrait for Opcode {
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.t(), 0x1);
    /// ```
    fn t(&self) -> usize {
        ((self & OPCODE_MASK_F000) >> (3 * NIBBLE_SIZE)) as usize
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.nnn(), 0xEDA)
    /// ```
    fn nnn(&self) -> u16 {
        self & OPCODE_MASK_0FFF
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xnn(), (0xE, 0xDA));
    /// ```
    fn xnn(&self) -> (usize, u8) {
        let x = self.x();
        let nn = (self & OPCODE_MASK_00FF) as u8;
        (x, nn)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xyn(), (0xE, 0xD, 0xA));
    /// ```
    fn xyn(&self) -> (usize, usize, usize) {
        let (x, y) = self.xy();
        let n = (self & OPCODE_MASK_000F) as usize;
        (x, y, n)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xy(), (0xE, 0xD));
    /// ```
    fn xy(&self) -> (usize, usize) {
        let x = self.x();
        const MASK: u16 = OPCODE_MASK_00FF ^ OPCODE_MASK_000F;
        let y = ((self & MASK) >> NIBBLE_SIZE) as usize;
        (x, y)
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.x(), 0xE);
    /// ```
    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0FFF & OPCODE_MASK_FF00) >> BYTE_SIZE) as usize
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Represents how the program counter moves after an instruction ran.
///
/// The counter already points past the executed instruction when this is
/// applied, as it is advanced during the fetch.
pub enum ProgramCounterStep {
    /// Keeps the program counter where the fetch left it
    Next,
    /// Skips the following instruction
    Skip,
    /// Moves back onto the executed instruction, so it is run again next cycle
    Repeat,
    /// Will simply move the program counter to the given location.
    Jump(u16),
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::Next
        }
    }

    /// Applies the step onto the given program counter.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next.apply(0x202), 0x202);
    /// assert_eq!(ProgramCounterStep::Skip.apply(0x202), 0x204);
    /// assert_eq!(ProgramCounterStep::Repeat.apply(0x202), 0x200);
    /// assert_eq!(ProgramCounterStep::Jump(0x300).apply(0x202), 0x300);
    /// ```
    #[inline]
    pub fn apply(&self, pc: u16) -> u16 {
        match *self {
            ProgramCounterStep::Next => pc,
            ProgramCounterStep::Skip => pc.wrapping_add(memory::opcodes::SIZE),
            ProgramCounterStep::Repeat => pc.wrapping_sub(memory::opcodes::SIZE),
            ProgramCounterStep::Jump(pointer) => pointer,
        }
    }
}

/// TryIntoHandler is an internally used wrapper used for the implTryInto
/// macros. It is primarly used for converting to the correct type, without
/// disturbing its namespace.
#[repr(transparent)]
struct TryIntoHandler<T>(T);

#[inline]
fn err<T>(value: Opcode) -> Result<T, OpcodeError> {
    Err(OpcodeError::InvalidOpcode(value))
}

#[inline]
fn try_into<To, From>(val: From, value: Opcode) -> Result<To, OpcodeError>
where
    From: TryInto<TryIntoHandler<To>>,
{
    let inner: TryIntoHandler<To> = val.try_into().or_else(|_| err(value))?;
    Ok(inner.0)
}

/// implTryIntoInner is a macro responsible for creating the boilerplate code
/// needed for the opcode convertions.
macro_rules! implTryIntoInner {
    ( $type_name:ty : $type_from:ty : $inner:expr) => {
        impl TryFrom<$type_from> for TryIntoHandler<$type_name> {
            type Error = ();

            fn try_from(value: $type_from) -> Result<Self, Self::Error> {
                let inner: Result<$type_name, Self::Error> = $inner(value);
                Ok(Self(inner?))
            }
        }
    };
}

macro_rules! implTryIntoEnum {
    ($type_name:ty : $type_from:ty : $( $key:literal => $val:expr ),+ $(,)? ) => {
        implTryIntoInner!(
            $type_name : $type_from :
            |value: $type_from| {
                match value {
                    $(
                        $key => Ok($val),
                    )+
                    _ => Err(()),
                }
            }
        );
    };
}

macro_rules! implTryIntoXNN {
    ($type_name:ident) => {
        implTryIntoInner!(
            $type_name : Opcode :
            |value: Opcode| {
                let (x, nn) = value.xnn();
                Ok($type_name { x, nn })
            }
        );
    };
}

macro_rules! implTryIntoNNN {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| {
                let nnn = value.nnn();
                Ok($type_name { nnn })
            }
        }
    };
}

macro_rules! implTryIntoXY {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| {
                let (x, y) = value.xy();
                Ok($type_name { x, y })
            }
        }
    };
}

macro_rules! implTryIntoXNNE {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| {
                let (x, nn) = value.xnn();
                let ops = try_into(nn, value).map_err(|_| ())?;
                Ok($type_name { ops, x })
            }
        }
    };
}

macro_rules! implTryIntoXYN {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| {
                let (x, y, n) = value.xyn();
                Ok($type_name { x, y, n })
            }
        }
    };
}

macro_rules! implTryIntoXYNE {
    ($type_name:ident) => {
        implTryIntoInner! {
            $type_name: Opcode :
            |value: Opcode| {
                let (x, y, n) = value.xyn();
                let ops = try_into(n, value).map_err(|_| ())?;
                Ok($type_name { ops, x, y })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum System {
    /// Clears the display
    Clear,
    /// Returns from the subroutine
    Return,
}

implTryIntoEnum!(System : Opcode :
    // 00E0
    0x00E0 => System::Clear,
    // 00EE
    0x00EE => System::Return,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub nnn: u16,
}

implTryIntoNNN!(Jump);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub nnn: u16,
}

implTryIntoNNN!(Call);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipIfEqual {
    pub x: usize,
    pub nn: u8,
}

implTryIntoXNN!(SkipIfEqual);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipIfNotEqual {
    pub x: usize,
    pub nn: u8,
}

implTryIntoXNN!(SkipIfNotEqual);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipIfRegistersEqual {
    pub x: usize,
    pub y: usize,
}

implTryIntoXY!(SkipIfRegistersEqual);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Load {
    pub x: usize,
    pub nn: u8,
}

implTryIntoXNN!(Load);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Add {
    pub x: usize,
    pub nn: u8,
}

implTryIntoXNN!(Add);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOpcode {
    Assign,
    Or,
    And,
    Xor,
    AddWithCarry,
    Sub,
    ShiftRight,
    SubReverse,
    ShiftLeft,
}

implTryIntoEnum!(ArithmeticOpcode : usize :
    // 8XY0
    0x0 => ArithmeticOpcode::Assign,
    // 8XY1
    0x1 => ArithmeticOpcode::Or,
    // 8XY2
    0x2 => ArithmeticOpcode::And,
    // 8XY3
    0x3 => ArithmeticOpcode::Xor,
    // 8XY4
    0x4 => ArithmeticOpcode::AddWithCarry,
    // 8XY5
    0x5 => ArithmeticOpcode::Sub,
    // 8XY6
    0x6 => ArithmeticOpcode::ShiftRight,
    // 8XY7
    0x7 => ArithmeticOpcode::SubReverse,
    // 8XYE
    0xE => ArithmeticOpcode::ShiftLeft,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arithmetic {
    pub ops: ArithmeticOpcode,
    pub x: usize,
    pub y: usize,
}

implTryIntoXYNE!(Arithmetic);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipIfRegistersNotEqual {
    pub x: usize,
    pub y: usize,
}

implTryIntoXY!(SkipIfRegistersNotEqual);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetIndex {
    pub nnn: u16,
}

implTryIntoNNN!(SetIndex);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpOffset {
    pub nnn: u16,
}

implTryIntoNNN!(JumpOffset);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Random {
    pub x: usize,
    pub nn: u8,
}

implTryIntoXNN!(Random);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub x: usize,
    pub y: usize,
    pub n: usize,
}

implTryIntoXYN!(Draw);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOpcode {
    Pressed,
    NotPressed,
}

implTryIntoEnum!(KeyOpcode : u8 :
    // EX9E
    0x9E => KeyOpcode::Pressed,
    // EXA1
    0xA1 => KeyOpcode::NotPressed,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub ops: KeyOpcode,
    pub x: usize,
}

implTryIntoXNNE!(Key);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiscOpcode {
    GetDelayTimer,
    AwaitKeyPress,
    SetDelayTimer,
    SetSoundTimer,
    AddVxToI,
    SetIToSprite,
    StoreBCD,
    StoreV0ToVx,
    FillV0ToVx,
}

implTryIntoEnum!(MiscOpcode : u8 :
    // FX07
    0x07 => MiscOpcode::GetDelayTimer,
    // FX0A
    0x0A => MiscOpcode::AwaitKeyPress,
    // FX15
    0x15 => MiscOpcode::SetDelayTimer,
    // FX18
    0x18 => MiscOpcode::SetSoundTimer,
    // FX1E
    0x1E => MiscOpcode::AddVxToI,
    // FX29
    0x29 => MiscOpcode::SetIToSprite,
    // FX33
    0x33 => MiscOpcode::StoreBCD,
    // FX55
    0x55 => MiscOpcode::StoreV0ToVx,
    // FX65
    0x65 => MiscOpcode::FillV0ToVx,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Misc {
    pub ops: MiscOpcode,
    pub x: usize,
}

implTryIntoXNNE!(Misc);

/// A fully decoded instruction, one variant per instruction family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcodes {
    System(System),
    Jump(Jump),
    Call(Call),
    SkipIfEqual(SkipIfEqual),
    SkipIfNotEqual(SkipIfNotEqual),
    SkipIfRegistersEqual(SkipIfRegistersEqual),
    Load(Load),
    Add(Add),
    Arithmetic(Arithmetic),
    SkipIfRegistersNotEqual(SkipIfRegistersNotEqual),
    SetIndex(SetIndex),
    JumpOffset(JumpOffset),
    Random(Random),
    Draw(Draw),
    Key(Key),
    Misc(Misc),
}

impl TryFrom<Opcode> for Opcodes {
    type Error = OpcodeError;

    fn try_from(value: Opcode) -> Result<Self, Self::Error> {
        let res = match value.t() {
            0x0 => Opcodes::System(try_into(value, value)?),
            0x1 => Opcodes::Jump(try_into(value, value)?),
            0x2 => Opcodes::Call(try_into(value, value)?),
            0x3 => Opcodes::SkipIfEqual(try_into(value, value)?),
            0x4 => Opcodes::SkipIfNotEqual(try_into(value, value)?),
            0x5 => Opcodes::SkipIfRegistersEqual(try_into(value, value)?),
            0x6 => Opcodes::Load(try_into(value, value)?),
            0x7 => Opcodes::Add(try_into(value, value)?),
            0x8 => Opcodes::Arithmetic(try_into(value, value)?),
            0x9 => Opcodes::SkipIfRegistersNotEqual(try_into(value, value)?),
            0xA => Opcodes::SetIndex(try_into(value, value)?),
            0xB => Opcodes::JumpOffset(try_into(value, value)?),
            0xC => Opcodes::Random(try_into(value, value)?),
            0xD => Opcodes::Draw(try_into(value, value)?),
            0xE => Opcodes::Key(try_into(value, value)?),
            0xF => Opcodes::Misc(try_into(value, value)?),
            _ => return err(value),
        };
        Ok(res)
    }
}

/// Represents a step of the program counter
/// this requires the enum ProgramCounterStep
/// to work.
pub trait ProgramCounter {
    /// will move the program counter by a step.
    fn step(&mut self, step: ProgramCounterStep);
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Represents a command from the interpreter up to the driver.
pub enum Operation {
    /// If no action has to be taken.
    None,
    /// The machine is blocked until a key is pressed,
    /// the same instruction will run again next cycle.
    Wait,
    /// The framebuffer changed and should be redrawn.
    Draw,
}

/// These are the traits that have to be full filled for a working opcode
/// table.
///
/// This trait requires the implementation of the [`ProgramCounter`](ProgramCounter)
/// trait, as the step returned by every instruction is applied through it.
pub trait ChipOpcodes: ProgramCounter {
    /// will run a single decoded instruction and move the program counter
    fn calc(&mut self, opcode: &Opcodes) -> Result<Operation, ProcessError> {
        let mut operation = Operation::None;
        let step_op = |(step, op): (ProgramCounterStep, Operation)| {
            operation = op;
            step
        };

        let step = match opcode {
            Opcodes::System(opcode) => self.system(opcode).map(step_op),
            Opcodes::Jump(opcode) => self.jump(opcode),
            Opcodes::Call(opcode) => self.call(opcode),
            Opcodes::SkipIfEqual(opcode) => self.skip_if_equal(opcode),
            Opcodes::SkipIfNotEqual(opcode) => self.skip_if_not_equal(opcode),
            Opcodes::SkipIfRegistersEqual(opcode) => self.skip_if_registers_equal(opcode),
            Opcodes::Load(opcode) => self.load(opcode),
            Opcodes::Add(opcode) => self.add(opcode),
            Opcodes::Arithmetic(opcode) => self.arithmetic(opcode),
            Opcodes::SkipIfRegistersNotEqual(opcode) => self.skip_if_registers_not_equal(opcode),
            Opcodes::SetIndex(opcode) => self.set_index(opcode),
            Opcodes::JumpOffset(opcode) => self.jump_offset(opcode),
            Opcodes::Random(opcode) => self.random(opcode),
            Opcodes::Draw(opcode) => self.draw(opcode).map(step_op),
            Opcodes::Key(opcode) => self.key(opcode),
            Opcodes::Misc(opcode) => self.misc(opcode).map(step_op),
        }?;

        self.step(step);
        Ok(operation)
    }

    /// - `00E0` - Display  - `disp_clear()`        - Clears the screen.
    /// - `00EE` - Flow     - `return;`             - Returns from a subroutine.
    fn system(&mut self, opcode: &System)
        -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `1NNN` - Flow     - `goto NNN;`           - Jumps to address `NNN`.
    fn jump(&self, opcode: &Jump) -> Result<ProgramCounterStep, ProcessError>;

    /// - `2NNN` - Flow     - `*(0xNNN)()`          - Calls subroutine at `NNN`.
    fn call(&mut self, opcode: &Call) -> Result<ProgramCounterStep, ProcessError>;

    /// - `3XNN` - Cond     - `if(Vx==NN)`          - Skips the next instruction if `VX` equals `NN`.
    fn skip_if_equal(&self, opcode: &SkipIfEqual) -> Result<ProgramCounterStep, ProcessError>;

    /// - `4XNN` - Cond     - `if(Vx!=NN)`          - Skips the next instruction if `VX` doesn't equal `NN`.
    fn skip_if_not_equal(&self, opcode: &SkipIfNotEqual)
        -> Result<ProgramCounterStep, ProcessError>;

    /// - `5XY0` - Cond     - `if(Vx==Vy)`          - Skips the next instruction if `VX` equals `VY`.
    fn skip_if_registers_equal(
        &self,
        opcode: &SkipIfRegistersEqual,
    ) -> Result<ProgramCounterStep, ProcessError>;

    /// - `6XNN` - Const    - `Vx = NN`             - Sets `VX` to `NN`.
    fn load(&mut self, opcode: &Load) -> Result<ProgramCounterStep, ProcessError>;

    /// - `7XNN` - Const    - `Vx += NN`            - Adds `NN` to `VX`. (Carry flag is not changed)
    fn add(&mut self, opcode: &Add) -> Result<ProgramCounterStep, ProcessError>;

    /// A mutiuse opcode base for type `8XYT` (T is a sub opcode)
    ///
    /// - `8XY0` - Assign   - `Vx=Vy`               - Sets `VX` to the value of `VY`.
    /// - `8XY1` - BitOp    - `Vx=Vx|Vy`            - Sets `VX` to `VX` or `VY`.
    /// - `8XY2` - BitOp    - `Vx=Vx&Vy`            - Sets `VX` to `VX` and `VY`.
    /// - `8XY3` - BitOp    - `Vx=Vx^Vy`            - Sets `VX` to `VX` xor `VY`.
    /// - `8XY4` - Math     - `Vx += Vy`            - Adds `VY` to `VX`. `VF` is set to `1` when there's a carry, and to `0` when there isn't.
    /// - `8XY5` - Math     - `Vx -= Vy`            - `VY` is subtracted from `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XY6` - BitOp    - `Vx>>=1`              - Stores the least significant bit of `VX` in `VF` and then shifts `VX` to the right by `1`.
    /// - `8XY7` - Math     - `Vx=Vy-Vx`            - Sets `VX` to `VY` minus `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XYE` - BitOp    - `Vx<<=1`              - Stores the most significant bit of `VX` in `VF` and then shifts `VX` to the left by `1`.
    fn arithmetic(&mut self, opcode: &Arithmetic) -> Result<ProgramCounterStep, ProcessError>;

    /// - `9XY0` - Cond     - `if(Vx!=Vy)`          - Skips the next instruction if `VX` doesn't equal `VY`.
    fn skip_if_registers_not_equal(
        &self,
        opcode: &SkipIfRegistersNotEqual,
    ) -> Result<ProgramCounterStep, ProcessError>;

    /// - `ANNN` - MEM      - `I = NNN`             - Sets `I` to the address `NNN`.
    fn set_index(&mut self, opcode: &SetIndex) -> Result<ProgramCounterStep, ProcessError>;

    /// - `BNNN` - Flow     - `PC=V0+NNN`           - Jumps to the address `NNN` plus `V0`.
    fn jump_offset(&self, opcode: &JumpOffset) -> Result<ProgramCounterStep, ProcessError>;

    /// - `CXNN` - Rand     - `Vx=rand()&NN`        - Sets `VX` to a random byte masked with `NN`.
    fn random(&mut self, opcode: &Random) -> Result<ProgramCounterStep, ProcessError>;

    /// - `DXYN` - Disp     - `draw(Vx,Vy,N)`       - Draws a sprite at coordinate `(VX, VY)` that has a width of `8` pixels and a height of `N` pixels. Each row of `8` pixels is read as bit-coded starting from memory location `I`. `VF` is set to `1` if any screen pixels are flipped from set to unset, and to `0` if that doesn't happen.
    fn draw(&mut self, opcode: &Draw) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// A multiuse opcode base for type `EXTT` (T is a sub opcode)
    ///
    /// - `EX9E` - KeyOp    - `if(key()==Vx)`       - Skips the next instruction if the key stored in `VX` is pressed.
    /// - `EXA1` - KeyOp    - `if(key()!=Vx)`       - Skips the next instruction if the key stored in `VX` isn't pressed.
    fn key(&self, opcode: &Key) -> Result<ProgramCounterStep, ProcessError>;

    /// A multiuse opcode base for type `FXTT` (T is a sub opcode)
    ///
    /// - `FX07` - Timer    - `Vx = get_delay()`    - Sets `VX` to the value of the delay timer.
    /// - `FX0A` - KeyOp    - `wait_key()`          - Blocks by running again until any key is pressed.
    /// - `FX15` - Timer    - `delay_timer(Vx)`     - Sets the delay timer to `VX`.
    /// - `FX18` - Sound    - `sound_timer(Vx)`     - Sets the sound timer to `VX`.
    /// - `FX1E` - MEM      - `I +=Vx`              - Adds `VX` to `I`. `VF` is set to `1` if the sum left the 16 bit range.
    /// - `FX29` - MEM      - `I=sprite_addr[Vx]`   - Sets `I` to the location of the font character in `VX`.
    /// - `FX33` - BCD      - `set_bcd(Vx)`         - Stores the hundreds, tens and ones digit of `VX` at `I`, `I+1` and `I+2`.
    /// - `FX55` - MEM      - `reg_dump(Vx,&I)`     - Stores `V0` to `VX` (including `VX`) in memory starting at address `I`. `I` itself is left unmodified.
    /// - `FX65` - MEM      - `reg_load(Vx,&I)`     - Fills `V0` to `VX` (including `VX`) with values from memory starting at address `I`. `I` itself is left unmodified.
    fn misc(&mut self, opcode: &Misc) -> Result<(ProgramCounterStep, Operation), ProcessError>;
}
