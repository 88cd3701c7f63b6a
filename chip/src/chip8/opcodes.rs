use crate::{
    definitions::{cpu, display},
    opcode::{
        Add, Arithmetic, ArithmeticOpcode, Call, ChipOpcodes, Draw, Jump, JumpOffset, Key,
        KeyOpcode, Load, Misc, MiscOpcode, Operation, ProgramCounterStep, Random, SetIndex,
        SkipIfEqual, SkipIfNotEqual, SkipIfRegistersEqual, SkipIfRegistersNotEqual, System,
    },
    ProcessError,
};

use super::ChipSet;

impl ChipOpcodes for ChipSet {
    fn system(
        &mut self,
        opcode: &System,
    ) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        match opcode {
            System::Clear => {
                // 00E0
                for row in self.display.iter_mut() {
                    for column in row.iter_mut() {
                        *column = false;
                    }
                }
                Ok((ProgramCounterStep::Next, Operation::Draw))
            }
            System::Return => {
                // 00EE
                let pc = self.pop_stack()?;
                log::debug!("return to {:#06X}", pc);
                Ok((ProgramCounterStep::Jump(pc), Operation::None))
            }
        }
    }

    fn jump(&self, opcode: &Jump) -> Result<ProgramCounterStep, ProcessError> {
        // 1NNN
        log::debug!("jump to {:#06X}", opcode.nnn);
        Ok(ProgramCounterStep::Jump(opcode.nnn))
    }

    fn call(&mut self, opcode: &Call) -> Result<ProgramCounterStep, ProcessError> {
        // 2NNN
        // the counter already points to the instruction after the call
        self.push_stack(self.program_counter)?;
        log::debug!("call {:#06X} from {:#06X}", opcode.nnn, self.program_counter);
        Ok(ProgramCounterStep::Jump(opcode.nnn))
    }

    fn skip_if_equal(&self, opcode: &SkipIfEqual) -> Result<ProgramCounterStep, ProcessError> {
        // 3XNN
        Ok(ProgramCounterStep::cond(self.registers[opcode.x] == opcode.nn))
    }

    fn skip_if_not_equal(
        &self,
        opcode: &SkipIfNotEqual,
    ) -> Result<ProgramCounterStep, ProcessError> {
        // 4XNN
        Ok(ProgramCounterStep::cond(self.registers[opcode.x] != opcode.nn))
    }

    fn skip_if_registers_equal(
        &self,
        opcode: &SkipIfRegistersEqual,
    ) -> Result<ProgramCounterStep, ProcessError> {
        // 5XY0
        Ok(ProgramCounterStep::cond(
            self.registers[opcode.x] == self.registers[opcode.y],
        ))
    }

    fn load(&mut self, opcode: &Load) -> Result<ProgramCounterStep, ProcessError> {
        // 6XNN
        self.registers[opcode.x] = opcode.nn;
        Ok(ProgramCounterStep::Next)
    }

    fn add(&mut self, opcode: &Add) -> Result<ProgramCounterStep, ProcessError> {
        // 7XNN
        // let VX overflow, the carry is only reported with the quirk enabled
        let (res, carry) = self.registers[opcode.x].overflowing_add(opcode.nn);
        self.registers[opcode.x] = res;
        if self.quirks.add_sets_flag {
            self.registers[cpu::register::LAST] = u8::from(carry);
        }
        Ok(ProgramCounterStep::Next)
    }

    fn arithmetic(&mut self, opcode: &Arithmetic) -> Result<ProgramCounterStep, ProcessError> {
        let vx = self.registers[opcode.x];
        let vy = self.registers[opcode.y];

        // the flag is calculated from the values before the operation
        // and always written last, so it wins if X is the flag register
        let (res, flag) = match opcode.ops {
            // 8XY0
            ArithmeticOpcode::Assign => (vy, None),
            // 8XY1
            ArithmeticOpcode::Or => (vx | vy, None),
            // 8XY2
            ArithmeticOpcode::And => (vx & vy, None),
            // 8XY3
            ArithmeticOpcode::Xor => (vx ^ vy, None),
            // 8XY4
            ArithmeticOpcode::AddWithCarry => {
                let (res, carry) = vx.overflowing_add(vy);
                (res, Some(u8::from(carry)))
            }
            // 8XY5
            ArithmeticOpcode::Sub => (vx.wrapping_sub(vy), Some(u8::from(vx >= vy))),
            // 8XY6
            ArithmeticOpcode::ShiftRight => (vx >> 1, Some(vx & 1)),
            // 8XY7
            ArithmeticOpcode::SubReverse => (vy.wrapping_sub(vx), Some(u8::from(vy >= vx))),
            // 8XYE
            ArithmeticOpcode::ShiftLeft => (vx << 1, Some((vx >> 7) & 1)),
        };

        self.registers[opcode.x] = res;
        if let Some(flag) = flag {
            self.registers[cpu::register::LAST] = flag;
        }

        Ok(ProgramCounterStep::Next)
    }

    fn skip_if_registers_not_equal(
        &self,
        opcode: &SkipIfRegistersNotEqual,
    ) -> Result<ProgramCounterStep, ProcessError> {
        // 9XY0
        Ok(ProgramCounterStep::cond(
            self.registers[opcode.x] != self.registers[opcode.y],
        ))
    }

    fn set_index(&mut self, opcode: &SetIndex) -> Result<ProgramCounterStep, ProcessError> {
        // ANNN
        self.index_register = opcode.nnn;
        Ok(ProgramCounterStep::Next)
    }

    fn jump_offset(&self, opcode: &JumpOffset) -> Result<ProgramCounterStep, ProcessError> {
        // BNNN
        let v0 = u16::from(self.registers[0]);
        Ok(ProgramCounterStep::Jump(v0 + opcode.nnn))
    }

    fn random(&mut self, opcode: &Random) -> Result<ProgramCounterStep, ProcessError> {
        // CXNN
        // using a fill bytes call here, as the trait RngCore does not
        // support random u8.
        let mut rand: [u8; 1] = [0];
        self.rng.fill_bytes(&mut rand);
        self.registers[opcode.x] = opcode.nn & rand[0];
        Ok(ProgramCounterStep::Next)
    }

    fn draw(&mut self, opcode: &Draw) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        // DXYN
        // see https://tobiasvl.github.io/blog/write-a-chip-8-emulator/

        // VF is cleared before the coordinates are read
        self.registers[cpu::register::LAST] = 0;

        // only the origin wraps around the screen
        let origin_x = self.registers[opcode.x] as usize % display::WIDTH;
        let origin_y = self.registers[opcode.y] as usize % display::HEIGHT;

        let rows = self.memory_range(self.index_register as usize, opcode.n)?;
        let wrap = self.quirks.wrap_sprites;
        let mut collision = false;

        for (i, sprite) in self.memory[rows].iter().enumerate() {
            let mut y = origin_y + i;
            if y >= display::HEIGHT {
                if !wrap {
                    break;
                }
                y %= display::HEIGHT;
            }

            for j in 0..display::SPRITE_WIDTH {
                // the most significant bit is the left most pixel
                let mask = 0x80 >> j;
                if sprite & mask == 0 {
                    continue;
                }

                let mut x = origin_x + j;
                if x >= display::WIDTH {
                    if !wrap {
                        break;
                    }
                    x %= display::WIDTH;
                }

                let pixel = &mut self.display[y][x];
                collision |= *pixel;
                *pixel = !*pixel;
            }
        }

        if collision {
            self.registers[cpu::register::LAST] = 1;
        }

        Ok((ProgramCounterStep::Next, Operation::Draw))
    }

    fn key(&self, opcode: &Key) -> Result<ProgramCounterStep, ProcessError> {
        let key = self.registers[opcode.x] as usize;
        let pressed = self
            .keyboard
            .is_pressed(key)
            .ok_or(ProcessError::Keypad { key })?;

        let step = match opcode.ops {
            // EX9E
            KeyOpcode::Pressed => ProgramCounterStep::cond(pressed),
            // EXA1
            KeyOpcode::NotPressed => ProgramCounterStep::cond(!pressed),
        };
        Ok(step)
    }

    fn misc(&mut self, opcode: &Misc) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        let x = opcode.x;
        let mut op = Operation::None;
        let mut pcs = ProgramCounterStep::Next;
        match opcode.ops {
            MiscOpcode::GetDelayTimer => {
                // FX07
                self.registers[x] = self.delay_timer.get_value();
            }
            MiscOpcode::AwaitKeyPress => {
                // FX0A
                // Blocks by moving the counter back onto this instruction,
                // until the driver reports any pressed key.
                match self.keyboard.first_pressed() {
                    Some(key) => {
                        if self.quirks.capture_awaited_key {
                            self.registers[x] = key as u8;
                        }
                    }
                    None => {
                        log::debug!("waiting for a key press");
                        op = Operation::Wait;
                        pcs = ProgramCounterStep::Repeat;
                    }
                }
            }
            MiscOpcode::SetDelayTimer => {
                // FX15
                self.delay_timer.set_value(self.registers[x]);
            }
            MiscOpcode::SetSoundTimer => {
                // FX18
                self.sound_timer.set_value(self.registers[x]);
            }
            MiscOpcode::AddVxToI => {
                // FX1E
                let (res, overflow) = self.index_register.overflowing_add(u16::from(self.registers[x]));
                self.index_register = res;
                self.registers[cpu::register::LAST] = u8::from(overflow);
            }
            MiscOpcode::SetIToSprite => {
                // FX29
                let val = self.registers[x] as usize;
                let location = display::fontset::LOCATION + display::fontset::CHAR_SIZE * val;
                self.index_register = location as u16;
            }
            MiscOpcode::StoreBCD => {
                // FX33
                let range = self.memory_range(self.index_register as usize, 3)?;
                let r = self.registers[x];
                // 246u8 => [2, 4, 6]
                self.memory[range].copy_from_slice(&[r / 100, r / 10 % 10, r % 10]);
            }
            MiscOpcode::StoreV0ToVx => {
                // FX55
                let range = self.memory_range(self.index_register as usize, x + 1)?;
                self.memory[range].copy_from_slice(&self.registers[..=x]);
            }
            MiscOpcode::FillV0ToVx => {
                // FX65
                let range = self.memory_range(self.index_register as usize, x + 1)?;
                self.registers[..=x].copy_from_slice(&self.memory[range]);
            }
        }
        Ok((pcs, op))
    }
}
