//! The pretty print implementation of the [`chipset`](super::ChipSet), a dump of the full
//! machine state. This implementation was split up into this file for smaller file sizes and
//! higher cohesion.

use super::ChipSet;
use crate::{
    definitions::memory,
    opcode::{self, Opcode},
};
use once_cell::sync::Lazy;
use std::fmt::{self, Write};

/// The length of the pretty print data
/// as a single instruction is u16 the octa
/// size will show how often the block shall
/// be repeated has to be bigger then 0
const HEX_PRINT_STEP: usize = 8;

const END_OF_LINE: char = '\n';
const INDENT_FILLAMENT: char = '\t';
const INDENT_SIZE: usize = 2;

const PIXEL_ON: char = '#';
const PIXEL_OFF: char = '.';

/// The values that are used when there are at lease two rows of zeros.
static ZERO_FILLER: Lazy<String> = Lazy::new(|| format!("{0:#06X} ... {0:#06X}", 0));

/// Will add an indent
fn indent_helper(text: &mut String, indent: usize) {
    for _ in 0..indent {
        text.push(INDENT_FILLAMENT);
    }
}

/// Removes the trailing new line, if there is one.
fn trim_end_of_line(text: &mut String) {
    if text.ends_with(END_OF_LINE) {
        text.pop();
    }
}

/// will formatt the pointers according to definition
fn pointer_formatter(line: &mut String, from: usize, to: usize) -> fmt::Result {
    write!(line, "{:#06X} - {:#06X} :", from, to)
}

/// Handles all the opcode prints
mod opcode_print {
    use super::*;

    /// The internal length of the given data
    /// as the data is stored as u8 and an opcode
    /// is u16 long
    const POINTER_INCREMENT: usize = HEX_PRINT_STEP * memory::opcodes::SIZE as usize;

    /// this struct will simulate a single row of opcodes (only in this context)
    struct Row {
        from: usize,
        to: usize,
        /// `None` if the row only contains zeros
        data: Option<[Opcode; HEX_PRINT_STEP]>,
    }

    /// will pretty print the content of the raw memory
    /// this functions assumes the full data to be passed
    /// as the offset is calculated from the beginning of the
    /// memory block
    pub(super) fn printer(memory: &[u8], indent: usize) -> Result<String, fmt::Error> {
        let mut rows: Vec<Row> = Vec::with_capacity(memory.len() / POINTER_INCREMENT);

        for from in (0..memory.len()).step_by(POINTER_INCREMENT) {
            let to = (from + POINTER_INCREMENT).min(memory.len()) - 1;

            let mut data = [0; HEX_PRINT_STEP];
            for (entry, index) in data
                .iter_mut()
                .zip((from..to).step_by(memory::opcodes::SIZE as usize))
            {
                *entry = opcode::build_opcode(memory, index).map_err(|_| fmt::Error)?;
            }

            if data.iter().all(|&entry| entry == 0) {
                // merge with the previous row, if it only had zeros as well
                if let Some(last) = rows.last_mut() {
                    if last.data.is_none() {
                        last.to = to;
                        continue;
                    }
                }
                rows.push(Row { from, to, data: None });
            } else {
                rows.push(Row {
                    from,
                    to,
                    data: Some(data),
                });
            }
        }

        let mut res = String::new();
        for row in rows {
            indent_helper(&mut res, indent);
            pointer_formatter(&mut res, row.from, row.to)?;
            res.push(' ');
            match row.data {
                Some(data) => {
                    let entries: Vec<String> =
                        data.iter().map(|entry| format!("{:#06X}", entry)).collect();
                    res.push_str(&entries.join(" "));
                }
                None => res.push_str(&ZERO_FILLER),
            }
            res.push(END_OF_LINE);
        }
        trim_end_of_line(&mut res);
        Ok(res)
    }
}

/// will pretty print all the entries, `HEX_PRINT_STEP` per row
fn row_printer<T, F>(data: &[T], indent: usize, entry: F) -> Result<String, fmt::Error>
where
    F: Fn(&T) -> String,
{
    let mut res = String::new();
    for (i, chunk) in data.chunks(HEX_PRINT_STEP).enumerate() {
        let from = i * HEX_PRINT_STEP;
        indent_helper(&mut res, indent);
        pointer_formatter(&mut res, from, from + chunk.len() - 1)?;
        res.push(' ');

        let entries: Vec<String> = chunk.iter().map(&entry).collect();
        res.push_str(&entries.join(" "));
        res.push(END_OF_LINE);
    }
    trim_end_of_line(&mut res);
    Ok(res)
}

/// will draw the framebuffer as text
fn display_printer(chip: &ChipSet, indent: usize) -> String {
    let mut res = String::new();
    for row in chip.get_display() {
        indent_helper(&mut res, indent);
        res.extend(
            row.iter()
                .map(|&pixel| if pixel { PIXEL_ON } else { PIXEL_OFF }),
        );
        res.push(END_OF_LINE);
    }
    trim_end_of_line(&mut res);
    res
}

/// will put the single value on its own indented line
fn value_printer(value: impl fmt::Display, indent: usize) -> String {
    let mut res = String::new();
    indent_helper(&mut res, indent);
    res.push_str(&value.to_string());
    res
}

impl fmt::Display for ChipSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opc = value_printer(format_args!("{:#06X}", self.opcode), INDENT_SIZE);
        let prc = value_printer(format_args!("{:#06X}", self.program_counter), INDENT_SIZE);
        let idx = value_printer(format_args!("{:#06X}", self.index_register), INDENT_SIZE);
        let tim = value_printer(
            format_args!(
                "delay {} sound {}",
                self.delay_timer.get_value(),
                self.sound_timer.get_value()
            ),
            INDENT_SIZE,
        );

        let mem = opcode_print::printer(&self.memory, INDENT_SIZE)?;
        let key = row_printer(self.get_keyboard(), INDENT_SIZE, |&key| {
            u8::from(key).to_string()
        })?;
        let sta = if self.stack.is_empty() {
            value_printer("empty", INDENT_SIZE)
        } else {
            row_printer(&self.stack, INDENT_SIZE, |entry| format!("{:#06X}", entry))?
        };
        let reg = row_printer(&self.registers, INDENT_SIZE, |entry| {
            format!("{:#04X}", entry)
        })?;
        let dis = display_printer(self, INDENT_SIZE);

        write!(
            f,
            "Chipset {{\n\
                \tOpcode :\n{}\n\
                \tProgram Counter :\n{}\n\
                \tIndex :\n{}\n\
                \tTimers :\n{}\n\
                \tMemory :\n{}\n\
                \tKeyboard :\n{}\n\
                \tStack :\n{}\n\
                \tRegister :\n{}\n\
                \tDisplay :\n{}\n\
                }}",
            opc, prc, idx, tim, mem, key, sta, reg, dis
        )
    }
}
