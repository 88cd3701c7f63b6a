use crate::{
    chip8::ChipSet,
    devices::{DisplayCommands, KeyboardCommands},
    opcode::Operation,
    ProcessError,
};

/// Runs a single cycle on behalf of the driver.
///
/// The keyboard is polled into the chip before the instruction runs and the
/// display only receives the framebuffer if the instruction changed it. How
/// often this is called is up to the caller.
pub fn step<K, D>(chip: &mut ChipSet, keyboard: &K, display: &mut D) -> Result<Operation, ProcessError>
where
    K: KeyboardCommands,
    D: DisplayCommands,
{
    chip.set_keyboard(&keyboard.get_keyboard());

    let operation = chip.next()?;

    if matches!(operation, Operation::Draw) {
        /* draw the screen */
        display.display(chip.get_display());
    }

    Ok(operation)
}
