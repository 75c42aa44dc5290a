use super::{AssemblyError, Instruction};

/// Assembles a program into the bytes of the instruction region.
pub fn assemble<I>(instructions: I) -> Result<Vec<u8>, AssemblyError>
where
    I: IntoIterator<Item = Instruction>,
{
    let max = crate::INSTRUCTION_REGION.end() + 1;

    let machine_code = instructions
        .into_iter()
        .fold(Vec::with_capacity(max), |mut output, instruction| {
            output.extend(instruction.assemble());
            output
        });

    if machine_code.len() > max {
        return Err(AssemblyError::ProgramTooLong {
            len: machine_code.len(),
            max,
        });
    }

    Ok(machine_code)
}
