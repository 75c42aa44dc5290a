use libisa::MEMORY_SIZE;
use memory::Memory;
use regfile::RegFile;
use tracing::EmulatorTracing;

pub mod config;
pub mod execute;
pub mod image;
pub mod memory;
pub mod regfile;
pub mod tracing;

pub use config::EmulatorConfig;
pub use execute::{ExecuteErr, ExecuteOk};
pub use image::MemoryImage;

pub struct Emulator {
    pub memory: Memory,
    pub reg_file: RegFile,
    pub config: EmulatorConfig,
    pub tracing: Option<EmulatorTracing>,

    steps: usize,
}

impl Emulator {
    /// Creates an emulator working on a copy of the image, which must be exactly [`MEMORY_SIZE`] bytes long.
    pub fn new(image: &[u8], config: EmulatorConfig) -> Result<Self, ExecuteErr> {
        let data: [u8; MEMORY_SIZE] = image
            .try_into()
            .map_err(|_| ExecuteErr::InvalidMemorySize(image.len()))?;

        Ok(Self {
            memory: Memory::new(data),
            reg_file: RegFile::new(),
            tracing: config.trace.then(EmulatorTracing::default),
            config,
            steps: 0,
        })
    }

    /// Number of instructions executed so far, halt included.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn into_image(self) -> [u8; MEMORY_SIZE] {
        self.memory.into_data()
    }
}

/// Runs an image to halt with the default configuration and returns the final memory.
pub fn run(image: &[u8]) -> Result<[u8; MEMORY_SIZE], ExecuteErr> {
    run_with_config(image, EmulatorConfig::default())
}

pub fn run_with_config(
    image: &[u8],
    config: EmulatorConfig,
) -> Result<[u8; MEMORY_SIZE], ExecuteErr> {
    let mut emulator = Emulator::new(image, config)?;
    emulator.execute_to_halt()?;

    Ok(emulator.into_image())
}
