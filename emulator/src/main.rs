use std::{path::PathBuf, process::exit};

use anyhow::Context;
use clap::{ArgAction, Parser};
use env_logger::Env;
use libdeassembler::Deassembler;
use libemulator::{config::DEFAULT_MAX_STEPS, tracing::EmulatorTracing, Emulator, EmulatorConfig};
use log::info;
use source::ImageSource;

mod source;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path of a memory image file
    image_path: Option<PathBuf>,

    /// Memory image given as hex bytes, whitespace between bytes is ignored
    #[arg(long, conflicts_with = "image_path")]
    hex: Option<String>,

    /// Run the built-in addition program
    #[arg(long, conflicts_with_all = ["image_path", "hex"])]
    demo: bool,

    /// Overwrite the first input word
    #[arg(long)]
    input1: Option<u16>,

    /// Overwrite the second input word
    #[arg(long)]
    input2: Option<u16>,

    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Don't limit the number of executed instructions
    #[arg(long, conflicts_with = "max_steps")]
    unbounded: bool,

    /// Print every executed instruction with its state changes
    #[arg(long)]
    trace: bool,

    /// Print the final memory image
    #[arg(long)]
    dump: bool,

    /// Print the instruction listing before running
    #[arg(long)]
    listing: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    if let Err(e) = emulate(&args) {
        eprintln!("!> {:#}", e);
        exit(1);
    }
}

fn emulate(args: &Args) -> anyhow::Result<()> {
    let source = ImageSource::from_args(args)?;
    let mut image = source.load()?;
    info!("Loaded memory image from {:?}", source);

    if let Some(input1) = args.input1 {
        image = image.with_input1(input1);
    }

    if let Some(input2) = args.input2 {
        image = image.with_input2(input2);
    }

    if args.listing {
        print!("{}", Deassembler::for_image(image.bytes()).deassemble_text());
    }

    let config = EmulatorConfig::new()
        .with_max_steps((!args.unbounded).then_some(args.max_steps))
        .with_trace(args.trace);

    let mut emulator = Emulator::new(image.bytes(), config)?;
    let result = emulator.execute_to_halt();

    // Print the trace before bailing out, it's most interesting for failed runs.
    if let Some(tracing) = &emulator.tracing {
        print_trace(tracing);
    }

    let steps = result.context("Program didn't run to halt")?;
    let output = libemulator::image::output_word(emulator.memory.data());

    println!("<<<   Output: {} ({:#06x}), {} instructions   >>>", output, output, steps);

    if args.dump {
        println!("{:02x?}", emulator.memory.data());
    }

    Ok(())
}

fn print_trace(tracing: &EmulatorTracing) {
    for step in &tracing.steps {
        let patches = step
            .memory_patches
            .iter()
            .map(|patch| {
                format!(
                    "[{}] {:02x} -> {:02x}",
                    patch.addr, patch.old_value, patch.new_value
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "{:>2}: {:<16} GPRs: {:?} {}",
            step.pc,
            step.instruction.to_string(),
            step.registers,
            patches
        );
    }
}
