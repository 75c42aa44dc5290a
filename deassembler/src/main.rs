use std::{env, fs, path::PathBuf, process::exit};

use libdeassembler::Deassembler;

fn main() {
    let path: PathBuf = env::args().skip(1).collect();

    if path.file_name().is_none() {
        eprintln!("Specify the memory image file path as arguments.");
        exit(1);
    }

    let image = match fs::read(path) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error reading memory image file: {}", e);
            exit(1);
        }
    };

    if image.len() != libisa::MEMORY_SIZE {
        eprintln!(
            "Memory image is {} bytes long, expected {}",
            image.len(),
            libisa::MEMORY_SIZE
        );
        exit(1);
    }

    let deassembler = Deassembler::for_image(&image);
    print!("{}", deassembler.deassemble_text());
    println!();
}
