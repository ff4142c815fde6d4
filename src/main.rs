// src/main.rs
mod args;
mod error;
mod files;
mod transform;

use std::io::{self, Write};
use std::process;

use args::Args;
use error::EncryptorError;

const USAGE: &str = "Usage: encryptor <filename> <argument>\n\
                     Arguments:  -e encrypt, -d decrypt\n\
                     Example:  encryptor somefile.txt -d";

fn main() {
    let args = match Args::arguments(std::env::args()) {
        Ok(a) => a,
        Err(e) => fail(&e),
    };
    if let Err(e) = run(&args) {
        fail(&e);
    }
    // Literal completion signal, no trailing newline.
    print!("done");
    let _ = io::stdout().flush();
}

fn run(args: &Args) -> Result<(), EncryptorError> {
    let mut data = files::read_file(&args.filename)?;
    transform::apply(args.direction, &mut data);
    let out_name = files::derive_output_name(&args.filename, args.direction);
    files::write_file(&out_name, &data)?;
    Ok(())
}

fn fail(err: &EncryptorError) -> ! {
    eprintln!("Error: {err}");
    eprintln!("{USAGE}");
    process::exit(1);
}
