//! Fixed-path entry point: restyles `DIRECTORY.yaml` in the working
//! directory into `updated_dir.yaml`. No flags, no environment variables.

use std::process;

fn main() {
    if let Err(err) = dirstyle::restyle(dirstyle::INPUT_PATH, dirstyle::OUTPUT_PATH) {
        eprintln!("dirstyle: {err}");
        process::exit(1);
    }
}
