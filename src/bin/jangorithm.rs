use std::{env, io, process};

use jangorithm::{cli::run_cli, init};

fn main() {
    init();

    let args: Vec<String> = env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run_cli(&args, &mut out) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
