use std::{env, fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use log::info;
use ts2js::{compile_file, display_error};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <input> [output]", args.first().map(String::as_str).unwrap_or("ts2js"));
        exit(2);
    }

    let input = PathBuf::from(&args[1]);
    let output = match args.get(2) {
        Some(path) => PathBuf::from(path),
        None => input.with_extension("js"),
    };

    let start = Instant::now();

    if let Err(error) = compile_file(&input, &output) {
        let source = read_to_string(&input).unwrap_or_default();
        display_error(&error, &input, &source);
        exit(1);
    }

    info!("Compiled {} -> {} in {:?}", input.display(), output.display(), start.elapsed());
}
