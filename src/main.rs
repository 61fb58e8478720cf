use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use minipas::{
    output::{beauty_table, to_json},
    run,
};
use tracing::{Level, debug, error};

/// minipas runs a small Pascal-like program and reports the final value of
/// every declared variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the variables as a JSON object instead of a table.
    #[arg(long)]
    variables_to_json: bool,

    /// Prints the variables as a bordered table. This is the default.
    #[arg(long, conflicts_with = "variables_to_json")]
    beauty_variables_output: bool,

    /// Additionally writes the variables as JSON to this file.
    #[arg(long, value_name = "FILE")]
    json_output_file: Option<PathBuf>,

    /// Logs the progress of each phase to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The program to run.
    input_file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_writer(std::io::stderr)
                             .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
                             .init();

    let source = match fs::read_to_string(&args.input_file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", args.input_file.display());
            return ExitCode::FAILURE;
        },
    };
    debug!(file = %args.input_file.display(), bytes = source.len(), "read input");

    let memory = match run(&source) {
        Ok(memory) => memory,
        Err(e) => {
            error!(file = %args.input_file.display(), error = %e, "run failed");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        },
    };

    let json = match to_json(&memory) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        },
    };

    if args.variables_to_json && !args.beauty_variables_output {
        println!("{json}");
    } else {
        print!("{}", beauty_table(&memory));
    }

    if let Some(path) = &args.json_output_file {
        if let Err(e) = fs::write(path, format!("{json}\n")) {
            eprintln!("Error: could not write '{}': {e}", path.display());
            return ExitCode::FAILURE;
        }
        debug!(file = %path.display(), "wrote JSON output");
    }

    ExitCode::SUCCESS
}
