//! Postrate CLI - batch postage rating
//!
//! Reads an input file with one mail-piece description per line and prints
//! one cost per line (or UNMAILABLE). Invalid lines are reported in place;
//! the batch keeps going and the exit status reflects whether every line
//! was rated.

use postrate::*;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match args[1].as_str() {
        "version" | "--version" | "-v" => {
            println!("postrate {}", VERSION);
            ExitCode::SUCCESS
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        _ => match run(&args[1..]) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(1)
            }
        },
    }
}

fn print_usage() {
    println!(
        r#"
Postrate - batch postage rating

USAGE:
    postrate <input-file> [OPTIONS]

Each input line describes one mail piece:

    <index>. <length>, <height>, <thickness>, <origin-zip>, <destination-zip>

The "<index>. " prefix is optional. Output is one line per input line: the
cost to two decimals, or UNMAILABLE.

OPTIONS:
    --json    JSON output format

EXAMPLES:
    postrate pieces.txt
    postrate pieces.txt --json
"#
    );
}

fn run(args: &[String]) -> Result<()> {
    let input_path = &args[0];
    let json_output = args.contains(&"--json".to_string());

    let content = fs::read_to_string(input_path).map_err(Error::Io)?;
    let report = rate_lines(content.lines());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_report());
    }

    if report.has_errors() {
        Err(format!(
            "{} of {} lines could not be rated",
            report.error_count(),
            report.lines.len()
        )
        .into())
    } else {
        Ok(())
    }
}
