//! trine-braces CLI
//!
//! Reports unmatched braces in a text file.

use trine_braces::{check_source, init_tracing, list_tokens, read_source, CheckConfig, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    if let Err(error) = dispatch(&args[1], &args[2..]) {
        eprintln!("error: {error}");
        if matches!(error, CliError::Usage(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(error.exit_code());
    }
}

fn dispatch(command: &str, rest: &[String]) -> Result<(), CliError> {
    match command {
        "check" => {
            let config = CheckConfig::from_args(rest)?;
            let source = read_source(&config)?;
            let summary = check_source(&config, &source)?;
            if !config.quiet {
                println!(
                    "{}: balanced ({} blocks, max depth {}, {} other characters)",
                    config.path, summary.blocks, summary.max_depth, summary.chars
                );
            }
            Ok(())
        }
        "tokens" => {
            let config = CheckConfig::from_args(rest)?;
            let source = read_source(&config)?;
            for line in list_tokens(&source) {
                println!("{line}");
            }
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("trine-braces {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => Err(CliError::Usage(format!("unknown command `{other}`"))),
    }
}

fn print_usage() {
    eprintln!("Usage: trine-braces <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  check <file|->     Check that every brace is matched");
    eprintln!("  tokens <file|->    Print each character with its line and column");
    eprintln!("  help               Show this message");
    eprintln!("  version            Show the version");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -q, --quiet        Print nothing when the input is balanced");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=trine_parse=trace) to trace the parser.");
}
