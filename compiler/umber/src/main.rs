//! Umber CLI
//!
//! Context-sensitive PHP highlighting lexer.

use umber::commands::{detect_file, lex_file, parse_lex_args, CliError};

fn main() {
    umber::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: umber lex <file.php | -> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --raw                   Do not merge adjacent tokens of the same kind");
                eprintln!("  --short                 Print short kind names (CSS classes)");
                eprintln!("  --option <key=value>    Lexer option (start_inline, funcnamehighlighting, disabledmodules)");
                std::process::exit(1);
            }

            let parsed = parse_lex_args(&args[2..]).unwrap_or_else(|e| fail(&e));
            if let Err(e) = lex_file(&parsed) {
                fail(&e);
            }
        }
        "detect" => {
            let Some(path) = args.get(2) else {
                eprintln!("error: missing file path");
                eprintln!("Usage: umber detect <file.php | ->");
                std::process::exit(1);
            };
            if let Some(extra) = args.get(3) {
                fail(&CliError::UnexpectedArgument(extra.clone()));
            }

            match detect_file(path) {
                Ok(true) => println!("php"),
                Ok(false) => {
                    println!("not php");
                    std::process::exit(1);
                }
                Err(e) => fail(&e),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("umber {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(error: &CliError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Umber (PHP highlighting lexer)");
    println!();
    println!("Usage: umber <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.php>       Tokenize and display tokens");
    println!("  detect <file.php>    Report whether a file looks like PHP");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --raw                   Do not merge adjacent tokens of the same kind");
    println!("  --short                 Print short kind names (CSS classes)");
    println!("  --option <key=value>    Lexer option, may be repeated");
    println!();
    println!("Use `-` as the file to read standard input.");
    println!("Set RUST_LOG (e.g. RUST_LOG=umber_php=trace) to see lexer tracing.");
}
