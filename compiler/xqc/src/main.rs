//! Lexer workbench CLI for the query-language family.

use xqc::commands::lex_file;
use xqc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            let mut xpath_only = false;
            let mut path = None;

            for arg in args.iter().skip(2) {
                if arg == "--xpath" {
                    xpath_only = true;
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                }
            }

            let Some(path) = path else {
                eprintln!("Usage: xqc lex [--xpath] <file.xq>");
                std::process::exit(1);
            };
            lex_file(path, xpath_only);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("xqc {}", env!("CARGO_PKG_VERSION"));
        }
        command => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Lexer workbench for the XPath/XQuery family");
    println!();
    println!("Usage: xqc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.xq>     Tokenize a file and display the tokens");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Lex options:");
    println!("  --xpath           Use the base expression lexer only");
}
