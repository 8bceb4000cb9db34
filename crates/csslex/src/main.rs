//! CSS token stream inspector.
//!
//! `csslex tokens <file>` dumps the token stream with logical positions;
//! `csslex check <file>` prints scanner diagnostics and exits non-zero when
//! any syntax error was found.

mod commands;

use css_lexer::ScannerOptions;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = args[1].as_str();
    let mut options = ScannerOptions::default();
    let mut path: Option<&str> = None;
    for arg in args.iter().skip(2) {
        if arg == "--code-blocks" {
            options.allow_embedded_code_blocks = true;
        } else if !arg.starts_with('-') && path.is_none() {
            path = Some(arg.as_str());
        }
    }

    let code = match (command, path) {
        ("tokens", Some(path)) => commands::dump_tokens(path, options),
        ("check", Some(path)) => commands::check_file(path, options),
        ("tokens" | "check", None) => {
            eprintln!("Usage: csslex {command} <file.css> [--code-blocks]");
            1
        }
        _ => {
            print_usage();
            1
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    eprintln!("Usage: csslex <command> <file.css> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  tokens <file.css>    Dump the token stream with positions");
    eprintln!("  check <file.css>     Report scanner diagnostics only");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --code-blocks        Recognize embedded <% %> server blocks");
}
