use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use lang_parser::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};
use tracing::debug;

/// Enable with `RUST_LOG=lang_parser=debug` or `RUST_LOG=lang_parser=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args.first().map(String::as_str).unwrap_or("lang_parser"));
        return ExitCode::FAILURE;
    }

    let file_path = &args[1];
    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&file_contents) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, file_path);
            return ExitCode::FAILURE;
        }
    };

    debug!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let ast = match parse(tokens) {
        Ok(ast) => ast,
        Err(error) => {
            display_error(&error, file_path);
            return ExitCode::FAILURE;
        }
    };

    debug!("Parsed in {:?}", parse_start.elapsed());

    println!("{:#?}", ast);

    ExitCode::SUCCESS
}

fn display_error(error: &Error, file: &str) {
    /*
        Error: UnexpectedToken (Unexpected token: `EOF`, did you miss a semicolon?)
        -> final.lang at token 4
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {} at {}", file, error.get_position());
    eprintln!("   {}", error.kind());
}
