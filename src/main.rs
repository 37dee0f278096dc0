use std::process::ExitCode;

use log::{debug, error, warn};
use simplecalc::{calc_with, CalcError, FormatOptions};

const DIGITS_VAR: &str = "SIMPLECALC_DIGITS";

fn main() -> ExitCode {
    // `.env` may set RUST_LOG, so it is read before the logger starts
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        debug!("dotenvy load with error {}", e);
    }

    let args = std::env::args().skip(1).collect::<Vec<String>>();
    if args.is_empty() {
        eprintln!("usage: simplecalc <expression>...");
        return ExitCode::from(2);
    }

    let input = args.join(" ");
    debug!("{:?}", input);

    match calc_with(&input, &load_options()) {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", diagnostic(&input, &err));
            ExitCode::FAILURE
        }
    }
}

fn load_options() -> FormatOptions {
    let Ok(raw) = std::env::var(DIGITS_VAR) else {
        return FormatOptions::default();
    };
    match raw.trim().parse::<usize>() {
        Ok(digits) => FormatOptions::with_significant_digits(digits),
        Err(e) => {
            warn!("ignoring {}={:?}: {}", DIGITS_VAR, raw, e);
            FormatOptions::default()
        }
    }
}

fn diagnostic(input: &str, err: &CalcError) -> String {
    match err.position() {
        Some(position) => format!("{}\n{}\n{}^", err, input, " ".repeat(position)),
        None => err.to_string(),
    }
}
