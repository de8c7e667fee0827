//! Demo CLI: read a JSON name request from argv or stdin, print the JSON
//! result. Stands in for the HTTP transport during development and applies
//! the transport-side contract (trim + upper-case + strict validation).

use onomast::{NameRequest, Transliterator};
use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    let input = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut buf = String::new();
            if std::io::stdin().read_to_string(&mut buf).is_err() {
                eprintln!("error: could not read stdin");
                return ExitCode::FAILURE;
            }
            buf
        }
    };

    let mut request: NameRequest = match serde_json::from_str(&input) {
        Ok(req) => req,
        Err(e) => {
            eprintln!("error: invalid request JSON: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Transport-side normalization before strict validation.
    request.first_name = request.first_name.trim().to_owned();
    request.last_name = request.last_name.trim().to_owned();
    request.country = request.country.trim().to_uppercase();
    if let Err(e) = request.validate_strict() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let service = Transliterator::new();
    match service.transliterate(&request) {
        Ok(result) => {
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("error: could not serialize result: {e}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
