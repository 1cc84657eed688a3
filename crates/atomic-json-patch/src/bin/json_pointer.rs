//! `json-pointer`: look up a JSON Pointer (RFC 6901) in a document.
//!
//! Usage:
//!   json-pointer '<pointer>'
//!
//! The document is read from stdin. The pointer is the first argument.

use std::io::{self, Read, Write};

use atomic_json_patch::json_cli::{read_json_pointer, CliError};
use tracing_subscriber::EnvFilter;

fn run() -> Result<String, CliError> {
    let pointer = std::env::args()
        .nth(1)
        .ok_or_else(|| CliError::Usage("First argument must be a JSON Pointer.".to_string()))?;
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    read_json_pointer(buf.trim(), &pointer)
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("atomic_json_patch=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let output = run().and_then(|result| {
        let mut stdout = io::stdout().lock();
        stdout.write_all(result.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    });
    if let Err(e) = output {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
