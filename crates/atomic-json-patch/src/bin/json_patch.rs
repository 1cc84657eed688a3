//! `json-patch`: apply a JSON Patch (RFC 6902) to a document.
//!
//! Usage:
//!   json-patch '<patch-array-json>'
//!
//! The document is read from stdin. The patch operations are the first argument.
//! Set `RUST_LOG=atomic_json_patch=debug` to trace each applied entry.

use std::io::{self, Read, Write};

use atomic_json_patch::json_cli::{apply_json_patch, CliError};
use tracing_subscriber::EnvFilter;

fn run() -> Result<String, CliError> {
    let patch = std::env::args()
        .nth(1)
        .ok_or_else(|| CliError::Usage("First argument must be a JSON patch array.".to_string()))?;
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    apply_json_patch(buf.trim(), &patch)
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
