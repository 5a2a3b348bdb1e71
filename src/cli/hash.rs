//! Hash generator command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::services::HashAlgorithm;
use clap::Args;
use serde::Serialize;

/// Hash text with a SHA-2 digest
#[derive(Debug, Clone, Args)]
pub struct HashArgs {
    /// Text to hash (UTF-8)
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// Digest algorithm (sha256, sha384, sha512)
    #[arg(short, long, value_name = "ALGORITHM", default_value = "sha256")]
    pub algorithm: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct HashResponse {
    algorithm: String,
    digest: String,
}

impl HashArgs {
    /// Execute the hash command
    pub fn execute(&self) -> CliResult<()> {
        let algorithm: HashAlgorithm = self
            .algorithm
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;
        let digest = algorithm.digest_hex(&self.text);

        if self.json {
            return print_json(&HashResponse {
                algorithm: algorithm.to_string(),
                digest,
            });
        }

        println!("{digest}");
        Ok(())
    }
}
