//! Outcome presentation.
//!
//! The structured record goes to stdout as a single newline-terminated
//! JSON object; every other outcome becomes a [`CliError`] carrying the
//! diagnostic for stderr. Nothing here touches stdout except the success
//! path.

use ceprace::Outcome;

use crate::error::CliError;

/// Serializes the final outcome for the caller.
pub fn present(outcome: &Outcome) -> Result<(), CliError> {
    match outcome {
        Outcome::Success(record) => {
            let line =
                serde_json::to_string(record).map_err(|e| CliError::Serialize(e.to_string()))?;
            println!("{}", line);
            Ok(())
        }
        Outcome::NotFound => Err(CliError::NotFound),
        Outcome::Timeout => Err(CliError::DeadlineExceeded),
    }
}
