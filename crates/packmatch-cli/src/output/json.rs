use packmatch_core::error::PackmatchError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), PackmatchError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
