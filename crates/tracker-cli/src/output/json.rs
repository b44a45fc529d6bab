use serde::Serialize;
use tracker_core::error::TrackerError;

pub fn print<T: Serialize>(value: &T) -> Result<(), TrackerError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
