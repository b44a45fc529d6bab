use tracker_core::error::TrackerError;
use tracker_core::filter::{stats, unique_sources};

use crate::output;
use crate::InputArgs;

pub fn run(input: InputArgs, output_format: &str) -> Result<(), TrackerError> {
    let records = super::load(&input)?;
    let s = stats(&records);

    match output_format {
        "json" => output::json::print(&s)?,
        _ => {
            println!("Total Messages  {}", s.total);
            println!("New             {}", s.new);
            println!("In Progress     {}", s.in_progress);
            println!("Handled         {}", s.handled);
            println!("Wedding Leads   {}", s.wedding);

            let sources = unique_sources(&records);
            if !sources.is_empty() {
                println!("\nSources: {}", sources.join(", "));
            }
        }
    }

    Ok(())
}
