use crate::cli::commands::service_helpers;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::swap_request::NewRequest;

/// Execute the `shiftswap request` command.
///
/// Prints the created record as JSON so scripts can pick up its id.
pub fn execute(input: NewRequest) -> Result<()> {
    let service = service_helpers::request_service()?;
    let record = service.create_request(input)?;

    output::success("Request created");
    let json = serde_json::to_string_pretty(&record).map_err(std::io::Error::other)?;
    println!("{json}");

    Ok(())
}
