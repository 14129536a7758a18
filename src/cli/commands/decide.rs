use crate::cli::commands::service_helpers;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::swap_request::Decision;

/// Execute `shiftswap approve` or `shiftswap deny`.
pub fn execute(id: &str, decision: Decision) -> Result<()> {
    let service = service_helpers::request_service()?;
    let record = service.set_status(id, decision)?;

    output::success(&format!("Request {} {}", record.id, record.status));
    Ok(())
}
