use colored::{ColoredString, Colorize};

use crate::cli::StatusFilter;
use crate::cli::commands::service_helpers;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::swap_request::{RequestStatus, SwapRequest};

const COLUMNS: [&str; 7] = ["id", "status", "from", "to", "with", "reason", "updatedAt"];

/// Execute the `shiftswap list` command.
///
/// Shows all requests newest first as a table, optionally filtered by
/// status.
pub fn execute(status: Option<StatusFilter>) -> Result<()> {
    let service = service_helpers::request_service()?;
    let all = service.list_requests()?;

    if all.is_empty() {
        println!("No requests yet.");
        return Ok(());
    }

    let shown: Vec<&SwapRequest> = all
        .iter()
        .filter(|r| status.is_none_or(|f| f.matches(r.status)))
        .collect();

    if shown.is_empty() {
        output::warning("No requests match the given status");
        return Ok(());
    }

    output::header(&format!("shiftswap list ({} requests)", shown.len()));
    print_table(&shown);

    Ok(())
}

fn row(request: &SwapRequest) -> [String; 7] {
    [
        request.id.clone(),
        request.status.to_string(),
        request.from.clone(),
        request.to.clone(),
        request.with.clone(),
        request.reason.clone(),
        request
            .updated_at
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    ]
}

/// Column widths fitting both the header and every cell.
fn widths(rows: &[[String; 7]]) -> [usize; 7] {
    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths
}

fn print_table(requests: &[&SwapRequest]) {
    let rows: Vec<[String; 7]> = requests.iter().map(|r| row(r)).collect();
    let widths = widths(&rows);

    let header: Vec<String> = COLUMNS
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{c:<w$}").bold().to_string())
        .collect();
    println!("  {}", header.join("  "));

    for (request, cells) in requests.iter().zip(&rows) {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                let padded = format!("{cell:<w$}");
                if i == 1 {
                    colorize_status(request.status, padded).to_string()
                } else {
                    padded
                }
            })
            .collect();
        println!("  {}", line.join("  "));
    }
}

fn colorize_status(status: RequestStatus, text: String) -> ColoredString {
    match status {
        RequestStatus::Pending => text.yellow(),
        RequestStatus::Approved => text.green(),
        RequestStatus::Denied => text.red(),
    }
}
