//! Summary CLI command

use crate::config::Settings;
use crate::display::format_summary;
use crate::error::SpendlogResult;
use crate::services::Ledger;

/// Print the spend summary: totals, category breakdown, and date series
pub fn handle_summary_command(ledger: &Ledger, settings: &Settings) -> SpendlogResult<()> {
    print!("{}", format_summary(&ledger.summary(), settings));
    Ok(())
}
