use clap::Args;
use serde_json::Value;

use mortgage_rate_core::report::{self, LoanScenario};

use crate::input;

#[derive(Args)]
pub struct ReportArgs {
    /// Path to a JSON scenario file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let scenario: LoanScenario = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <scenario.json> or stdin required for the loan report".into());
    };
    let result = report::generate_report(&scenario)?;
    Ok(serde_json::to_value(result)?)
}
