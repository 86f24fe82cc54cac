pub mod amortization;
pub mod rate;
pub mod report;
