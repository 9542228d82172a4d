mod accounts;
mod client;
mod payroll;
mod trips;
pub mod types;
mod vehicles;

pub use client::*;
pub use payroll::TotalsOutcome;
pub use types::*;
