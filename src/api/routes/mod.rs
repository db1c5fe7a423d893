pub mod incidents;
pub mod scans;
