pub mod aggregate;
pub mod analysis;
pub mod bom;
pub mod cli;
pub mod error;
pub mod labels;
pub mod report;
pub mod translation;
