// Formatting and display functionality
pub mod output;
pub mod report;
