/// Loading of the YAML configuration file.
pub mod config;
/// Counts every fragment of a source and writes the report.
pub mod pipeline;
/// Sources of text fragments.
pub mod source;
