/// Presentation layer: renders engine output as plain text.
///
/// Consumes only the structured tables and summary metrics; nothing in here
/// reaches into the loader or filter internals.

pub mod report;
