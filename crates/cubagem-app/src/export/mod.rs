//! Export of evaluation results

pub mod excel;

pub use excel::{export_to_buffer, export_to_excel, DEFAULT_FILE_NAME, SHEET_NAME};
