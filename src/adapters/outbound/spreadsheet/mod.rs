/// Spreadsheet adapters: template-based xlsx summaries
mod package;
mod xlsx_template_writer;
mod xml_parts;

pub use xlsx_template_writer::{XlsxTemplateWriter, DATA_SOURCE_NAME, PRBS_SOURCE_NAME};
