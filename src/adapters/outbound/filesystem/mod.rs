/// Filesystem adapters: attachment storage, CSV reading, report output
mod attachment_store;
mod csv_file_reader;
mod file_writer;

pub use attachment_store::FileSystemAttachmentStore;
pub use csv_file_reader::CsvFileReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
