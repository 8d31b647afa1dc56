pub mod attachment_naming;
pub mod csv_grouper;
pub mod metadata_parser;
pub mod table_merger;

pub use attachment_naming::local_file_names;
pub use csv_grouper::{CsvGrouper, ScannedFile};
pub use metadata_parser::parse_file_metadata;
pub use table_merger::{TableMerger, SOURCE_FILE_COLUMN};
