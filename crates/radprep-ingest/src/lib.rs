pub mod error;
pub mod header;
pub mod loader;
pub mod profile;

pub use error::{IngestError, Result};
pub use header::{detect_header_line, detect_header_row};
pub use loader::{LoadOptions, load_table};
pub use profile::profile_columns;
