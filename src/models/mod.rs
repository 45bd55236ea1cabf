mod output;

pub use output::{Header, Output, REPORT_FORMAT_VERSION};
