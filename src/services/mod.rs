pub mod case_id;
pub mod line_parser;
pub mod report_builder;
pub mod result_projector;

pub use case_id::extract_case_ids;
pub use line_parser::parse_line;
pub use report_builder::build_output;
pub use result_projector::project_record;
