pub mod report;
pub mod result_entry;
pub mod test_record;

pub use report::{ReportOutput, ReportOutputTestRun};
pub use result_entry::{CaseId, ResultBatch, ResultEntry, ResultStatus, MAX_BATCH_SIZE};
pub use test_record::{RawTestLine, TestAction, TestRecord};
