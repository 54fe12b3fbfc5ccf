//! Bulk attendee import engine
//!
//! Takes rows parsed from an upload file and reconciles each one against
//! the conference API: resolve or create the identity and member, then
//! upsert the attendance record for the configured event. One report row
//! per input row; no row failure ever aborts the batch.

pub mod batch;
pub mod config;
pub mod ingest;
pub mod report;

pub use batch::{BulkImporter, ImportOptions};
pub use config::ImportConfig;
pub use report::{ImportReport, ReportRow, RowAction, RowStatus};
