//! Report folder discovery and collection

mod collector;
mod discovery;
mod meta;

pub(crate) use collector::{CollectOptions, collect_report};
pub(crate) use discovery::{discover_reports, untracked_reports};
