pub(crate) mod date;
pub(crate) mod logging;

pub(crate) use date::{format_tracker_date, parse_report_date, parse_tracker_date};
pub(crate) use logging::init_logging;
