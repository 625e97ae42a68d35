//! Command implementations

pub mod analyze;
pub mod check;
pub mod simple;
pub mod survey;

pub use analyze::{AnalysisResult, analyze_root, find_constructible};
pub use check::{CheckEntry, CheckResult, check_words};
pub use simple::run_simple;
pub use survey::{RootYield, SurveyStatistics, run_survey};
