//! Terminal output and session reporting

pub mod display;
pub mod formatters;
pub mod sink;

pub use display::{
    ConsoleSink, print_analysis_result, print_benchmark_result, print_comparison,
    print_solve_details, print_solve_header,
};
pub use sink::{LogSink, NullSink, RecordingSink, ReportSink, SessionReport, StepEvent};
