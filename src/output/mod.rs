pub mod formatter;

pub use formatter::{
    format_analytics, format_college_list, format_course_list, format_elapsed,
    format_extended_result, format_plans, format_receipt, format_scholarship_list,
    format_stream_result, format_timeline, should_use_colors,
};
