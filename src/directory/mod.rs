pub mod data;
pub mod filter;
pub mod threshold;
pub mod types;

pub use filter::{
    apply, toggle_saved, CollegeFilter, CourseFilter, RecordFilter, ScholarshipFilter, Searchable,
    TimelineFilter,
};
pub use threshold::Threshold;
pub use types::{
    College, Course, DaysUntil, Demand, EventStatus, EventType, InstitutionType, Priority,
    Scholarship, ScholarshipType, TimelineEvent,
};
