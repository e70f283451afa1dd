use super::threshold::Threshold;
use super::types::*;
use crate::quiz::Stream;
use chrono::NaiveDate;

/// Records that free-text search looks into
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over every search field.
    /// The query is used as typed, so only an empty one matches everything.
    fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// A set of predicates over one record type. All active predicates must hold.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Keep the records that satisfy `filter`, in their original order.
///
/// Takes any iterator of references so a filtered result can be filtered again.
pub fn apply<'a, T, F, I>(records: I, filter: &F) -> Vec<&'a T>
where
    T: 'a,
    F: RecordFilter<T>,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().filter(|r| filter.matches(r)).collect()
}

impl Searchable for College {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.location.as_str()];
        fields.extend(self.courses.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Course {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

impl Searchable for Scholarship {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.provider.as_str(),
            self.description.as_str(),
        ]
    }
}

impl Searchable for TimelineEvent {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        if let Some(ref college) = self.college {
            fields.push(college);
        }
        fields
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollegeFilter {
    pub query: String,
    pub kind: Option<InstitutionType>,
    pub distance_km: Option<Threshold>,
    pub rating: Option<Threshold>,
    /// Compared against the lowest annual fee
    pub fees: Option<Threshold>,
}

impl RecordFilter<College> for CollegeFilter {
    fn matches(&self, college: &College) -> bool {
        college.matches_query(&self.query)
            && self.kind.map_or(true, |k| college.kind == k)
            && self
                .distance_km
                .map_or(true, |t| t.matches(college.distance_km))
            && self.rating.map_or(true, |t| t.matches(college.rating))
            && self
                .fees
                .map_or(true, |t| t.matches(college.min_annual_fee as f64))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub query: String,
    pub stream: Option<Stream>,
}

impl RecordFilter<Course> for CourseFilter {
    fn matches(&self, course: &Course) -> bool {
        course.matches_query(&self.query) && self.stream.map_or(true, |s| course.stream == s)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScholarshipFilter {
    pub query: String,
    pub kind: Option<ScholarshipType>,
    pub amount: Option<Threshold>,
    /// Deadline on or before this date
    pub deadline_by: Option<NaiveDate>,
}

impl RecordFilter<Scholarship> for ScholarshipFilter {
    fn matches(&self, scholarship: &Scholarship) -> bool {
        let amount_ok = match self.amount {
            None => true,
            // No parseable amount never satisfies an amount predicate
            Some(t) => scholarship
                .amount_value()
                .map_or(false, |v| t.matches(v as f64)),
        };

        scholarship.matches_query(&self.query)
            && self.kind.map_or(true, |k| scholarship.kind == k)
            && amount_ok
            && self.deadline_by.map_or(true, |d| scholarship.deadline <= d)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimelineFilter {
    pub query: String,
    pub kind: Option<EventType>,
}

impl RecordFilter<TimelineEvent> for TimelineFilter {
    fn matches(&self, event: &TimelineEvent) -> bool {
        event.matches_query(&self.query) && self.kind.map_or(true, |k| event.kind == k)
    }
}

/// Flip the saved flag of the scholarship with `id`. Returns the new value,
/// or None if no scholarship has that id.
pub fn toggle_saved(scholarships: &mut [Scholarship], id: &str) -> Option<bool> {
    let scholarship = scholarships.iter_mut().find(|s| s.id == id)?;
    scholarship.saved = !scholarship.saved;
    Some(scholarship.saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::data;

    fn ids<T, F: Fn(&T) -> &str>(records: &[&T], id: F) -> Vec<String> {
        records.iter().map(|r| id(r).to_string()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let colleges = data::colleges();
        let result = apply(&colleges, &CollegeFilter::default());
        assert_eq!(result.len(), colleges.len());
    }

    #[test]
    fn test_college_search_is_case_insensitive() {
        let colleges = data::colleges();
        let filter = CollegeFilter {
            query: "NEW DELHI".to_string(),
            ..Default::default()
        };
        let result = apply(&colleges, &filter);
        assert_eq!(ids(&result, |c| c.id.as_str()), vec!["jnu", "jmi", "ignou"]);
    }

    #[test]
    fn test_search_query_is_not_trimmed() {
        let colleges = data::colleges();
        let filter = CollegeFilter {
            query: "  ".to_string(),
            ..Default::default()
        };
        assert!(apply(&colleges, &filter).is_empty());

        let filter = CollegeFilter {
            query: " delhi".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&colleges, &filter).len(), 3);
    }

    #[test]
    fn test_college_search_matches_course_codes() {
        let colleges = data::colleges();
        let filter = CollegeFilter {
            query: "b.tech".to_string(),
            ..Default::default()
        };
        let result = apply(&colleges, &filter);
        assert_eq!(ids(&result, |c| c.id.as_str()), vec!["iitj"]);
    }

    #[test]
    fn test_college_thresholds_combine() {
        let colleges = data::colleges();
        let filter = CollegeFilter {
            distance_km: Some(Threshold::AtMost(10.0)),
            rating: Some(Threshold::AtLeast(4.5)),
            ..Default::default()
        };
        let result = apply(&colleges, &filter);
        assert_eq!(ids(&result, |c| c.id.as_str()), vec!["iitj", "jnu", "jmi"]);
    }

    #[test]
    fn test_college_fee_threshold() {
        let colleges = data::colleges();
        let filter = CollegeFilter {
            fees: Some(Threshold::parse("<=12000").unwrap()),
            ..Default::default()
        };
        let result = apply(&colleges, &filter);
        assert_eq!(ids(&result, |c| c.id.as_str()), vec!["amu", "jmi", "ignou"]);
    }

    #[test]
    fn test_college_type_filter() {
        let colleges = data::colleges();
        let filter = CollegeFilter {
            kind: Some(InstitutionType::Institute),
            ..Default::default()
        };
        assert!(apply(&colleges, &filter).is_empty());
    }

    #[test]
    fn test_course_stream_and_search() {
        let courses = data::courses();
        let filter = CourseFilter {
            query: "business".to_string(),
            stream: Some(Stream::Commerce),
        };
        let result = apply(&courses, &filter);
        assert_eq!(ids(&result, |c| c.id.as_str()), vec!["bcom", "bba"]);
    }

    #[test]
    fn test_scholarship_amount_and_type() {
        let scholarships = data::scholarships();
        let filter = ScholarshipFilter {
            kind: Some(ScholarshipType::Merit),
            amount: Some(Threshold::AtLeast(25000.0)),
            ..Default::default()
        };
        let result = apply(&scholarships, &filter);
        assert_eq!(ids(&result, |s| s.id.as_str()), vec!["1", "3"]);
    }

    #[test]
    fn test_scholarship_search_provider() {
        let scholarships = data::scholarships();
        let filter = ScholarshipFilter {
            query: "ministry".to_string(),
            ..Default::default()
        };
        let result = apply(&scholarships, &filter);
        assert_eq!(ids(&result, |s| s.id.as_str()), vec!["1", "2", "5"]);
    }

    #[test]
    fn test_scholarship_deadline() {
        let scholarships = data::scholarships();
        let filter = ScholarshipFilter {
            deadline_by: NaiveDate::from_ymd_opt(2024, 7, 10),
            ..Default::default()
        };
        let result = apply(&scholarships, &filter);
        assert_eq!(ids(&result, |s| s.id.as_str()), vec!["3", "4"]);
    }

    #[test]
    fn test_timeline_search_includes_college() {
        let events = data::timeline_events();
        let filter = TimelineFilter {
            query: "banaras".to_string(),
            kind: None,
        };
        let result = apply(&events, &filter);
        assert_eq!(ids(&result, |e| e.id.as_str()), vec!["4"]);
    }

    #[test]
    fn test_timeline_type() {
        let events = data::timeline_events();
        let filter = TimelineFilter {
            query: String::new(),
            kind: Some(EventType::Admission),
        };
        let result = apply(&events, &filter);
        assert_eq!(ids(&result, |e| e.id.as_str()), vec!["1", "6"]);
    }

    #[test]
    fn test_filter_preserves_order_and_is_idempotent() {
        let colleges = data::colleges();
        let filter = CollegeFilter {
            query: "university".to_string(),
            rating: Some(Threshold::AtLeast(4.5)),
            ..Default::default()
        };
        let once = apply(&colleges, &filter);
        let twice = apply(once.iter().copied(), &filter);
        assert_eq!(once, twice);

        // Subsequence of the input
        let positions: Vec<usize> = once
            .iter()
            .map(|c| colleges.iter().position(|x| x.id == c.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_toggle_saved() {
        let mut scholarships = data::scholarships();
        assert_eq!(toggle_saved(&mut scholarships, "2"), Some(false));
        assert_eq!(toggle_saved(&mut scholarships, "2"), Some(true));
        assert_eq!(toggle_saved(&mut scholarships, "99"), None);
    }
}
