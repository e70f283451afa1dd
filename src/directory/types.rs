use crate::quiz::Stream;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InstitutionType {
    University,
    College,
    Institute,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct College {
    pub id: String,
    pub name: String,
    pub location: String,
    pub kind: InstitutionType,
    /// Short course codes, e.g. "BSc", "B.Tech"
    pub courses: Vec<String>,
    pub cut_off: String,
    pub eligibility: String,
    pub medium: String,
    pub facilities: Vec<String>,
    pub rating: f64,
    /// Display string, e.g. "₹25,000-1,20,000/year"
    pub fees: String,
    /// Lowest annual fee in rupees, used for fee filtering
    pub min_annual_fee: u32,
    pub admission_date: String,
    pub contact: Contact,
    pub description: String,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Demand {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub stream: Stream,
    pub duration: String,
    pub description: String,
    pub career_paths: Vec<String>,
    pub industries: Vec<String>,
    pub government_exams: Vec<String>,
    pub avg_salary: String,
    pub demand: Demand,
    pub colleges: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScholarshipType {
    Merit,
    Need,
    Caste,
    Sports,
    Academic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scholarship {
    pub id: String,
    pub name: String,
    pub provider: String,
    /// Display string, e.g. "₹50,000/year"
    pub amount: String,
    pub kind: ScholarshipType,
    pub category: String,
    pub deadline: NaiveDate,
    pub eligibility: Vec<String>,
    pub requirements: Vec<String>,
    pub description: String,
    pub application_link: String,
    pub rating: f64,
    pub applications: u32,
    pub saved: bool,
}

impl Scholarship {
    /// Numeric amount from the digits of the display string ("₹50,000/year" -> 50000)
    pub fn amount_value(&self) -> Option<u64> {
        parse_amount(&self.amount)
    }
}

/// Keep only ASCII digits and parse them. None when there are no digits.
pub fn parse_amount(s: &str) -> Option<u64> {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Admission,
    Scholarship,
    Exam,
    Counseling,
    Deadline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Missed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    pub kind: EventType,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub priority: Priority,
    pub status: EventStatus,
    pub description: String,
    pub college: Option<String>,
    pub amount: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub notifications: bool,
}

/// Distance from today to an event date, in whole days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysUntil {
    Past,
    Today,
    Tomorrow,
    Days(i64),
}

impl DaysUntil {
    pub fn between(today: NaiveDate, date: NaiveDate) -> Self {
        match (date - today).num_days() {
            n if n < 0 => DaysUntil::Past,
            0 => DaysUntil::Today,
            1 => DaysUntil::Tomorrow,
            n => DaysUntil::Days(n),
        }
    }
}

impl fmt::Display for DaysUntil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysUntil::Past => write!(f, "Past"),
            DaysUntil::Today => write!(f, "Today"),
            DaysUntil::Tomorrow => write!(f, "Tomorrow"),
            DaysUntil::Days(n) => write!(f, "{} days", n),
        }
    }
}

macro_rules! display_lowercase {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let s = format!("{:?}", self);
                f.write_str(&s.to_lowercase())
            }
        })*
    };
}

display_lowercase!(InstitutionType, Demand, ScholarshipType, EventType, Priority, EventStatus);
