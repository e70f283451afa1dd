//! Built-in catalogues. Small, fixed, and searched with a linear scan.

use super::types::*;
use crate::quiz::Stream;
use chrono::NaiveDate;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Catalogue dates are literals; an invalid one is a typo caught by tests
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn college(
    id: &str,
    name: &str,
    location: &str,
    courses: &[&str],
    cut_off: &str,
    eligibility: &str,
    medium: &str,
    facilities: &[&str],
    rating: f64,
    fees: &str,
    min_annual_fee: u32,
    admission_date: &str,
    contact: (&str, &str, &str),
    description: &str,
    distance_km: f64,
) -> College {
    College {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        kind: InstitutionType::University,
        courses: strings(courses),
        cut_off: cut_off.to_string(),
        eligibility: eligibility.to_string(),
        medium: medium.to_string(),
        facilities: strings(facilities),
        rating,
        fees: fees.to_string(),
        min_annual_fee,
        admission_date: admission_date.to_string(),
        contact: Contact {
            phone: contact.0.to_string(),
            email: contact.1.to_string(),
            website: contact.2.to_string(),
        },
        description: description.to_string(),
        distance_km,
    }
}

pub fn colleges() -> Vec<College> {
    vec![
        college(
            "iitj",
            "Indian Institute of Technology Jammu",
            "Jammu, Jammu and Kashmir",
            &["BSc", "BA", "B.Tech", "BBA", "BCA"],
            "95-100%",
            "Class 12 with 75%",
            "English/Hindi",
            &["Hostel", "Library", "Lab", "Internet", "Sports"],
            4.8,
            "₹1,20,000/year",
            120_000,
            "June 2025",
            ("+91-191-2601100", "admission@iitjammu.ac.in", "www.iitjammu.ac.in"),
            "Premier university offering diverse undergraduate programs with excellent faculty and infrastructure.",
            2.5,
        ),
        college(
            "uk",
            "University of Kashmir",
            "Srinagar, Jammu and Kashmir",
            &["BSc", "BA", "LLB", "MBA", "BE"],
            "80-90%",
            "Class 12 with 65%",
            "English/Hindi/Kashmiri",
            &["Hostel", "Library", "Lab", "Internet", "Medical"],
            4.6,
            "₹25,000-1,20,000/year",
            25_000,
            "August 2025",
            ("+91-194-2224422", "info@uk.ac.in", "www.uk.ac.in"),
            "Ancient university with modern facilities, known for quality education and research.",
            15.0,
        ),
        college(
            "jnu",
            "Jawaharlal Nehru University",
            "New Delhi, Delhi",
            &["BA", "BSc", "BCom"],
            "90-98%",
            "Class 12 with 70%",
            "English",
            &["Hostel", "Library", "Lab", "Internet", "Research Center"],
            4.9,
            "₹20,000-30,000/year",
            20_000,
            "July 2024",
            ("+91-11-2670-4000", "info@jnu.ac.in", "www.jnu.ac.in"),
            "Leading research university with focus on social sciences and humanities.",
            8.0,
        ),
        college(
            "amu",
            "Aligarh Muslim University",
            "Aligarh, Uttar Pradesh",
            &["BSc", "BA", "BCom", "BBA"],
            "75-85%",
            "Class 12 with 50%",
            "English/Urdu",
            &["Hostel", "Library", "Lab", "Internet", "Sports"],
            4.4,
            "₹10,000-18,000/year",
            10_000,
            "June 2024",
            ("+91-571-270-0920", "info@amu.ac.in", "www.amu.ac.in"),
            "Historic university with diverse student population and quality education.",
            25.0,
        ),
        college(
            "jmi",
            "Jamia Millia Islamia",
            "New Delhi, Delhi",
            &["BA", "BCom", "BBA", "BCA"],
            "80-90%",
            "Class 12 with 60%",
            "English/Hindi/Urdu",
            &["Hostel", "Library", "Lab", "Internet", "Sports"],
            4.5,
            "₹12,000-22,000/year",
            12_000,
            "June 2024",
            ("+91-11-2698-1717", "info@jmi.ac.in", "www.jmi.ac.in"),
            "Central university with focus on minority education and social inclusion.",
            5.0,
        ),
        college(
            "ignou",
            "Indira Gandhi National Open University",
            "New Delhi, Delhi",
            &["BA", "BCom", "BBA", "BCA"],
            "Open Admission",
            "Class 12 (any percentage)",
            "English/Hindi",
            &["Study Centers", "Online Library", "Digital Resources"],
            4.2,
            "₹6,000-12,000/year",
            6_000,
            "Rolling Admission",
            ("+91-11-2953-1000", "info@ignou.ac.in", "www.ignou.ac.in"),
            "Distance learning university providing flexible education options.",
            3.0,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    name: &str,
    stream: Stream,
    description: &str,
    career_paths: &[&str],
    industries: &[&str],
    government_exams: &[&str],
    avg_salary: &str,
    demand: Demand,
    colleges: &[&str],
) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        stream,
        duration: "3 Years".to_string(),
        description: description.to_string(),
        career_paths: strings(career_paths),
        industries: strings(industries),
        government_exams: strings(government_exams),
        avg_salary: avg_salary.to_string(),
        demand,
        colleges: strings(colleges),
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        course(
            "bsc",
            "Bachelor of Science (BSc)",
            Stream::Science,
            "Comprehensive study of scientific principles and research methodology",
            &["Research Scientist", "Data Analyst", "Lab Technician", "Teacher", "Consultant"],
            &["Healthcare", "Technology", "Education", "Research", "Pharmaceuticals"],
            &["UPSC", "SSC", "Banking", "Teaching", "Research"],
            "₹4-8 LPA",
            Demand::High,
            &["Delhi University", "BHU", "JNU", "AMU", "IITs"],
        ),
        course(
            "ba",
            "Bachelor of Arts (BA)",
            Stream::Arts,
            "Study of humanities, social sciences, and creative disciplines",
            &["Journalist", "Writer", "Social Worker", "Teacher", "Policy Analyst"],
            &["Media", "Education", "NGOs", "Government", "Publishing"],
            &["UPSC", "SSC", "Teaching", "Banking", "State PSC"],
            "₹3-6 LPA",
            Demand::Medium,
            &["Delhi University", "JNU", "BHU", "AMU", "JMI"],
        ),
        course(
            "bcom",
            "Bachelor of Commerce (BCom)",
            Stream::Commerce,
            "Study of business, finance, and commercial practices",
            &["Accountant", "Financial Analyst", "Banker", "Business Consultant", "Entrepreneur"],
            &["Banking", "Finance", "Consulting", "E-commerce", "Manufacturing"],
            &["Banking", "SSC", "UPSC", "State PSC", "Railway"],
            "₹4-7 LPA",
            Demand::High,
            &["Delhi University", "BHU", "AMU", "JMI", "DU Colleges"],
        ),
        course(
            "bba",
            "Bachelor of Business Administration (BBA)",
            Stream::Commerce,
            "Professional degree in business management and administration",
            &["Business Analyst", "Marketing Manager", "HR Manager", "Entrepreneur", "Consultant"],
            &["Corporate", "Startups", "Consulting", "E-commerce", "Manufacturing"],
            &["Banking", "SSC", "UPSC", "State PSC", "Railway"],
            "₹5-9 LPA",
            Demand::High,
            &["Delhi University", "BHU", "AMU", "JMI", "IGNOU"],
        ),
        course(
            "bca",
            "Bachelor of Computer Applications (BCA)",
            Stream::Science,
            "Study of computer applications and software development",
            &["Software Developer", "Web Developer", "System Analyst", "IT Consultant", "Database Administrator"],
            &["IT", "Software", "E-commerce", "Banking", "Telecommunications"],
            &["SSC", "Banking", "Railway", "State PSC", "Defense"],
            "₹6-12 LPA",
            Demand::High,
            &["Delhi University", "IGNOU", "BHU", "AMU", "JMI"],
        ),
        course(
            "bsw",
            "Bachelor of Social Work (BSW)",
            Stream::Arts,
            "Study of social welfare and community development",
            &["Social Worker", "Community Organizer", "NGO Worker", "Policy Analyst", "Counselor"],
            &["NGOs", "Government", "Healthcare", "Education", "Community Development"],
            &["UPSC", "SSC", "State PSC", "Banking", "Teaching"],
            "₹3-5 LPA",
            Demand::Medium,
            &["Delhi University", "JNU", "BHU", "AMU", "TISS"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn scholarship(
    id: &str,
    name: &str,
    provider: &str,
    amount: &str,
    kind: ScholarshipType,
    category: &str,
    deadline: NaiveDate,
    eligibility: &[&str],
    requirements: &[&str],
    description: &str,
    application_link: &str,
    rating: f64,
    applications: u32,
    saved: bool,
) -> Scholarship {
    Scholarship {
        id: id.to_string(),
        name: name.to_string(),
        provider: provider.to_string(),
        amount: amount.to_string(),
        kind,
        category: category.to_string(),
        deadline,
        eligibility: strings(eligibility),
        requirements: strings(requirements),
        description: description.to_string(),
        application_link: application_link.to_string(),
        rating,
        applications,
        saved,
    }
}

pub fn scholarships() -> Vec<Scholarship> {
    vec![
        scholarship(
            "1",
            "National Merit Scholarship",
            "Ministry of Education",
            "₹50,000/year",
            ScholarshipType::Merit,
            "Undergraduate",
            date(2024, 7, 15),
            &["Class 12 with 85%+", "Family income < ₹8 LPA", "Indian citizen"],
            &["Income certificate", "Academic records", "Aadhaar card"],
            "Government scholarship for meritorious students from economically disadvantaged backgrounds.",
            "https://scholarships.gov.in",
            4.8,
            15420,
            false,
        ),
        scholarship(
            "2",
            "SC/ST Post-Matric Scholarship",
            "Ministry of Social Justice",
            "₹30,000/year",
            ScholarshipType::Caste,
            "All Levels",
            date(2024, 8, 20),
            &["SC/ST category", "Class 12 completed", "Admitted to college"],
            &["Caste certificate", "Income certificate", "Admission letter"],
            "Scholarship for Scheduled Castes and Scheduled Tribes students.",
            "https://socialjustice.gov.in",
            4.6,
            8920,
            true,
        ),
        scholarship(
            "3",
            "Delhi University Merit Scholarship",
            "Delhi University",
            "₹25,000/year",
            ScholarshipType::Merit,
            "Undergraduate",
            date(2024, 6, 30),
            &["DU student", "CGPA 8.0+", "First generation learner"],
            &["DU ID card", "Academic transcripts", "Family background certificate"],
            "Merit-based scholarship for outstanding DU students.",
            "https://du.ac.in/scholarships",
            4.7,
            3240,
            false,
        ),
        scholarship(
            "4",
            "Sports Excellence Scholarship",
            "Sports Authority of India",
            "₹40,000/year",
            ScholarshipType::Sports,
            "All Levels",
            date(2024, 7, 10),
            &["National level sports achievement", "Class 12 completed", "Active in sports"],
            &["Sports certificates", "Medical certificate", "Recommendation letter"],
            "Scholarship for students with outstanding sports achievements.",
            "https://sportsauthorityofindia.gov.in",
            4.5,
            1560,
            false,
        ),
        scholarship(
            "5",
            "Girl Child Scholarship",
            "Ministry of Women & Child Development",
            "₹35,000/year",
            ScholarshipType::Need,
            "Undergraduate",
            date(2024, 8, 5),
            &["Female student", "Class 12 with 75%+", "Family income < ₹6 LPA"],
            &["Gender certificate", "Income certificate", "Academic records"],
            "Empowering girl students through education support.",
            "https://wcd.gov.in/scholarships",
            4.9,
            6780,
            false,
        ),
        scholarship(
            "6",
            "BHU Merit Scholarship",
            "Banaras Hindu University",
            "₹20,000/year",
            ScholarshipType::Merit,
            "Undergraduate",
            date(2024, 7, 25),
            &["BHU student", "CGPA 7.5+", "Merit list rank"],
            &["BHU ID card", "Academic transcripts", "Merit certificate"],
            "Merit-based scholarship for BHU undergraduate students.",
            "https://bhu.ac.in/scholarships",
            4.4,
            2150,
            false,
        ),
    ]
}

pub fn timeline_events() -> Vec<TimelineEvent> {
    let event = |id: &str,
                 title: &str,
                 kind: EventType,
                 on: NaiveDate,
                 time: &str,
                 priority: Priority,
                 status: EventStatus,
                 description: &str| TimelineEvent {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        date: on,
        time: Some(time.to_string()),
        priority,
        status,
        description: description.to_string(),
        college: None,
        amount: None,
        requirements: Vec::new(),
        notifications: true,
    };

    vec![
        TimelineEvent {
            college: Some("Delhi University".to_string()),
            ..event(
                "1",
                "DU Admission Deadline",
                EventType::Admission,
                date(2024, 6, 15),
                "11:59 PM",
                Priority::High,
                EventStatus::Upcoming,
                "Last date to submit online application for Delhi University undergraduate programs",
            )
        },
        TimelineEvent {
            amount: Some("₹50,000/year".to_string()),
            requirements: strings(&["Income certificate", "Caste certificate", "Academic records"]),
            ..event(
                "2",
                "Merit Scholarship Application",
                EventType::Scholarship,
                date(2024, 6, 20),
                "5:00 PM",
                Priority::High,
                EventStatus::Upcoming,
                "Apply for government merit scholarship for economically disadvantaged students",
            )
        },
        TimelineEvent {
            college: Some("Jawaharlal Nehru University".to_string()),
            ..event(
                "3",
                "JNU Entrance Test",
                EventType::Exam,
                date(2024, 6, 25),
                "10:00 AM",
                Priority::High,
                EventStatus::Upcoming,
                "Entrance examination for JNU undergraduate programs",
            )
        },
        TimelineEvent {
            college: Some("Banaras Hindu University".to_string()),
            notifications: false,
            ..event(
                "4",
                "BHU Counseling Session",
                EventType::Counseling,
                date(2024, 7, 5),
                "2:00 PM",
                Priority::Medium,
                EventStatus::Upcoming,
                "Online counseling session for BHU admission process",
            )
        },
        event(
            "5",
            "Document Verification Deadline",
            EventType::Deadline,
            date(2024, 7, 10),
            "4:00 PM",
            Priority::Medium,
            EventStatus::Upcoming,
            "Submit all required documents for admission verification",
        ),
        TimelineEvent {
            college: Some("Aligarh Muslim University".to_string()),
            notifications: false,
            ..event(
                "6",
                "AMU Application Start",
                EventType::Admission,
                date(2024, 5, 20),
                "9:00 AM",
                Priority::Low,
                EventStatus::Completed,
                "Application portal opened for AMU undergraduate programs",
            )
        },
    ]
}
