use std::io::IsTerminal;
use std::time::Duration;

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::directory::{College, Course, DaysUntil, Scholarship, TimelineEvent};
use crate::payment::{Plan, Receipt};
use crate::quiz::{ExtendedResult, StreamRecommendation};
use crate::store::{AnalyticsSnapshot, Trend};

const BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Fit a description line under an indent of `indent` columns
fn fit_line(text: &str, indent: usize) -> String {
    match get_terminal_width() {
        Some(width) if width > indent + 20 => truncate(text, width - indent),
        Some(_) => truncate(text, 20),
        None => text.to_string(),
    }
}

/// Horizontal bar for a percentage, clamped to 0..=100
fn format_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Elapsed quiz time as m:ss
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Format the basic quiz outcome with per-stream scores
pub fn format_stream_result(rec: &StreamRecommendation, use_colors: bool) -> String {
    let profile = rec.profile();
    let mut lines = Vec::new();

    if use_colors {
        lines.push(format!(
            "{} ({}% match)",
            profile.title.bold().green(),
            rec.confidence
        ));
    } else {
        lines.push(format!("{} ({}% match)", profile.title, rec.confidence));
    }
    lines.push(fit_line(profile.description, 0));
    lines.push(String::new());

    for (stream, score) in rec.scores.iter() {
        let label = format!("{:<11}", stream.to_string());
        if use_colors && stream == rec.stream {
            lines.push(format!("  {} {:>3}", label.bold(), score));
        } else {
            lines.push(format!("  {} {:>3}", label, score));
        }
    }

    lines.push(String::new());
    lines.push(format!("Careers: {}", profile.careers.join(", ")));
    lines.push(format!("Colleges: {}", profile.colleges.join(", ")));
    lines.join("\n")
}

/// Format the premium assessment report
pub fn format_extended_result(result: &ExtendedResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let header = format!("Overall score: {}%", result.overall_score);
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }
    lines.push(String::new());

    lines.push("Category scores:".to_string());
    for (aptitude, score) in result.category_scores.iter() {
        lines.push(format!("  {:<14}{:>3}", aptitude.to_string(), score));
    }
    lines.push(String::new());

    lines.push("Strengths:".to_string());
    for strength in &result.strengths {
        lines.push(format!("  - {}", fit_line(strength, 4)));
    }
    lines.push(String::new());

    lines.push("Career matches:".to_string());
    for m in &result.career_matches {
        let career = format!("{:<18}", m.career);
        if use_colors {
            lines.push(format!("  {} {:>3}%  {}", career.cyan(), m.match_percent, m.reasoning.dimmed()));
        } else {
            lines.push(format!("  {} {:>3}%  {}", career, m.match_percent, m.reasoning));
        }
    }
    lines.push(String::new());

    lines.push("Recommendations:".to_string());
    for rec in &result.recommendations {
        lines.push(format!("  - {}", fit_line(rec, 4)));
    }

    lines.join("\n")
}

/// Format the premium analytics snapshot
pub fn format_analytics(analytics: &AnalyticsSnapshot, use_colors: bool) -> String {
    let mut lines = Vec::new();

    lines.push("Progress:".to_string());
    for point in &analytics.progress_history {
        lines.push(format!(
            "  {}  {:>3}  {}",
            point.date.format("%Y-%m-%d"),
            point.score,
            format_bar(point.score)
        ));
    }
    lines.push(String::new());

    lines.push("Skills vs market:".to_string());
    for skill in &analytics.skill_trends {
        let arrow = match skill.trend {
            Trend::Up => "up",
            Trend::Stable => "stable",
            Trend::Down => "down",
        };
        let gap = skill.current as i64 - skill.market as i64;
        let gap_str = format!("{:+}", gap);
        let gap_str = if !use_colors {
            gap_str
        } else if gap < 0 {
            gap_str.red().to_string()
        } else {
            gap_str.green().to_string()
        };
        lines.push(format!(
            "  {:<20}{:>3} / {:>3}  {}  {}",
            skill.skill, skill.current, skill.market, gap_str, arrow
        ));
    }
    lines.push(String::new());

    lines.push("Industry outlook:".to_string());
    for insight in &analytics.industry_insights {
        lines.push(format!(
            "  {:<12} demand {:>3}  growth {:.1}%",
            insight.industry, insight.demand, insight.growth
        ));
    }
    lines.push(String::new());

    lines.push(format!(
        "Last updated: {}",
        analytics.last_updated.format("%Y-%m-%d %H:%M UTC")
    ));
    lines.join("\n")
}

/// Format colleges one per line with a detail line beneath
pub fn format_college_list(colleges: &[&College], use_colors: bool) -> String {
    if colleges.is_empty() {
        return "No colleges found.".to_string();
    }

    colleges
        .iter()
        .map(|c| {
            let head = if use_colors {
                format!(
                    "{} | {} | {:.1} | {} km",
                    c.name.bold(),
                    c.location.cyan(),
                    c.rating.yellow(),
                    c.distance_km
                )
            } else {
                format!(
                    "{} | {} | {:.1} | {} km",
                    c.name, c.location, c.rating, c.distance_km
                )
            };
            let detail = format!("{} | {} | {}", c.kind, c.fees, c.courses.join(", "));
            format!("{}\n  {}", head, fit_line(&detail, 2))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_course_list(courses: &[&Course], use_colors: bool) -> String {
    if courses.is_empty() {
        return "No courses found.".to_string();
    }

    courses
        .iter()
        .map(|c| {
            let head = if use_colors {
                format!(
                    "{} | {} | {} | {} demand",
                    c.name.bold(),
                    c.stream.cyan(),
                    c.duration,
                    c.demand
                )
            } else {
                format!(
                    "{} | {} | {} | {} demand",
                    c.name, c.stream, c.duration, c.demand
                )
            };
            format!(
                "{}\n  {}\n  Salary: {}",
                head,
                fit_line(&c.description, 2),
                c.avg_salary
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Scholarships with time left until each deadline relative to `today`
pub fn format_scholarship_list(
    scholarships: &[&Scholarship],
    today: NaiveDate,
    use_colors: bool,
) -> String {
    if scholarships.is_empty() {
        return "No scholarships found.".to_string();
    }

    scholarships
        .iter()
        .map(|s| {
            let days = DaysUntil::between(today, s.deadline);
            let saved = if s.saved { " *" } else { "" };
            if use_colors {
                format!(
                    "{}{} | {} | {} | {} ({})",
                    s.name.bold(),
                    saved,
                    s.amount.green(),
                    s.kind,
                    s.deadline,
                    days.yellow()
                )
            } else {
                format!(
                    "{}{} | {} | {} | {} ({})",
                    s.name, saved, s.amount, s.kind, s.deadline, days
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_timeline(events: &[&TimelineEvent], today: NaiveDate, use_colors: bool) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }

    events
        .iter()
        .map(|e| {
            let days = DaysUntil::between(today, e.date);
            let when = match &e.time {
                Some(time) => format!("{} {}", e.date, time),
                None => e.date.to_string(),
            };
            let head = if use_colors {
                format!(
                    "{} | {} | {} | {} ({})",
                    e.title.bold(),
                    e.kind.cyan(),
                    e.priority,
                    when,
                    days.yellow()
                )
            } else {
                format!(
                    "{} | {} | {} | {} ({})",
                    e.title, e.kind, e.priority, when, days
                )
            };
            format!("{}\n  {}", head, fit_line(&e.description, 2))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format both subscription plans with their features
pub fn format_plans(use_colors: bool) -> String {
    Plan::ALL
        .iter()
        .map(|plan| {
            let mut head = format!("{} {} {}", plan.name(), plan.price(), plan.period());
            if let (Some(original), Some(savings)) = (plan.original_price(), plan.savings()) {
                head.push_str(&format!(" (was {}, {})", original, savings));
            }
            if plan.is_popular() {
                head.push_str(" [most popular]");
            }
            let head = if use_colors {
                head.bold().to_string()
            } else {
                head
            };
            let features = plan
                .features()
                .iter()
                .map(|f| format!("  - {}", f))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}\n{}", head, features)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn format_receipt(receipt: &Receipt, use_colors: bool) -> String {
    let head = "Payment successful";
    let head = if use_colors {
        head.green().bold().to_string()
    } else {
        head.to_string()
    };
    format!(
        "{}\n  Plan: {}\n  Amount: {} {}\n  Card: **** {}\n  Receipt sent to: {}",
        head,
        receipt.plan.name(),
        receipt.amount,
        receipt.plan.period(),
        receipt.card_last4,
        receipt.email
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::data;
    use crate::quiz::{evaluate, premium_questions, recommend_stream, tally, OverallScoreMode, ScoreMap};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0:00");
        assert_eq!(format_elapsed(Duration::from_secs(65)), "1:05");
        assert_eq!(format_elapsed(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0), ".".repeat(20));
        assert_eq!(format_bar(100), "#".repeat(20));
        assert_eq!(format_bar(250), "#".repeat(20));
        assert_eq!(format_bar(50).matches('#').count(), 10);
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("This is a very long title", 15), "This is a ve...");
        assert_eq!(truncate("Short", 15), "Short");
        assert_eq!(truncate("Hello world", 3), "Hel");
    }

    #[test]
    fn test_format_stream_result() {
        let rec = recommend_stream(&ScoreMap::from_values(&[15, 11, 11, 13]), 15);
        let result = format_stream_result(&rec, false);
        assert!(result.starts_with("Science Stream (100% match)"));
        assert!(result.contains("vocational   13"));
        assert!(result.contains("Careers: Data Scientist"));
    }

    #[test]
    fn test_format_extended_result() {
        let questions = premium_questions();
        let scores = tally(&questions, &vec![0; questions.len()]);
        let result = evaluate(&scores, questions.len(), OverallScoreMode::Literal);
        let text = format_extended_result(&result, false);
        assert!(text.starts_with("Overall score: 100%"));
        assert!(text.contains("practical      22"));
        assert!(text.contains("Data Scientist"));
        assert!(text.contains(" 17%"));
    }

    #[test]
    fn test_format_analytics() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let text = format_analytics(&AnalyticsSnapshot::initial(now), false);
        assert!(text.contains("2024-05-02"));
        assert!(text.contains("Communication"));
        assert!(text.contains("-10"));
        assert!(text.contains("growth 15.2%"));
        assert!(text.contains("Last updated: 2024-06-01 00:00 UTC"));
    }

    #[test]
    fn test_format_college_list() {
        let colleges = data::colleges();
        let refs: Vec<&College> = colleges.iter().take(2).collect();
        let text = format_college_list(&refs, false);
        assert!(text.contains(&colleges[0].name));
        assert!(text.contains(&colleges[1].location));
        assert_eq!(format_college_list(&[], false), "No colleges found.");
    }

    #[test]
    fn test_format_course_list_empty() {
        assert_eq!(format_course_list(&[], false), "No courses found.");
    }

    #[test]
    fn test_format_scholarship_deadline() {
        let scholarships = data::scholarships();
        let first = &scholarships[0];
        let today = first.deadline - chrono::Duration::days(1);
        let text = format_scholarship_list(&[first], today, false);
        assert!(text.contains("(Tomorrow)"));
        assert!(text.contains(&first.amount));
    }

    #[test]
    fn test_format_timeline_past() {
        let events = data::timeline_events();
        let event = &events[0];
        let today = event.date + chrono::Duration::days(3);
        let text = format_timeline(&[event], today, false);
        assert!(text.contains("(Past)"));
        assert_eq!(format_timeline(&[], today, false), "No events found.");
    }

    #[test]
    fn test_format_plans() {
        let text = format_plans(false);
        assert!(text.contains("Premium Monthly $9.99 per month"));
        assert!(text.contains("Premium Annual $79.99 per year (was $119.88, Save 33%) [most popular]"));
        assert!(text.contains("  - Email Support"));
    }

    #[test]
    fn test_format_receipt() {
        let receipt = Receipt {
            plan: Plan::Monthly,
            amount: "$9.99",
            card_last4: "4242".to_string(),
            email: "a@b.co".to_string(),
        };
        let text = format_receipt(&receipt, false);
        assert!(text.contains("Card: **** 4242"));
        assert!(text.contains("Amount: $9.99 per month"));
    }
}
