use super::category::{Aptitude, Category, ScoreMap};
use super::question::Question;
use serde::{Deserialize, Serialize};

/// Highest weight any premium question gives a single trait
pub const MAX_WEIGHT: u32 = 4;

/// How the overall score is derived from the trait totals.
///
/// `Literal` divides the total by itself and therefore always reports 100 for
/// a non-empty result. It is kept as the default so existing reports do not
/// change. `Normalized` divides by the maximum attainable total
/// (traits x questions x `MAX_WEIGHT`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallScoreMode {
    #[default]
    Literal,
    Normalized,
}

/// The eight-question premium assessment
pub fn premium_questions() -> Vec<Question<Aptitude>> {
    vec![
        Question::new(
            1,
            "Cognitive Abilities",
            "When faced with a complex problem, what is your preferred approach?",
            &[
                "Break it down into smaller, manageable parts and analyze each systematically",
                "Look for patterns and connections that others might miss",
                "Seek input from others and collaborate to find solutions",
                "Use trial and error to explore different possibilities",
                "Apply established methodologies and frameworks",
            ],
            &[4, 1, 2, 2, 1, 2, 4, 3],
        ),
        Question::new(
            2,
            "Personality Traits",
            "How do you prefer to structure your workday?",
            &[
                "Deep focus sessions with minimal interruptions",
                "Flexible schedule adapting to energy levels",
                "Structured blocks with regular breaks",
                "Collaborative sessions mixed with independent work",
                "Deadline-driven with bursts of intense productivity",
            ],
            &[1, 4, 1, 2, 2, 2, 1, 3],
        ),
        Question::new(
            3,
            "Technical Skills",
            "When learning a new technical skill, you prefer to:",
            &[
                "Start with theoretical foundations and build up",
                "Jump into hands-on practice immediately",
                "Follow structured tutorials and documentation",
                "Experiment and learn through trial and error",
                "Learn from others through mentorship or collaboration",
            ],
            &[2, 1, 4, 1, 2, 2, 3, 3],
        ),
        Question::new(
            4,
            "Leadership",
            "In a team project, you naturally tend to:",
            &[
                "Take initiative and guide the overall direction",
                "Support team members and ensure everyone contributes",
                "Focus on delivering high-quality work in your area",
                "Facilitate communication and resolve conflicts",
                "Bring innovative ideas and creative solutions",
            ],
            &[1, 2, 1, 4, 3, 2, 1, 2],
        ),
        Question::new(
            5,
            "Communication",
            "When presenting ideas to others, you prefer to:",
            &[
                "Use data and evidence to support your points",
                "Tell stories and use analogies to illustrate concepts",
                "Create visual aids and interactive presentations",
                "Engage in dialogue and encourage questions",
                "Focus on practical applications and real-world examples",
            ],
            &[2, 2, 1, 2, 4, 3, 3, 2],
        ),
        Question::new(
            6,
            "Creativity",
            "Your approach to generating new ideas is:",
            &[
                "Systematic brainstorming with structured techniques",
                "Free-flowing exploration without constraints",
                "Combining existing concepts in novel ways",
                "Observing problems and finding unique solutions",
                "Collaborating with diverse perspectives",
            ],
            &[2, 2, 2, 1, 2, 4, 1, 2],
        ),
        Question::new(
            7,
            "Analytical Thinking",
            "When analyzing information, you tend to:",
            &[
                "Focus on quantitative data and statistical patterns",
                "Look for qualitative insights and underlying themes",
                "Compare multiple sources and perspectives",
                "Identify cause-and-effect relationships",
                "Synthesize information into actionable insights",
            ],
            &[3, 1, 2, 1, 1, 1, 4, 3],
        ),
        Question::new(
            8,
            "Practical Skills",
            "When implementing a solution, you prioritize:",
            &[
                "Efficiency and optimization of processes",
                "User experience and practical usability",
                "Scalability and long-term sustainability",
                "Cost-effectiveness and resource management",
                "Quality and attention to detail",
            ],
            &[1, 1, 3, 2, 1, 1, 2, 4],
        ),
    ]
}

/// A career suggestion scored from three trait totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub career: String,
    #[serde(rename = "match")]
    pub match_percent: u32,
    pub reasoning: String,
}

/// Derived output of the premium assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedResult {
    pub overall_score: u32,
    pub category_scores: ScoreMap<Aptitude>,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
    pub career_matches: Vec<CareerMatch>,
}

struct CareerFormula {
    career: &'static str,
    traits: [Aptitude; 3],
    reasoning: &'static str,
}

const CAREER_FORMULAS: &[CareerFormula] = &[
    CareerFormula {
        career: "Data Scientist",
        traits: [Aptitude::Analytical, Aptitude::Technical, Aptitude::Cognitive],
        reasoning: "Strong analytical and technical skills make you well-suited for data-driven roles",
    },
    CareerFormula {
        career: "Product Manager",
        traits: [Aptitude::Leadership, Aptitude::Communication, Aptitude::Practical],
        reasoning: "Leadership and communication abilities align well with product management",
    },
    CareerFormula {
        career: "UX Designer",
        traits: [Aptitude::Creativity, Aptitude::Communication, Aptitude::Practical],
        reasoning: "Creative thinking and practical skills are essential for user experience design",
    },
];

const RECOMMENDATIONS: &[&str] = &[
    "Consider roles that leverage your top strengths",
    "Focus on developing complementary skills",
    "Seek opportunities for continuous learning",
    "Build a professional network in your target industry",
];

impl Aptitude {
    /// Sentence shown when this trait is among the top three
    pub fn strength(self) -> &'static str {
        match self {
            Aptitude::Cognitive => "Strong analytical thinking and problem-solving abilities",
            Aptitude::Personality => "Excellent interpersonal skills and adaptability",
            Aptitude::Technical => "Advanced technical expertise and learning agility",
            Aptitude::Leadership => "Natural leadership qualities and team management skills",
            Aptitude::Communication => "Exceptional communication and presentation abilities",
            Aptitude::Creativity => "High creativity and innovative thinking",
            Aptitude::Analytical => "Superior data analysis and critical thinking skills",
            Aptitude::Practical => "Strong implementation and execution capabilities",
        }
    }
}

/// Shape the final premium result from completed trait totals
pub fn evaluate(
    scores: &ScoreMap<Aptitude>,
    question_count: usize,
    mode: OverallScoreMode,
) -> ExtendedResult {
    ExtendedResult {
        overall_score: overall_score(scores, question_count, mode),
        category_scores: scores.clone(),
        strengths: strengths(scores),
        recommendations: recommendations(),
        career_matches: career_matches(scores),
    }
}

pub fn overall_score(
    scores: &ScoreMap<Aptitude>,
    question_count: usize,
    mode: OverallScoreMode,
) -> u32 {
    let total = scores.total();
    let denominator = match mode {
        OverallScoreMode::Literal => total,
        OverallScoreMode::Normalized => {
            Aptitude::ALL.len() as u32 * question_count as u32 * MAX_WEIGHT
        }
    };
    if denominator == 0 {
        return 0;
    }
    (total as f64 / denominator as f64 * 100.0).round() as u32
}

/// Sentences for the three highest-scoring traits
pub fn strengths(scores: &ScoreMap<Aptitude>) -> Vec<String> {
    scores
        .ranked()
        .into_iter()
        .take(3)
        .map(|(aptitude, _)| aptitude.strength().to_string())
        .collect()
}

/// Static advice; not personalised
pub fn recommendations() -> Vec<String> {
    RECOMMENDATIONS.iter().map(|r| r.to_string()).collect()
}

pub fn career_matches(scores: &ScoreMap<Aptitude>) -> Vec<CareerMatch> {
    CAREER_FORMULAS
        .iter()
        .map(|formula| {
            let sum: u32 = formula.traits.iter().map(|t| scores.get(*t)).sum();
            CareerMatch {
                career: formula.career.to_string(),
                match_percent: (sum as f64 / 3.0).round() as u32,
                reasoning: formula.reasoning.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{max_attainable, score_answers};

    fn builtin_scores() -> ScoreMap<Aptitude> {
        score_answers(&premium_questions(), &[0, 1, 2, 3, 4, 0, 1, 2]).unwrap()
    }

    #[test]
    fn test_weights_within_max() {
        assert!(max_attainable(&premium_questions()) <= 8 * MAX_WEIGHT);
        for q in premium_questions() {
            assert_eq!(q.options.len(), 5);
            for (_, w) in q.weights.iter() {
                assert!(w <= MAX_WEIGHT);
            }
        }
    }

    #[test]
    fn test_category_totals_match_hand_sums() {
        let scores = builtin_scores();
        // Column sums of the question table
        assert_eq!(
            scores,
            ScoreMap::from_values(&[16, 14, 16, 15, 16, 17, 19, 22])
        );
        assert_eq!(scores.total(), 135);
    }

    #[test]
    fn test_literal_overall_score_is_always_100() {
        // Known defect kept for compatibility: the total is divided by itself
        let scores = builtin_scores();
        assert_eq!(overall_score(&scores, 8, OverallScoreMode::Literal), 100);

        let tiny = ScoreMap::from_values(&[1]);
        assert_eq!(overall_score(&tiny, 8, OverallScoreMode::Literal), 100);
    }

    #[test]
    fn test_normalized_overall_score() {
        let scores = builtin_scores();
        // round(135 / (8 * 8 * 4) * 100) = round(52.73)
        assert_eq!(overall_score(&scores, 8, OverallScoreMode::Normalized), 53);
    }

    #[test]
    fn test_overall_score_empty_totals() {
        let zero = ScoreMap::zeroed();
        assert_eq!(overall_score(&zero, 8, OverallScoreMode::Literal), 0);
        assert_eq!(overall_score(&zero, 8, OverallScoreMode::Normalized), 0);
    }

    #[test]
    fn test_strengths_top_three() {
        let strengths = strengths(&builtin_scores());
        assert_eq!(
            strengths,
            vec![
                Aptitude::Practical.strength(),
                Aptitude::Analytical.strength(),
                Aptitude::Creativity.strength(),
            ]
        );
    }

    #[test]
    fn test_strengths_ties_keep_category_order() {
        let scores = ScoreMap::from_values(&[5, 5, 5, 5, 5, 5, 5, 5]);
        assert_eq!(
            strengths(&scores),
            vec![
                Aptitude::Cognitive.strength(),
                Aptitude::Personality.strength(),
                Aptitude::Technical.strength(),
            ]
        );
    }

    #[test]
    fn test_career_matches() {
        let matches = career_matches(&builtin_scores());
        let summary: Vec<_> = matches
            .iter()
            .map(|m| (m.career.as_str(), m.match_percent))
            .collect();
        // (19+16+16)/3 = 17, (15+16+22)/3 = 17.67, (17+16+22)/3 = 18.33
        assert_eq!(
            summary,
            vec![
                ("Data Scientist", 17),
                ("Product Manager", 18),
                ("UX Designer", 18),
            ]
        );
    }

    #[test]
    fn test_recommendations_ignore_scores() {
        let a = evaluate(&builtin_scores(), 8, OverallScoreMode::Literal);
        let b = evaluate(&ScoreMap::zeroed(), 8, OverallScoreMode::Literal);
        assert_eq!(a.recommendations, b.recommendations);
        assert_eq!(a.recommendations.len(), 4);
    }

    #[test]
    fn test_career_match_serializes_match_key() {
        let m = CareerMatch {
            career: "UX Designer".to_string(),
            match_percent: 18,
            reasoning: "r".to_string(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["match"], 18);
    }
}
