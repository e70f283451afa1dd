use super::category::{ScoreMap, Stream};
use super::question::Question;
use serde::{Deserialize, Serialize};

/// Denominator for the confidence percentage.
///
/// 5 questions times a max weight of 3. This is a fixed constant, not derived
/// from the question table, so it must be updated alongside the table (see
/// `question::max_attainable`).
pub const CONFIDENCE_MAX: u32 = 15;

/// The five-question stream quiz
pub fn basic_questions() -> Vec<Question<Stream>> {
    vec![
        Question::new(
            1,
            "Academic Interest",
            "Which subject do you enjoy studying the most?",
            &[
                "Mathematics and Science",
                "Literature and Languages",
                "Business and Economics",
                "Technology and Computers",
            ],
            &[3, 1, 2, 2],
        ),
        Question::new(
            2,
            "Problem Solving",
            "How do you prefer to solve problems?",
            &[
                "Using logical reasoning and analysis",
                "Creative thinking and imagination",
                "Practical solutions and planning",
                "Technical and systematic approach",
            ],
            &[3, 2, 2, 3],
        ),
        Question::new(
            3,
            "Work Environment",
            "What type of work environment appeals to you?",
            &[
                "Research labs and academic settings",
                "Creative studios and artistic spaces",
                "Corporate offices and business centers",
                "Technical workshops and industrial settings",
            ],
            &[3, 3, 2, 2],
        ),
        Question::new(
            4,
            "Future Goals",
            "What is your primary career goal?",
            &[
                "Research and innovation",
                "Creative expression and communication",
                "Business leadership and management",
                "Technical expertise and craftsmanship",
            ],
            &[3, 3, 3, 3],
        ),
        Question::new(
            5,
            "Learning Style",
            "How do you learn best?",
            &[
                "Through experiments and hands-on practice",
                "Through discussion and creative projects",
                "Through case studies and real-world examples",
                "Through technical training and skill development",
            ],
            &[3, 2, 2, 3],
        ),
    ]
}

/// Display details for a recommended stream
#[derive(Debug, Clone, Copy)]
pub struct StreamProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub careers: &'static [&'static str],
    pub colleges: &'static [&'static str],
}

impl Stream {
    pub fn profile(self) -> StreamProfile {
        match self {
            Stream::Science => StreamProfile {
                title: "Science Stream",
                description: "You have a strong analytical mind and enjoy problem-solving. Science stream will help you develop critical thinking and research skills.",
                careers: &["Data Scientist", "Research Scientist", "Engineer", "Doctor", "Professor"],
                colleges: &["Delhi University", "IITs", "NITs", "BHU", "JNU"],
            },
            Stream::Arts => StreamProfile {
                title: "Arts Stream",
                description: "You have creative talents and strong communication skills. Arts stream will nurture your creativity and expression.",
                careers: &["Journalist", "Writer", "Designer", "Teacher", "Social Worker"],
                colleges: &["Delhi University", "JNU", "BHU", "AMU", "JMI"],
            },
            Stream::Commerce => StreamProfile {
                title: "Commerce Stream",
                description: "You have business acumen and organizational skills. Commerce stream will prepare you for business and finance careers.",
                careers: &["Accountant", "Business Analyst", "Banker", "Entrepreneur", "Financial Advisor"],
                colleges: &["Delhi University", "BHU", "AMU", "JMI", "DU Colleges"],
            },
            Stream::Vocational => StreamProfile {
                title: "Vocational Stream",
                description: "You prefer practical skills and hands-on learning. Vocational stream will give you specialized technical skills.",
                careers: &["Technician", "Craftsman", "Technologist", "Skilled Worker", "Technical Specialist"],
                colleges: &["ITIs", "Polytechnics", "Technical Institutes", "Skill Centers"],
            },
        }
    }
}

/// Outcome of the basic quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRecommendation {
    pub stream: Stream,
    /// round(top score / confidence max * 100); may exceed 100 if the
    /// configured max is lower than what the questions allow
    pub confidence: u32,
    pub scores: ScoreMap<Stream>,
}

impl StreamRecommendation {
    pub fn profile(&self) -> StreamProfile {
        self.stream.profile()
    }
}

/// Pick the dominant stream. Ties go to the earlier stream in
/// science, arts, commerce, vocational order.
pub fn recommend_stream(scores: &ScoreMap<Stream>, confidence_max: u32) -> StreamRecommendation {
    let (stream, top) = scores.top();
    StreamRecommendation {
        stream,
        confidence: confidence_percent(top, confidence_max),
        scores: scores.clone(),
    }
}

fn confidence_percent(top: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (top as f64 / max as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{max_attainable, score_answers, Category, Question};

    #[test]
    fn test_confidence_max_matches_question_table() {
        assert_eq!(max_attainable(&basic_questions()), CONFIDENCE_MAX);
    }

    #[test]
    fn test_all_first_option_answers() {
        let questions = basic_questions();
        let scores = score_answers(&questions, &[0, 0, 0, 0, 0]).unwrap();

        let mut expected = ScoreMap::zeroed();
        for q in &questions {
            expected.accumulate(q.weights_for(0));
        }
        assert_eq!(scores, expected);
        assert_eq!(scores, ScoreMap::from_values(&[15, 11, 11, 13]));
    }

    #[test]
    fn test_builtin_quiz_always_recommends_science() {
        // Question weights apply whatever option is picked
        let questions = basic_questions();
        for answers in [[0, 0, 0, 0, 0], [1, 1, 1, 1, 1], [3, 2, 1, 0, 3]] {
            let scores = score_answers(&questions, &answers).unwrap();
            let result = recommend_stream(&scores, CONFIDENCE_MAX);
            assert_eq!(result.stream, Stream::Science);
            assert_eq!(result.confidence, 100);
        }
    }

    #[test]
    fn test_totals_within_bounds() {
        let questions = basic_questions();
        for seq in 0..4usize.pow(5) {
            let answers: Vec<usize> = (0..5).map(|i| (seq / 4usize.pow(i)) % 4).collect();
            let scores = score_answers(&questions, &answers).unwrap();
            for stream in Stream::ALL {
                assert!(scores.get(*stream) <= CONFIDENCE_MAX, "{:?}", answers);
            }
        }
    }

    #[test]
    fn test_tie_break_prefers_fixed_order() {
        // Arts and commerce both finish on 2; arts is listed first
        let questions: Vec<Question<Stream>> = vec![
            Question::new(1, "T", "?", &["arts", "commerce"], &[0, 0, 0, 0])
                .with_option_weights(&[&[0, 2, 0, 0], &[0, 0, 2, 0]]),
            Question::new(2, "T", "?", &["arts", "commerce"], &[0, 0, 0, 0])
                .with_option_weights(&[&[0, 2, 0, 0], &[0, 0, 2, 0]]),
            Question::new(3, "T", "?", &["a", "b"], &[1, 0, 0, 1]),
        ];

        let forward = score_answers(&questions, &[0, 1, 0]).unwrap();
        let backward = score_answers(&questions, &[1, 0, 1]).unwrap();
        assert_eq!(forward.get(Stream::Arts), forward.get(Stream::Commerce));

        assert_eq!(recommend_stream(&forward, 6).stream, Stream::Arts);
        assert_eq!(recommend_stream(&backward, 6).stream, Stream::Arts);
    }

    #[test]
    fn test_confidence_rounds() {
        let scores = ScoreMap::from_values(&[0, 11, 3, 2]);
        let result = recommend_stream(&scores, CONFIDENCE_MAX);
        assert_eq!(result.stream, Stream::Arts);
        // 11 / 15 = 73.33
        assert_eq!(result.confidence, 73);
    }

    #[test]
    fn test_zero_confidence_max() {
        let scores = ScoreMap::from_values(&[1, 0, 0, 0]);
        assert_eq!(recommend_stream(&scores, 0).confidence, 0);
    }

    #[test]
    fn test_profiles_have_details() {
        for stream in Stream::ALL {
            let profile = stream.profile();
            assert!(profile.title.ends_with("Stream"));
            assert!(!profile.careers.is_empty());
            assert!(!profile.colleges.is_empty());
        }
    }
}
