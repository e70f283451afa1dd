use super::category::Category;
use super::question::Question;

/// Check a question set before running a session over it.
/// Returns all problems at once (not just the first).
pub fn validate_questions<C: Category>(
    questions: &[Question<C>],
    max_weight: u32,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if questions.is_empty() {
        errors.push("questions: at least one question is required".to_string());
    }

    let option_count = questions.first().map(|q| q.options.len()).unwrap_or(0);

    for (i, question) in questions.iter().enumerate() {
        if question.options.is_empty() {
            errors.push(format!("questions[{}].options: must not be empty", i));
        } else if question.options.len() != option_count {
            errors.push(format!(
                "questions[{}].options: expected {} options, found {}",
                i,
                option_count,
                question.options.len()
            ));
        }

        for (category, weight) in question.weights.iter() {
            if weight > max_weight {
                errors.push(format!(
                    "questions[{}].weights.{}: {} exceeds max weight {}",
                    i,
                    category.key(),
                    weight,
                    max_weight
                ));
            }
        }

        if let Some(ref per_option) = question.option_weights {
            if per_option.len() != question.options.len() {
                errors.push(format!(
                    "questions[{}].option_weights: expected {} vectors, found {}",
                    i,
                    question.options.len(),
                    per_option.len()
                ));
            }
            for (j, weights) in per_option.iter().enumerate() {
                for (category, weight) in weights.iter() {
                    if weight > max_weight {
                        errors.push(format!(
                            "questions[{}].option_weights[{}].{}: {} exceeds max weight {}",
                            i,
                            j,
                            category.key(),
                            weight,
                            max_weight
                        ));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{basic_questions, premium_questions, Aptitude, Stream};

    #[test]
    fn test_builtin_sets_are_valid() {
        assert!(validate_questions(&basic_questions(), 3).is_ok());
        assert!(validate_questions(&premium_questions(), 4).is_ok());
    }

    #[test]
    fn test_empty_set() {
        let errors = validate_questions::<Stream>(&[], 3).unwrap_err();
        assert!(errors[0].contains("at least one question"));
    }

    #[test]
    fn test_inconsistent_option_count() {
        let questions: Vec<Question<Stream>> = vec![
            Question::new(1, "T", "?", &["a", "b"], &[1, 1, 1, 1]),
            Question::new(2, "T", "?", &["a", "b", "c"], &[1, 1, 1, 1]),
        ];
        let errors = validate_questions(&questions, 3).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("questions[1].options"));
    }

    #[test]
    fn test_weight_over_max() {
        let questions: Vec<Question<Aptitude>> = vec![Question::new(
            1,
            "T",
            "?",
            &["a"],
            &[5, 0, 0, 0, 0, 0, 0, 0],
        )];
        let errors = validate_questions(&questions, 4).unwrap_err();
        assert!(errors[0].contains("weights.cognitive"));
    }

    #[test]
    fn test_option_weights_length_mismatch() {
        let questions: Vec<Question<Stream>> =
            vec![Question::new(1, "T", "?", &["a", "b"], &[0, 0, 0, 0])
                .with_option_weights(&[&[1, 0, 0, 0]])];
        let errors = validate_questions(&questions, 3).unwrap_err();
        assert!(errors[0].contains("option_weights"));
    }

    #[test]
    fn test_collects_all_errors() {
        let questions: Vec<Question<Stream>> = vec![
            Question::new(1, "T", "?", &["a", "b"], &[9, 0, 0, 0]),
            Question::new(2, "T", "?", &["a"], &[0, 9, 0, 0]),
        ];
        let errors = validate_questions(&questions, 3).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
