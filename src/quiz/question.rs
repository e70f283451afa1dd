use super::category::{Category, ScoreMap};

/// A single multiple-choice question.
///
/// `weights` is added to the totals whichever option is picked. When
/// `option_weights` is set, the picked option's vector is used instead.
#[derive(Debug, Clone)]
pub struct Question<C: Category> {
    pub id: u32,
    /// Display grouping, e.g. "Problem Solving"
    pub category: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub weights: ScoreMap<C>,
    pub option_weights: Option<Vec<ScoreMap<C>>>,
}

impl<C: Category> Question<C> {
    pub fn new(id: u32, category: &str, prompt: &str, options: &[&str], weights: &[u32]) -> Self {
        Self {
            id,
            category: category.to_string(),
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            weights: ScoreMap::from_values(weights),
            option_weights: None,
        }
    }

    /// Attach one weight vector per option
    pub fn with_option_weights(mut self, per_option: &[&[u32]]) -> Self {
        self.option_weights = Some(per_option.iter().map(|w| ScoreMap::from_values(w)).collect());
        self
    }

    /// Weight vector contributed when `answer` is selected
    pub fn weights_for(&self, answer: usize) -> &ScoreMap<C> {
        self.option_weights
            .as_ref()
            .and_then(|per_option| per_option.get(answer))
            .unwrap_or(&self.weights)
    }

    /// Largest contribution this question can make to `category`
    pub fn max_weight(&self, category: C) -> u32 {
        match &self.option_weights {
            Some(per_option) => per_option.iter().map(|w| w.get(category)).max().unwrap_or(0),
            None => self.weights.get(category),
        }
    }
}

/// Highest total any single category can reach over the question set
pub fn max_attainable<C: Category>(questions: &[Question<C>]) -> u32 {
    C::ALL
        .iter()
        .map(|c| questions.iter().map(|q| q.max_weight(*c)).sum::<u32>())
        .max()
        .unwrap_or(0)
}
