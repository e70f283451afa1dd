use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A fixed, ordered set of categories a quiz accumulates scores into.
///
/// `ALL` defines iteration order, which is also the tie-break order: when two
/// categories score the same, the one listed first wins.
pub trait Category: Copy + Ord + fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// Stable lowercase key used in config and persisted state
    fn key(self) -> &'static str;
}

/// Academic stream recommended by the basic quiz
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    Science,
    Arts,
    Commerce,
    Vocational,
}

impl Category for Stream {
    const ALL: &'static [Self] = &[
        Stream::Science,
        Stream::Arts,
        Stream::Commerce,
        Stream::Vocational,
    ];

    fn key(self) -> &'static str {
        match self {
            Stream::Science => "science",
            Stream::Arts => "arts",
            Stream::Commerce => "commerce",
            Stream::Vocational => "vocational",
        }
    }
}

/// Trait measured by the premium assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aptitude {
    Cognitive,
    Personality,
    Technical,
    Leadership,
    Communication,
    Creativity,
    Analytical,
    Practical,
}

impl Category for Aptitude {
    const ALL: &'static [Self] = &[
        Aptitude::Cognitive,
        Aptitude::Personality,
        Aptitude::Technical,
        Aptitude::Leadership,
        Aptitude::Communication,
        Aptitude::Creativity,
        Aptitude::Analytical,
        Aptitude::Practical,
    ];

    fn key(self) -> &'static str {
        match self {
            Aptitude::Cognitive => "cognitive",
            Aptitude::Personality => "personality",
            Aptitude::Technical => "technical",
            Aptitude::Leadership => "leadership",
            Aptitude::Communication => "communication",
            Aptitude::Creativity => "creativity",
            Aptitude::Analytical => "analytical",
            Aptitude::Practical => "practical",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for Aptitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Integer score per category.
///
/// Used both for a question's weight vector and for accumulated totals.
/// Categories missing from the underlying map read as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMap<C: Ord> {
    scores: BTreeMap<C, u32>,
}

impl<C: Category> Default for ScoreMap<C> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<C: Category> ScoreMap<C> {
    /// Every category present with a score of zero
    pub fn zeroed() -> Self {
        Self {
            scores: C::ALL.iter().map(|c| (*c, 0)).collect(),
        }
    }

    /// Build from values listed in `C::ALL` order. Missing trailing values are zero.
    pub fn from_values(values: &[u32]) -> Self {
        let mut map = Self::zeroed();
        for (category, value) in C::ALL.iter().zip(values) {
            map.scores.insert(*category, *value);
        }
        map
    }

    pub fn get(&self, category: C) -> u32 {
        self.scores.get(&category).copied().unwrap_or(0)
    }

    /// Add every entry of `weights` into this map
    pub fn accumulate(&mut self, weights: &ScoreMap<C>) {
        for category in C::ALL {
            *self.scores.entry(*category).or_insert(0) += weights.get(*category);
        }
    }

    pub fn total(&self) -> u32 {
        C::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Entries in fixed category order
    pub fn iter(&self) -> impl Iterator<Item = (C, u32)> + '_ {
        C::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Category with the strictly highest score; the earliest category wins ties.
    pub fn top(&self) -> (C, u32) {
        let mut best = (C::ALL[0], self.get(C::ALL[0]));
        for (category, score) in self.iter().skip(1) {
            if score > best.1 {
                best = (category, score);
            }
        }
        best
    }

    /// All entries sorted by score descending. Stable, so ties keep category order.
    pub fn ranked(&self) -> Vec<(C, u32)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}
