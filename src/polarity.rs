//! Polarity scoring for review text.
//!
//! The pipeline only depends on the [`PolarityScorer`] trait. [`LexiconScorer`]
//! is the built-in implementation: a word list with per-word polarity values,
//! negation and intensifier handling, averaged over the matched words.
//! No external ML dependencies.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Anything that can turn text into a polarity in [-1.0, 1.0].
///
/// Implementations must be deterministic and must accept the empty string.
pub trait PolarityScorer {
    fn score(&self, text: &str) -> f64;
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for &S {
    fn score(&self, text: &str) -> f64 {
        (**self).score(text)
    }
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for Box<S> {
    fn score(&self, text: &str) -> f64 {
        (**self).score(text)
    }
}

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").unwrap());

// Review vocabulary with polarity values
static DEFAULT_LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    vec![
        // positive
        ("good", 0.7), ("great", 0.8), ("excellent", 1.0), ("amazing", 0.6),
        ("wonderful", 1.0), ("fantastic", 0.4), ("superb", 1.0), ("outstanding", 0.5),
        ("brilliant", 0.9), ("love", 0.5), ("loved", 0.7), ("loving", 0.6),
        ("best", 1.0), ("better", 0.5), ("nice", 0.6), ("happy", 0.8),
        ("beautiful", 0.85), ("perfect", 1.0), ("awesome", 1.0), ("incredible", 0.9),
        ("delightful", 1.0), ("pleasant", 0.73), ("satisfied", 0.5), ("satisfying", 0.5),
        ("recommend", 0.4), ("recommended", 0.4), ("impressive", 1.0), ("exceptional", 0.67),
        ("remarkable", 0.75), ("helpful", 0.5), ("reliable", 0.6), ("quality", 0.3),
        ("valuable", 0.5), ("durable", 0.5), ("comfortable", 0.4), ("sturdy", 0.4),
        ("fast", 0.2), ("easy", 0.43), ("like", 0.2), ("enjoy", 0.4),
        ("enjoyed", 0.4), ("works", 0.2), ("worth", 0.3), ("favorite", 0.5),
        ("fine", 0.42), ("solid", 0.3), ("cheap", 0.4), ("affordable", 0.4),
        // negative
        ("bad", -0.7), ("terrible", -1.0), ("awful", -1.0), ("horrible", -1.0),
        ("poor", -0.4), ("worst", -1.0), ("worse", -0.4), ("hate", -0.8),
        ("hated", -0.9), ("dislike", -0.5), ("disappointing", -0.6), ("disappointed", -0.75),
        ("failure", -0.3), ("failed", -0.5), ("fail", -0.5), ("sad", -0.5),
        ("unhappy", -0.6), ("angry", -0.5), ("annoying", -0.8), ("frustrating", -0.4),
        ("broken", -0.4), ("broke", -0.4), ("useless", -0.5), ("waste", -0.2),
        ("scam", -0.8), ("fake", -0.5), ("unreliable", -0.6), ("slow", -0.3),
        ("difficult", -0.5), ("confusing", -0.3), ("expensive", -0.5), ("overpriced", -0.6),
        ("worthless", -0.8), ("garbage", -0.8), ("trash", -0.7), ("pathetic", -1.0),
        ("mediocre", -0.3), ("cheaply", -0.4), ("flimsy", -0.5), ("defective", -0.6),
        ("rude", -0.3), ("late", -0.3), ("wrong", -0.5), ("leaks", -0.4),
        ("dirty", -0.6), ("ugly", -0.7), ("uncomfortable", -0.5), ("noisy", -0.4),
    ]
    .into_iter()
    .collect()
});

static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "not", "no", "never", "nothing", "none", "nobody", "cannot", "can't", "cant",
        "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "won't", "wont",
        "isn't", "isnt", "aren't", "arent", "wasn't", "wasnt", "weren't", "werent",
        "wouldn't", "wouldnt", "shouldn't", "couldn't", "hardly", "barely",
    ]
    .into_iter()
    .collect()
});

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    vec![
        ("very", 1.3), ("really", 1.2), ("extremely", 1.5), ("so", 1.2),
        ("super", 1.3), ("incredibly", 1.4), ("absolutely", 1.4), ("totally", 1.2),
        ("highly", 1.3), ("quite", 1.1), ("slightly", 0.5), ("somewhat", 0.7),
        ("fairly", 0.8), ("bit", 0.7),
    ]
    .into_iter()
    .collect()
});

// Polarity of a negated word is flipped and damped by this factor
const NEGATION_FACTOR: f64 = -0.5;

/// Word matched by the scorer and the polarity it contributed.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedWord {
    pub word: String,
    pub polarity: f64,
}

/// Full breakdown of a lexicon scoring pass.
#[derive(Debug, Clone, Default)]
pub struct PolarityBreakdown {
    pub score: f64,
    pub matched: Vec<MatchedWord>,
    pub token_count: usize,
}

/// Lexicon-based polarity scorer.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        let words = DEFAULT_LEXICON
            .iter()
            .map(|(w, p)| (w.to_string(), *p))
            .collect();
        Self { words }
    }

    /// Adds or overrides a lexicon entry. Polarity is clamped to [-1, 1].
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.words
            .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
        self
    }

    pub fn polarity_of(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Scores `text` and reports which words contributed.
    pub fn score_detailed(&self, text: &str) -> PolarityBreakdown {
        let lowercase_text = text.to_lowercase();
        let tokens: Vec<&str> = WORD_RE
            .find_iter(&lowercase_text)
            .map(|m| m.as_str())
            .collect();

        let mut matched = Vec::new();
        let mut negate = false;
        let mut intensity: f64 = 1.0;

        for token in &tokens {
            if NEGATIONS.contains(*token) {
                negate = true;
                continue;
            }
            if let Some(mult) = INTENSIFIERS.get(*token) {
                intensity *= *mult;
                continue;
            }
            match self.words.get(*token) {
                Some(&base) => {
                    let mut polarity = base * intensity;
                    if negate {
                        polarity *= NEGATION_FACTOR;
                    }
                    matched.push(MatchedWord {
                        word: token.to_string(),
                        polarity: polarity.clamp(-1.0, 1.0),
                    });
                    negate = false;
                    intensity = 1.0;
                }
                _ => {
                    // Modifiers only reach the next word
                    negate = false;
                    intensity = 1.0;
                }
            }
        }

        let score = if matched.is_empty() {
            0.0
        } else {
            let sum: f64 = matched.iter().map(|m| m.polarity).sum();
            (sum / matched.len() as f64).clamp(-1.0, 1.0)
        };

        PolarityBreakdown {
            score,
            matched,
            token_count: tokens.len(),
        }
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        self.score_detailed(text).score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_review() {
        let scorer = LexiconScorer::new();
        let s = scorer.score("This product is amazing and wonderful. I love it so much. Best purchase ever!");
        assert!(s > 0.1, "score was {}", s);
    }

    #[test]
    fn test_negative_review() {
        let scorer = LexiconScorer::new();
        let s = scorer.score("This is terrible and horrible. I hate it. Worst experience ever, total failure.");
        assert!(s < -0.1, "score was {}", s);
    }

    #[test]
    fn test_neutral_review() {
        let scorer = LexiconScorer::new();
        let s = scorer.score("The item arrived on Tuesday in a cardboard box.");
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.score(""), 0.0);
        assert_eq!(scorer.score("   \n\t"), 0.0);
        assert_eq!(scorer.score("12345 !!! ???"), 0.0);
    }

    #[test]
    fn test_negation_flips_sign() {
        let scorer = LexiconScorer::new();
        assert!(scorer.score("good") > 0.0);
        assert!(scorer.score("not good") < 0.0);
        assert!(scorer.score("don't like it") < 0.0);
    }

    #[test]
    fn test_intensifier_scales() {
        let scorer = LexiconScorer::new();
        let plain = scorer.score("good");
        let strong = scorer.score("very good");
        let weak = scorer.score("slightly good");
        assert!(strong > plain);
        assert!(weak < plain);
    }

    #[test]
    fn test_modifiers_do_not_leak_past_unknown_words() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.score("not the box good"), scorer.score("good"));
    }

    #[test]
    fn test_score_stays_in_range() {
        let scorer = LexiconScorer::new();
        let s = scorer.score("extremely extremely extremely perfect");
        assert!(s <= 1.0);
        let s = scorer.score("absolutely totally pathetic");
        assert!(s >= -1.0);
    }

    #[test]
    fn test_custom_word() {
        let scorer = LexiconScorer::new().with_word("Rad", 0.9);
        assert_eq!(scorer.polarity_of("rad"), Some(0.9));
        assert!(scorer.score("so rad") > 0.1);
    }

    #[test]
    fn test_breakdown_lists_matches() {
        let scorer = LexiconScorer::new();
        let breakdown = scorer.score_detailed("Great price, bad packaging");
        assert_eq!(breakdown.token_count, 4);
        let words: Vec<&str> = breakdown.matched.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["great", "bad"]);
    }

    #[test]
    fn test_deterministic() {
        let scorer = LexiconScorer::new();
        let text = "Nice design but really slow and a bit expensive";
        assert_eq!(scorer.score(text), scorer.score(text));
    }
}
