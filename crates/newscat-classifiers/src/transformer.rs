//! Text to feature-vector transformation
//!
//! The shipped transformer is a bag-of-n-grams vectorizer with optional
//! inverse-document-frequency weighting. Its vocabulary and weights are fitted
//! offline and loaded from a JSON artifact.

use newscat_core::{FeatureVector, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Trait for pre-fitted text feature extractors
pub trait FeatureTransformer: Send + Sync {
    /// Map raw text to a fixed-length feature vector
    fn transform(&self, text: &str) -> Result<FeatureVector>;

    /// Length of every vector this transformer produces
    fn dimension(&self) -> usize;
}

/// Term weighting scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorizerKind {
    /// Term frequency times inverse document frequency
    #[default]
    Tfidf,
    /// Raw term counts
    Count,
}

/// Row normalization applied after weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
    None,
}

/// Serialized form of a fitted vectorizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerSpec {
    #[serde(default)]
    pub kind: VectorizerKind,

    /// Term to column index
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per column (required for `tfidf`)
    #[serde(default)]
    pub idf: Vec<f32>,

    #[serde(default = "default_true")]
    pub lowercase: bool,

    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,

    #[serde(default)]
    pub stop_words: Vec<String>,

    /// Inclusive `[min_n, max_n]` word n-gram range
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),

    /// Replace tf with `1 + ln(tf)`
    #[serde(default)]
    pub sublinear_tf: bool,

    /// Defaults to `l2` for tfidf and `none` for count
    #[serde(default)]
    pub norm: Option<Norm>,

    /// Reject texts longer than this many characters
    #[serde(default)]
    pub max_input_chars: Option<usize>,
}

fn default_true() -> bool {
    true
}

fn default_token_pattern() -> String {
    r"(?u)\b\w\w+\b".to_string()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

/// Longest word n-gram a vectorizer artifact may ask for
pub const MAX_NGRAM: usize = 5;

/// Bag-of-n-grams vectorizer with optional idf weighting
#[derive(Debug)]
pub struct TfidfVectorizer {
    kind: VectorizerKind,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    lowercase: bool,
    token_pattern: Regex,
    stop_words: HashSet<String>,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    norm: Norm,
    max_input_chars: Option<usize>,
}

impl TfidfVectorizer {
    /// Build a vectorizer from its serialized form, validating it
    pub fn from_spec(spec: VectorizerSpec) -> Result<Self> {
        let dimension = spec.vocabulary.len();
        if dimension == 0 {
            return Err(newscat_core::Error::config("vectorizer vocabulary is empty"));
        }

        let mut seen = vec![false; dimension];
        for (term, &idx) in &spec.vocabulary {
            if idx >= dimension {
                return Err(newscat_core::Error::config(format!(
                    "vocabulary index {} for term '{}' is out of range (size {})",
                    idx, term, dimension
                )));
            }
            if seen[idx] {
                return Err(newscat_core::Error::config(format!(
                    "vocabulary index {} is assigned to more than one term",
                    idx
                )));
            }
            seen[idx] = true;
        }

        if spec.kind == VectorizerKind::Tfidf && spec.idf.len() != dimension {
            return Err(newscat_core::Error::config(format!(
                "idf has {} weights but the vocabulary has {} terms",
                spec.idf.len(),
                dimension
            )));
        }

        let (min_n, max_n) = spec.ngram_range;
        if min_n == 0 || min_n > max_n || max_n > MAX_NGRAM {
            return Err(newscat_core::Error::config(format!(
                "invalid ngram_range ({}, {}), n-grams must be between 1 and {}",
                min_n, max_n, MAX_NGRAM
            )));
        }

        let token_pattern = Regex::new(&spec.token_pattern).map_err(|e| {
            newscat_core::Error::config(format!("invalid token_pattern: {e}"))
        })?;

        let norm = spec.norm.unwrap_or(match spec.kind {
            VectorizerKind::Tfidf => Norm::L2,
            VectorizerKind::Count => Norm::None,
        });

        let stop_words = spec
            .stop_words
            .into_iter()
            .map(|w| if spec.lowercase { w.to_lowercase() } else { w })
            .collect();

        Ok(Self {
            kind: spec.kind,
            vocabulary: spec.vocabulary,
            idf: spec.idf,
            lowercase: spec.lowercase,
            token_pattern,
            stop_words,
            ngram_range: spec.ngram_range,
            sublinear_tf: spec.sublinear_tf,
            norm,
            max_input_chars: spec.max_input_chars,
        })
    }

    /// Weighting scheme in use
    pub fn kind(&self) -> VectorizerKind {
        self.kind
    }

    /// Split text into word n-grams after case folding and stop-word removal
    fn analyze(&self, text: &str) -> Vec<String> {
        let folded;
        let text = if self.lowercase {
            folded = text.to_lowercase();
            folded.as_str()
        } else {
            text
        };

        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut grams = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            if n == 1 {
                grams.extend(tokens.iter().map(|t| t.to_string()));
            } else {
                grams.extend(tokens.windows(n).map(|w| w.join(" ")));
            }
        }
        grams
    }

    fn normalize(&self, values: &mut [f32]) {
        let norm = match self.norm {
            Norm::None => return,
            Norm::L1 => values.iter().map(|v| v.abs()).sum::<f32>(),
            Norm::L2 => values.iter().map(|v| v * v).sum::<f32>().sqrt(),
        };
        if norm > 0.0 {
            values.iter_mut().for_each(|v| *v /= norm);
        }
    }
}

impl FeatureTransformer for TfidfVectorizer {
    fn transform(&self, text: &str) -> Result<FeatureVector> {
        if let Some(limit) = self.max_input_chars {
            let chars = text.chars().count();
            if chars > limit {
                return Err(newscat_core::Error::transform(format!(
                    "text has {} characters, the limit is {}",
                    chars, limit
                )));
            }
        }

        let mut features = FeatureVector::zeros(self.dimension());
        let values = features.values_mut();

        for gram in self.analyze(text) {
            if let Some(&idx) = self.vocabulary.get(&gram) {
                values[idx] += 1.0;
            }
        }

        for (idx, value) in values.iter_mut().enumerate() {
            if *value == 0.0 {
                continue;
            }
            if self.sublinear_tf {
                *value = 1.0 + value.ln();
            }
            if self.kind == VectorizerKind::Tfidf {
                *value *= self.idf[idx];
            }
        }

        self.normalize(values);
        Ok(features)
    }

    fn dimension(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: VectorizerKind) -> VectorizerSpec {
        VectorizerSpec {
            kind,
            vocabulary: HashMap::from([
                ("markets".to_string(), 0),
                ("rally".to_string(), 1),
                ("football".to_string(), 2),
                ("markets rally".to_string(), 3),
            ]),
            idf: vec![1.0, 2.0, 1.5, 3.0],
            lowercase: true,
            token_pattern: default_token_pattern(),
            stop_words: vec!["the".to_string()],
            ngram_range: (1, 1),
            sublinear_tf: false,
            norm: None,
            max_input_chars: None,
        }
    }

    #[test]
    fn test_count_vectorizer() {
        let vectorizer = TfidfVectorizer::from_spec(spec(VectorizerKind::Count)).unwrap();
        let v = vectorizer.transform("Markets RALLY as markets open").unwrap();
        assert_eq!(v.values(), &[2.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_tfidf_is_l2_normalized() {
        let vectorizer = TfidfVectorizer::from_spec(spec(VectorizerKind::Tfidf)).unwrap();
        let v = vectorizer.transform("markets rally").unwrap();
        let norm: f32 = v.values().iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        // idf weighting keeps "rally" twice as heavy as "markets"
        assert!((v.values()[1] - 2.0 * v.values()[0]).abs() < 1e-6);
    }

    #[test]
    fn test_bigrams() {
        let mut s = spec(VectorizerKind::Count);
        s.ngram_range = (1, 2);
        let vectorizer = TfidfVectorizer::from_spec(s).unwrap();
        let v = vectorizer.transform("the markets rally").unwrap();
        assert_eq!(v.values(), &[1.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_unknown_terms_give_zero_vector() {
        let vectorizer = TfidfVectorizer::from_spec(spec(VectorizerKind::Tfidf)).unwrap();
        let v = vectorizer.transform("completely unrelated words").unwrap();
        assert_eq!(v.len(), 4);
        assert_eq!(v.nnz(), 0);
    }

    #[test]
    fn test_single_char_tokens_are_ignored() {
        let vectorizer = TfidfVectorizer::from_spec(spec(VectorizerKind::Count)).unwrap();
        let v = vectorizer.transform("a b c").unwrap();
        assert_eq!(v.nnz(), 0);
    }

    #[test]
    fn test_sublinear_tf() {
        let mut s = spec(VectorizerKind::Count);
        s.sublinear_tf = true;
        let vectorizer = TfidfVectorizer::from_spec(s).unwrap();
        let v = vectorizer.transform("rally rally rally").unwrap();
        assert!((v.values()[1] - (1.0 + 3f32.ln())).abs() < 1e-6);
    }

    #[test]
    fn test_max_input_chars() {
        let mut s = spec(VectorizerKind::Tfidf);
        s.max_input_chars = Some(10);
        let vectorizer = TfidfVectorizer::from_spec(s).unwrap();

        assert!(vectorizer.transform("markets").is_ok());
        let err = vectorizer.transform("markets rally hard").unwrap_err();
        assert!(matches!(err, newscat_core::Error::Transform(_)));
    }

    #[test]
    fn test_rejects_mismatched_idf() {
        let mut s = spec(VectorizerKind::Tfidf);
        s.idf.pop();
        assert!(TfidfVectorizer::from_spec(s).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_vocabulary() {
        let mut s = spec(VectorizerKind::Count);
        s.vocabulary.insert("sports".to_string(), 9);
        assert!(TfidfVectorizer::from_spec(s).is_err());
    }

    #[test]
    fn test_rejects_bad_ngram_range() {
        let mut s = spec(VectorizerKind::Count);
        s.ngram_range = (2, 1);
        assert!(TfidfVectorizer::from_spec(s).is_err());

        let mut s = spec(VectorizerKind::Count);
        s.ngram_range = (1, 1_000_000);
        assert!(TfidfVectorizer::from_spec(s).is_err());
    }

    #[test]
    fn test_ngrams_longer_than_text() {
        let mut s = spec(VectorizerKind::Count);
        s.ngram_range = (1, MAX_NGRAM);
        let vectorizer = TfidfVectorizer::from_spec(s).unwrap();

        let v = vectorizer.transform("markets rally").unwrap();
        assert_eq!(v.values(), &[1.0, 1.0, 0.0, 1.0]);
        assert_eq!(vectorizer.transform("rally").unwrap().nnz(), 1);
    }

    #[test]
    fn test_parse_spec_defaults() {
        let json = r#"{ "vocabulary": { "goal": 0, "stocks": 1 }, "idf": [1.2, 1.7] }"#;
        let spec: VectorizerSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.kind, VectorizerKind::Tfidf);
        assert!(spec.lowercase);
        assert_eq!(spec.ngram_range, (1, 1));

        let vectorizer = TfidfVectorizer::from_spec(spec).unwrap();
        assert_eq!(vectorizer.dimension(), 2);
    }
}
