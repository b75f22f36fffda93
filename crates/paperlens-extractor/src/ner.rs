//! Rule-based named-entity recognition for technical papers
//!
//! Combines regex patterns with a dictionary of well-known research
//! organizations. Overlapping detections are deduplicated, keeping the
//! highest-confidence span, so an organization suffix match beats the
//! looser capitalized-name pattern covering the same text.
//!
//! The label set is fixed (`NerLabel`); labels the tool does not consume
//! (dates, cardinals) are still detected here so they can claim their spans
//! before being discarded during bucketing.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::{EntityExtractor, ExtractedEntity};
use paperlens_core::{NerLabel, Result};

/// Dictionary entry for entity matching
#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    pub term: String,
    pub label: NerLabel,
    pub aliases: Vec<String>,
}

/// Rule-based NER using regex patterns and a known-organization dictionary
pub struct RuleBasedNer {
    /// Pattern rules (regex -> label, confidence)
    patterns: Vec<(Regex, NerLabel, f32)>,
    /// Dictionary of known terms
    dictionary: HashMap<String, DictionaryEntry>,
    /// Words that disqualify a capitalized pair from being a person name
    name_stopwords: HashSet<&'static str>,
}

impl RuleBasedNer {
    /// Create a new rule-based NER with the default paper-domain rules
    pub fn new() -> Self {
        let mut ner = Self {
            patterns: Vec::new(),
            dictionary: HashMap::new(),
            name_stopwords: HashSet::new(),
        };

        ner.init_patterns();
        ner.init_org_dictionary();
        ner.init_name_stopwords();
        ner
    }

    /// Initialize regex patterns for the paper domain
    fn init_patterns(&mut self) {
        // Organizations: capitalized words ending in an institutional suffix
        self.add_pattern(
            r"\b(?:[A-Z][A-Za-z&]+\s+)+(?:University|Institute|Laboratory|Labs?|College|Corporation|Corp|Inc|Ltd|LLC|GmbH|Foundation|Society|Association|Center|Centre)\b",
            NerLabel::Org,
            0.9,
        );
        self.add_pattern(
            r"\b(?:University|Institute|College)\s+of\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?\b",
            NerLabel::Org,
            0.95,
        );

        // Persons: honorific-prefixed names, then bare capitalized pairs with
        // an optional middle initial
        self.add_pattern(
            r"\b(?:Dr|Prof|Professor|Mr|Ms|Mrs)\.?\s+([A-Z][a-z]+(?:\s+[A-Z]\.)?\s+[A-Z][a-z]+)\b",
            NerLabel::Person,
            0.95,
        );
        self.add_pattern(
            r"\b[A-Z][a-z]+(?:\s+[A-Z]\.)?\s+[A-Z][a-z]+\b",
            NerLabel::Person,
            0.6,
        );

        // Works: quoted titles
        self.add_pattern(r#""([^"\n]{8,120})""#, NerLabel::WorkOfArt, 0.8);
        self.add_pattern(r"\u{201C}([^\u{201D}\n]{8,120})\u{201D}", NerLabel::WorkOfArt, 0.8);

        // Citation markers: numeric brackets and author-year references
        self.add_pattern(r"\[\d{1,3}(?:\s*,\s*\d{1,3})*\]", NerLabel::Misc, 0.85);
        self.add_pattern(
            r"\b[A-Z][A-Za-z\-]+\s+et\s+al\.(?:,\s*\(?\d{4}\)?)?",
            NerLabel::Misc,
            0.9,
        );

        // Detected but discarded downstream
        self.add_pattern(r"\b(?:19|20)\d{2}\b", NerLabel::Date, 0.8);
        self.add_pattern(r"\b\d+(?:\.\d+)?\b", NerLabel::Cardinal, 0.5);
    }

    /// Initialize the dictionary of well-known research organizations
    fn init_org_dictionary(&mut self) {
        self.add_term("MIT", NerLabel::Org, vec!["Massachusetts Institute of Technology"]);
        self.add_term("IEEE", NerLabel::Org, vec![]);
        self.add_term("ACM", NerLabel::Org, vec![]);
        self.add_term("Google", NerLabel::Org, vec!["Google Research", "Google Brain"]);
        self.add_term("Microsoft", NerLabel::Org, vec!["Microsoft Research"]);
        self.add_term("IBM", NerLabel::Org, vec!["IBM Research"]);
        self.add_term("DeepMind", NerLabel::Org, vec![]);
        self.add_term("OpenAI", NerLabel::Org, vec![]);
        self.add_term("NASA", NerLabel::Org, vec![]);
        self.add_term("CERN", NerLabel::Org, vec![]);
        self.add_term("NIST", NerLabel::Org, vec![]);
    }

    /// Words that start a capitalized pair without naming a person
    fn init_name_stopwords(&mut self) {
        for word in [
            "The", "This", "That", "These", "Those", "Our", "Their", "His", "Her", "Its",
            "New", "In", "On", "At", "For", "From", "With", "We", "If", "It", "As", "An",
            "All", "Each", "Both", "Table", "Figure", "Section", "Chapter", "Appendix",
            "Abstract", "Introduction", "Related", "Results", "Conclusion", "Deep",
            "Neural", "Machine", "Artificial",
        ] {
            self.name_stopwords.insert(word);
        }
    }

    /// Add a regex pattern
    fn add_pattern(&mut self, pattern: &str, label: NerLabel, confidence: f32) {
        if let Ok(regex) = Regex::new(pattern) {
            self.patterns.push((regex, label, confidence));
        }
    }

    /// Add a dictionary term
    fn add_term(&mut self, term: &str, label: NerLabel, aliases: Vec<&str>) {
        let entry = DictionaryEntry {
            term: term.to_string(),
            label,
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
        };
        self.dictionary.insert(term.to_string(), entry);
    }

    /// Extract entities using pattern matching
    fn extract_by_patterns(&self, text: &str) -> Vec<ExtractedEntity> {
        let mut entities = Vec::new();

        for (regex, label, confidence) in &self.patterns {
            for caps in regex.captures_iter(text) {
                // Patterns with a capture group keep only the group as the
                // entity text (honorifics and quotes stay out of the span)
                let mat = caps
                    .get(1)
                    .unwrap_or_else(|| caps.get(0).expect("match group 0 always present"));

                if *label == NerLabel::Person && !self.accept_person(mat.as_str()) {
                    continue;
                }

                entities.push(ExtractedEntity {
                    text: mat.as_str().to_string(),
                    label: *label,
                    start: mat.start(),
                    end: mat.end(),
                    confidence: *confidence,
                });
            }
        }

        entities
    }

    /// Extract entities using dictionary lookup
    fn extract_by_dictionary(&self, text: &str) -> Vec<ExtractedEntity> {
        let mut entities = Vec::new();

        for entry in self.dictionary.values() {
            self.collect_term(text, &entry.term, entry.label, 0.95, &mut entities);
            for alias in &entry.aliases {
                self.collect_term(text, alias, entry.label, 0.9, &mut entities);
            }
        }

        entities
    }

    /// Collect whole-word occurrences of a term
    fn collect_term(
        &self,
        text: &str,
        term: &str,
        label: NerLabel,
        confidence: f32,
        out: &mut Vec<ExtractedEntity>,
    ) {
        for (start, _) in text.match_indices(term) {
            let end = start + term.len();
            if !is_word_boundary(text, start, end) {
                continue;
            }

            out.push(ExtractedEntity {
                text: term.to_string(),
                label,
                start,
                end,
                confidence,
            });
        }
    }

    /// Reject capitalized pairs that start with a sentence word rather than
    /// a name
    fn accept_person(&self, candidate: &str) -> bool {
        match candidate.split_whitespace().next() {
            Some(first) => !self.name_stopwords.contains(first),
            None => false,
        }
    }

    /// Remove duplicate/overlapping entities, keeping highest confidence
    fn deduplicate(&self, mut entities: Vec<ExtractedEntity>) -> Vec<ExtractedEntity> {
        // Sort by start position, then by confidence (descending)
        entities.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then(b.confidence.total_cmp(&a.confidence))
        });

        let mut result: Vec<ExtractedEntity> = Vec::new();
        let mut covered: HashSet<usize> = HashSet::new();

        for entity in entities {
            let overlaps = (entity.start..entity.end).any(|i| covered.contains(&i));

            if !overlaps {
                for i in entity.start..entity.end {
                    covered.insert(i);
                }
                result.push(entity);
            }
        }

        result.sort_by_key(|e| e.start);
        result
    }
}

impl Default for RuleBasedNer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor for RuleBasedNer {
    fn extract(&self, text: &str) -> Result<Vec<ExtractedEntity>> {
        let mut entities = Vec::new();

        entities.extend(self.extract_by_patterns(text));
        entities.extend(self.extract_by_dictionary(text));

        Ok(self.deduplicate(entities))
    }
}

/// Check that a span sits on word boundaries
fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before_ok = start == 0
        || text[..start]
            .chars()
            .next_back()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);
    let after_ok = end == text.len()
        || text[end..]
            .chars()
            .next()
            .map(|c| !c.is_alphanumeric())
            .unwrap_or(true);

    before_ok && after_ok
}
