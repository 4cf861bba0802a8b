// Keyword-based query analyzer.
//
// Tokenizes the query and looks for niche terms (fitness, beauty, gaming,
// ...). Matched niches contribute their own refinement and alternative
// queries ahead of the generic candidates. A query made only of stop words
// gets a nudge towards a more specific keyword first.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

use super::traits::QueryAnalyzer;
use crate::models::AiAnalysis;
use crate::output::truncate_chars;

/// Longest slice of the query echoed back in the understanding text.
pub const UNDERSTANDING_MAX_CHARS: usize = 50;

const MAX_REFINEMENTS: usize = 3;
const MAX_ALTERNATIVES: usize = 2;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid token regex"));

/// A content niche recognised from query terms.
struct Niche {
    name: &'static str,
    triggers: &'static [&'static str],
    refinement: &'static str,
    alternatives: &'static [&'static str],
}

const NICHES: &[Niche] = &[
    Niche {
        name: "fitness",
        triggers: &["fitness", "gym", "workout", "yoga", "training", "wellness", "running"],
        refinement: "Target audiences interested in sports and fitness",
        alternatives: &["home workout creators", "yoga and wellness influencers"],
    },
    Niche {
        name: "beauty",
        triggers: &["beauty", "makeup", "skincare", "cosmetics", "hair", "nails"],
        refinement: "Prefer creators with a mostly female audience aged 18-34",
        alternatives: &["skincare routine creators", "makeup tutorial influencers"],
    },
    Niche {
        name: "gaming",
        triggers: &["gaming", "gamer", "games", "game", "esports", "streamer", "twitch"],
        refinement: "Focus on YouTube and TikTok creators with high view counts",
        alternatives: &["PC gaming setup reviewers", "esports streamers"],
    },
    Niche {
        name: "food",
        triggers: &["food", "recipe", "recipes", "cooking", "chef", "baking", "vegan"],
        refinement: "Look for creators posting several times per week",
        alternatives: &["quick recipe creators", "plant-based food influencers"],
    },
    Niche {
        name: "travel",
        triggers: &["travel", "adventure", "hotel", "backpacking", "destinations"],
        refinement: "Add audience countries that match your target market",
        alternatives: &["luxury travel creators", "budget backpacking influencers"],
    },
    Niche {
        name: "tech",
        triggers: &["tech", "gadget", "gadgets", "software", "coding", "ai", "setup"],
        refinement: "Require a business contact email for sponsorship outreach",
        alternatives: &["consumer tech reviewers", "developer and coding creators"],
    },
    Niche {
        name: "fashion",
        triggers: &["fashion", "style", "outfit", "outfits", "streetwear", "ootd"],
        refinement: "Filter by audience credibility above 0.8",
        alternatives: &["sustainable fashion creators", "streetwear style influencers"],
    },
];

const VAGUE_QUERY_REFINEMENT: &str = "Add a niche or topic keyword to sharpen the search";

const GENERIC_REFINEMENTS: &[&str] = &[
    "Set a minimum engagement rate of 3%",
    "Restrict results to verified creators",
    "Narrow the follower range to micro-influencers (10K-100K)",
];

const GENERIC_ALTERNATIVES: &[&str] = &[
    "micro-influencers with high engagement",
    "fast-growing creators in your niche",
];

/// Default analyzer: stop-word-aware keyword matching.
pub struct KeywordAnalyzer {
    stop_words: HashSet<String>,
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self {
            stop_words: get(LANGUAGE::English).into_iter().collect(),
        }
    }
}

impl KeywordAnalyzer {
    /// Lowercased tokens of the query.
    fn tokens(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TOKEN
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Tokens that carry meaning (stop words removed).
    fn terms<'a>(&self, tokens: &'a [String]) -> Vec<&'a str> {
        tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !self.stop_words.contains(*t))
            .collect()
    }

    fn niches(tokens: &[String]) -> Vec<&'static Niche> {
        NICHES
            .iter()
            .filter(|n| n.triggers.iter().any(|t| tokens.iter().any(|tok| tok == t)))
            .collect()
    }
}

impl QueryAnalyzer for KeywordAnalyzer {
    fn analyze(&self, free_text: &str) -> Option<AiAnalysis> {
        if free_text.trim().is_empty() {
            return None;
        }

        let tokens = Self::tokens(free_text);
        let vague = self.terms(&tokens).is_empty();
        let niches = Self::niches(&tokens);

        let mut understanding = format!(
            "Looking for creators matching \"{}\"",
            truncate_chars(free_text, UNDERSTANDING_MAX_CHARS)
        );
        if !niches.is_empty() {
            let names: Vec<&str> = niches.iter().map(|n| n.name).collect();
            understanding.push_str(&format!(" in the {} space", names.join(" / ")));
        }

        let suggested_refinements = vague
            .then_some(VAGUE_QUERY_REFINEMENT)
            .into_iter()
            .chain(niches.iter().map(|n| n.refinement))
            .chain(GENERIC_REFINEMENTS.iter().copied())
            .take(MAX_REFINEMENTS)
            .map(str::to_string)
            .collect();

        let alternative_queries = niches
            .iter()
            .flat_map(|n| n.alternatives.iter().copied())
            .chain(GENERIC_ALTERNATIVES.iter().copied())
            .take(MAX_ALTERNATIVES)
            .map(str::to_string)
            .collect();

        Some(AiAnalysis {
            query_understanding: understanding,
            suggested_refinements,
            alternative_queries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_are_dropped() {
        let analyzer = KeywordAnalyzer::default();
        let tokens = KeywordAnalyzer::tokens("The skincare");
        let terms = analyzer.terms(&tokens);
        assert_eq!(terms, vec!["skincare"]);
    }

    #[test]
    fn test_stop_word_only_query_asks_for_specifics() {
        let analyzer = KeywordAnalyzer::default();
        let analysis = analyzer.analyze("the and of").unwrap();
        assert_eq!(analysis.suggested_refinements[0], VAGUE_QUERY_REFINEMENT);
        assert!(!analysis.alternative_queries.is_empty());
    }

    #[test]
    fn test_niche_alternatives_come_first() {
        let analyzer = KeywordAnalyzer::default();
        let analysis = analyzer.analyze("vegan baking").unwrap();
        assert_eq!(analysis.alternative_queries[0], "quick recipe creators");
        assert!(analysis.query_understanding.contains("food"));
    }

    #[test]
    fn test_unmatched_query_uses_generic_candidates() {
        let analyzer = KeywordAnalyzer::default();
        let analysis = analyzer.analyze("zzzz").unwrap();
        assert_eq!(analysis.suggested_refinements.len(), MAX_REFINEMENTS);
        assert_eq!(analysis.alternative_queries, GENERIC_ALTERNATIVES.to_vec());
    }
}
