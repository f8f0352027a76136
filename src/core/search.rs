use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a fuzzy suggestion
const FUZZY_THRESHOLD: f64 = 0.8;

/// Match tier for ranking suggestions
///
/// Lower is better: a full-name prefix beats a word/substring hit, which
/// beats a fuzzy hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchTier {
    Prefix = 0,
    Substring = 1,
    Fuzzy = 2,
}

/// In-memory roster index for fighter name autocomplete
///
/// Built once at startup from the store's name listing. Searches are pure
/// and stateless, so concurrent requests share the index freely.
#[derive(Debug, Clone)]
pub struct NameIndex {
    names: Vec<String>,
}

impl NameIndex {
    pub fn new(mut names: Vec<String>) -> Self {
        names.sort();
        names.dedup();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Rank roster names against a query
    ///
    /// Tier 1: case-insensitive full-name prefix. Tier 2: prefix on a later
    /// word of the name, or substring anywhere. Tier 3: Jaro-Winkler
    /// similarity above the cutoff. Results order tier-first, then by
    /// descending similarity, then alphabetically.
    pub fn search(&self, query: &str, limit: usize) -> Vec<String> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<(MatchTier, f64, &String)> = self
            .names
            .iter()
            .filter_map(|name| {
                let lower = name.to_lowercase();
                let similarity = jaro_winkler(&lower, &query);

                let tier = if lower.starts_with(&query) {
                    MatchTier::Prefix
                } else if lower.split_whitespace().any(|w| w.starts_with(&query))
                    || lower.contains(&query)
                {
                    MatchTier::Substring
                } else if similarity >= FUZZY_THRESHOLD {
                    MatchTier::Fuzzy
                } else {
                    return None;
                };

                Some((tier, similarity, name))
            })
            .collect();

        ranked.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| {
                    b.1.partial_cmp(&a.1)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.2.cmp(b.2))
        });

        ranked
            .into_iter()
            .take(limit)
            .map(|(_, _, name)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> NameIndex {
        NameIndex::new(vec![
            "Jon Jones".to_string(),
            "Jan Blachowicz".to_string(),
            "Tom Aspinall".to_string(),
            "Alexander Volkanovski".to_string(),
            "Alex Pereira".to_string(),
            "Amanda Nunes".to_string(),
        ])
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        assert!(roster().search("", 10).is_empty());
        assert!(roster().search("   ", 10).is_empty());
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let results = roster().search("jon", 10);
        assert_eq!(results[0], "Jon Jones");
    }

    #[test]
    fn test_closest_prefix_match_ranks_first() {
        // Both names share the prefix; the closer full name wins the tie
        let results = roster().search("alex", 10);
        assert_eq!(results[0], "Alex Pereira");
        assert_eq!(results[1], "Alexander Volkanovski");
    }

    #[test]
    fn test_later_word_prefix_matches() {
        let results = roster().search("volk", 10);
        assert_eq!(results, vec!["Alexander Volkanovski"]);
    }

    #[test]
    fn test_fuzzy_match_catches_typos() {
        let results = roster().search("jon jnes", 10);
        assert!(results.contains(&"Jon Jones".to_string()));
    }

    #[test]
    fn test_unrelated_query_matches_nothing() {
        let results = roster().search("zzzzqqqq", 10);
        assert!(results.is_empty());
    }

    #[test]
    fn test_limit_respected() {
        let results = roster().search("a", 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_dedup_on_build() {
        let index = NameIndex::new(vec![
            "Jon Jones".to_string(),
            "Jon Jones".to_string(),
        ]);
        assert_eq!(index.len(), 1);
    }
}
