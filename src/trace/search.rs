//! Substring search over disassembly lines

use crate::trace::store::TraceStore;

/// One search invocation: the query and the ascending list of matching
/// instruction indices.  Rebuilt fresh on every `/` confirm and kept as the
/// viewer's `last_search` for `n`/`N` navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    query: String,
    hits: Vec<usize>,
}

impl SearchResults {
    /// Scan every mnemonic line for `query` as a case-sensitive substring.
    /// An empty query matches nothing.
    pub fn run(store: &TraceStore, query: &str) -> Self {
        let hits = if query.is_empty() {
            Vec::new()
        } else {
            (0..store.len())
                .filter(|&i| store.mnemonic(i).is_some_and(|m| m.contains(query)))
                .collect()
        };
        SearchResults {
            query: query.to_string(),
            hits,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn hits(&self) -> &[usize] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Smallest hit strictly greater than `index`.  Does not wrap.
    pub fn next_after(&self, index: usize) -> Option<usize> {
        self.hits.iter().copied().find(|&hit| hit > index)
    }

    /// Largest hit strictly less than `index`.  Does not wrap.
    pub fn prev_before(&self, index: usize) -> Option<usize> {
        self.hits.iter().rev().copied().find(|&hit| hit < index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(mnemonics: &[&str]) -> TraceStore {
        let raw: String = mnemonics
            .iter()
            .map(|m| format!("eax  0x00\neip  0x00\n{}\n", m))
            .collect::<Vec<_>>()
            .join("---\n");
        TraceStore::parse(&raw).expect("trace should parse")
    }

    #[test]
    fn hits_are_ascending() {
        let store = store(&["mov eax,1", "call foo", "mov ebx,2", "mov ecx,3"]);
        let results = SearchResults::run(&store, "mov");
        assert_eq!(results.hits(), &[0, 2, 3]);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let store = store(&["mov eax,1", "ret"]);
        assert!(SearchResults::run(&store, "").is_empty());
    }

    #[test]
    fn neighbors_are_strict_and_non_wrapping() {
        let store = store(&["mov eax,1", "call foo", "mov ebx,2"]);
        let results = SearchResults::run(&store, "mov");
        assert_eq!(results.next_after(0), Some(2));
        assert_eq!(results.next_after(2), None);
        assert_eq!(results.prev_before(2), Some(0));
        assert_eq!(results.prev_before(0), None);
    }

    #[test]
    fn single_hit_scenario() {
        // Scenario: "mov" over [call foo, mov eax,2, ret].
        let store = store(&["call foo", "mov eax,2", "ret"]);
        let results = SearchResults::run(&store, "mov");
        assert_eq!(results.hits(), &[1]);
        assert_eq!(results.next_after(0), Some(1));
        assert_eq!(results.prev_before(2), Some(1));
    }
}
