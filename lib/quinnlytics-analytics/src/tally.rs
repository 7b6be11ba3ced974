use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counter that remembers the order keys were first seen in, so
/// ties resolve to the earliest key.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    counts: Vec<(K, usize)>,
    index: HashMap<K, usize>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            counts: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&position) => self.counts[position].1 += 1,
            None => {
                self.index.insert(key.clone(), self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    /// The most frequent key; the first seen among equally frequent ones.
    pub fn most_common(&self) -> Option<&K> {
        let mut best: Option<&(K, usize)> = None;
        for entry in &self.counts {
            if best.map_or(true, |(_, count)| entry.1 > *count) {
                best = Some(entry);
            }
        }
        best.map(|(key, _)| key)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
