use crate::core::{MethodScore, RankedMethods, TopKList};

pub const DEFAULT_TOP_K: usize = 3;

/// Keeps the `k` highest-scoring methods seen so far, best first.
///
/// Entries are placed by insertion as they arrive; the tracker never sorts.
/// An incoming entry goes in front of the first held entry with a strictly
/// lower score, so methods discovered earlier stay ahead of later ones with
/// the same score. While fewer than `k` entries are held nothing is dropped.
#[derive(Clone, Debug)]
pub struct TopKTracker {
    k: usize,
    entries: Vec<MethodScore>,
    offered: usize,
}

impl TopKTracker {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            entries: Vec::new(),
            offered: 0,
        }
    }

    /// Offers the next method in discovery order. Returns whether it is held.
    pub fn offer(&mut self, entry: MethodScore) -> bool {
        self.offered += 1;

        match self.entries.iter().position(|held| held.score < entry.score) {
            Some(index) => {
                self.entries.insert(index, entry);
                self.entries.truncate(self.k);
                index < self.k
            }
            None if self.entries.len() < self.k => {
                self.entries.push(entry);
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[MethodScore] {
        &self.entries
    }

    /// Number of methods offered so far, held or not.
    pub fn offered(&self) -> usize {
        self.offered
    }

    pub fn finish(self) -> RankedMethods {
        if self.offered == 0 {
            RankedMethods::NoMethods
        } else {
            RankedMethods::Ranked {
                methods: TopKList::from_entries(self.entries),
            }
        }
    }
}

impl Default for TopKTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K)
    }
}

impl Extend<MethodScore> for TopKTracker {
    fn extend<I: IntoIterator<Item = MethodScore>>(&mut self, iter: I) {
        for entry in iter {
            self.offer(entry);
        }
    }
}

pub fn rank_methods<I>(scores: I, k: usize) -> RankedMethods
where
    I: IntoIterator<Item = MethodScore>,
{
    let mut tracker = TopKTracker::new(k);
    tracker.extend(scores);
    tracker.finish()
}
