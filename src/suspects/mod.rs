// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Suspect registry: a hash table of suspects keyed by name.
//!
//! Collisions are handled by chaining: each bucket holds a singly linked
//! chain of suspect records, and new suspects are inserted at the chain head,
//! so within a bucket the newest suspect is found first. Lookup compares
//! names exactly, so chain order never affects correctness, only enumeration
//! order.
//!
//! # The hash
//!
//! The bucket index is the first byte of the name modulo the bucket count.
//! That is deliberately weak: any two names sharing a first letter collide,
//! which keeps the chaining code honestly exercised even with the small fixed
//! cast of this game. The bucket count is tunable via [`with_capacity`]
//! (a small prime works best); [`new`] uses [`DEFAULT_CAPACITY`].
//!
//! [`with_capacity`]: SuspectRegistry::with_capacity
//! [`new`]: SuspectRegistry::new

pub mod record;

pub use record::{CitedClues, Suspect};

/// Default number of hash buckets (a small prime for decent spread).
pub const DEFAULT_CAPACITY: usize = 7;

/// Hash table of suspects with chained collision handling.
///
/// # Example
///
/// ```
/// use detective_quest::suspects::SuspectRegistry;
///
/// let mut registry = SuspectRegistry::new();
/// registry.associate("Mordomo", "Chave do Escritorio");
/// registry.associate("Mordomo", "Carta de divida");
///
/// let suspect = registry.lookup("Mordomo").unwrap();
/// assert_eq!(suspect.citations(), 2);
///
/// let clues: Vec<&str> = suspect.clues().collect();
/// assert_eq!(clues, ["Carta de divida", "Chave do Escritorio"]);
/// ```
#[derive(Debug)]
pub struct SuspectRegistry {
    /// One owned chain head per bucket.
    buckets: Vec<Option<Box<Suspect>>>,
}

impl SuspectRegistry {
    /// Create an empty registry with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty registry with a chosen bucket count.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "registry capacity must be non-zero");
        Self {
            buckets: (0..capacity).map(|_| None).collect(),
        }
    }

    /// Number of hash buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket index for a name: first byte modulo the bucket count.
    ///
    /// An empty name hashes to bucket 0.
    pub fn bucket_of(&self, name: &str) -> usize {
        let first = name.as_bytes().first().copied().unwrap_or(0);
        first as usize % self.capacity()
    }

    /// Find a suspect by exact name.
    pub fn lookup(&self, name: &str) -> Option<&Suspect> {
        let mut cursor = self.buckets[self.bucket_of(name)].as_deref();
        while let Some(suspect) = cursor {
            if suspect.name == name {
                return Some(suspect);
            }
            cursor = suspect.next.as_deref();
        }
        None
    }

    fn lookup_mut(&mut self, name: &str) -> Option<&mut Suspect> {
        let bucket = self.bucket_of(name);
        let mut cursor = self.buckets[bucket].as_deref_mut();
        while let Some(suspect) = cursor {
            if suspect.name == name {
                return Some(suspect);
            }
            cursor = suspect.next.as_deref_mut();
        }
        None
    }

    /// Associate a clue text with a suspect, creating the suspect on first
    /// mention.
    ///
    /// A new suspect is head-inserted into its bucket chain; then, new or
    /// not, its citation count is incremented and the clue text is prepended
    /// to its list. Identical clue texts are all stored and all counted.
    pub fn associate(&mut self, name: &str, clue_text: &str) {
        if self.lookup(name).is_none() {
            let bucket = self.bucket_of(name);
            let chain = self.buckets[bucket].take();
            self.buckets[bucket] = Some(Box::new(Suspect::new(name, chain)));
        }

        let suspect = self
            .lookup_mut(name)
            .expect("suspect chain must contain the name after insertion");
        suspect.cite(clue_text);
    }

    /// Number of suspects across all buckets.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when no association has ever been recorded.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Option::is_none)
    }

    /// Iterate all suspects: buckets in index order, and within each bucket
    /// in chain order (newest first).
    ///
    /// This is the registry's canonical enumeration order; [`most_likely`]
    /// scans in the same order.
    ///
    /// [`most_likely`]: SuspectRegistry::most_likely
    pub fn iter(&self) -> Suspects<'_> {
        Suspects {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    /// The suspect with the highest citation count, if the evidence points
    /// anywhere at all.
    ///
    /// Scans in enumeration order keeping the current leader; only a strictly
    /// greater count replaces it, so ties keep the earlier-encountered
    /// suspect. Returns `None` (insufficient evidence) when the registry is
    /// empty or no suspect has a citation.
    pub fn most_likely(&self) -> Option<&Suspect> {
        let mut leader: Option<&Suspect> = None;
        for suspect in self.iter() {
            if leader.map_or(true, |best| suspect.citations > best.citations) {
                leader = Some(suspect);
            }
        }
        leader.filter(|suspect| suspect.citations > 0)
    }
}

impl Default for SuspectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a SuspectRegistry {
    type Item = &'a Suspect;
    type IntoIter = Suspects<'a>;

    fn into_iter(self) -> Suspects<'a> {
        self.iter()
    }
}

/// Iterator over every suspect in the registry.
///
/// Walks bucket slots in index order and follows each bucket's chain before
/// moving to the next slot.
#[derive(Debug)]
pub struct Suspects<'a> {
    buckets: std::slice::Iter<'a, Option<Box<Suspect>>>,
    chain: Option<&'a Suspect>,
}

impl<'a> Iterator for Suspects<'a> {
    type Item = &'a Suspect;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(suspect) = self.chain {
                self.chain = suspect.next.as_deref();
                return Some(suspect);
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }
}
