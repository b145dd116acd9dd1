// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Suspect records and their cited-clue chains.
//!
//! A suspect owns a singly linked list of the clue texts that cite them,
//! newest first, plus a running citation count. Records never shrink: clues
//! are only prepended and counts only grow, and the whole chain is released
//! when the owning registry bucket drops.

/// One clue text cited against a suspect.
///
/// List node owned by the suspect's list head or by the previous node.
/// Prepended on every citation, so walking `next` links visits clues
/// newest-first. Identical texts may appear more than once: the registry
/// does not deduplicate citations.
#[derive(Debug)]
pub(crate) struct CitedClue {
    pub(crate) text: String,
    pub(crate) next: Option<Box<CitedClue>>,
}

/// A suspect under investigation.
///
/// Lives in a hash bucket chain inside the registry (the `next` link is the
/// collision chain, not related to the clue list). Created with zero
/// citations on the first association that names it; every association,
/// including the first, then bumps the count and prepends the cited clue.
#[derive(Debug)]
pub struct Suspect {
    pub(crate) name: String,
    pub(crate) citations: u64,
    pub(crate) clues: Option<Box<CitedClue>>,
    pub(crate) next: Option<Box<Suspect>>,
}

impl Suspect {
    /// Fresh record chained in front of `next` (head insertion).
    pub(crate) fn new(name: &str, next: Option<Box<Suspect>>) -> Self {
        Self {
            name: name.to_owned(),
            citations: 0,
            clues: None,
            next,
        }
    }

    /// Record one more citation of this suspect by `clue_text`.
    pub(crate) fn cite(&mut self, clue_text: &str) {
        self.citations += 1;
        self.clues = Some(Box::new(CitedClue {
            text: clue_text.to_owned(),
            next: self.clues.take(),
        }));
    }

    /// The suspect's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many times this suspect has been cited by a clue.
    pub fn citations(&self) -> u64 {
        self.citations
    }

    /// Iterate the cited clue texts, newest first.
    pub fn clues(&self) -> CitedClues<'_> {
        CitedClues {
            cursor: self.clues.as_deref(),
        }
    }
}

/// Iterator over one suspect's cited clue texts, newest first.
#[derive(Debug)]
pub struct CitedClues<'a> {
    cursor: Option<&'a CitedClue>,
}

impl<'a> Iterator for CitedClues<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let clue = self.cursor?;
        self.cursor = clue.next.as_deref();
        Some(clue.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_suspect_is_uncited() {
        let suspect = Suspect::new("Mordomo", None);
        assert_eq!(suspect.name(), "Mordomo");
        assert_eq!(suspect.citations(), 0);
        assert_eq!(suspect.clues().next(), None);
    }

    #[test]
    fn test_cite_prepends() {
        let mut suspect = Suspect::new("Mordomo", None);
        suspect.cite("A");
        suspect.cite("B");

        assert_eq!(suspect.citations(), 2);
        let clues: Vec<&str> = suspect.clues().collect();
        assert_eq!(clues, ["B", "A"]);
    }

    #[test]
    fn test_repeated_text_is_kept() {
        let mut suspect = Suspect::new("Jardineiro", None);
        suspect.cite("Pegadas de lama");
        suspect.cite("Pegadas de lama");

        assert_eq!(suspect.citations(), 2);
        let clues: Vec<&str> = suspect.clues().collect();
        assert_eq!(clues, ["Pegadas de lama", "Pegadas de lama"]);
    }
}
