//! Component id generation.
//!
//! Ids are short opaque strings.  [`RandomIds`] draws them from UUID v4
//! randomness; [`SequentialIds`] yields `c1`, `c2`, … and is handy when a
//! caller needs reproducible output (tests, golden files).

use uuid::Uuid;

/// Source of candidate component ids.
///
/// Generators may repeat; [`ComponentList::allocate_id`](super::ComponentList::allocate_id)
/// filters out ids that are still in use.
pub trait IdGenerator: Send {
    fn generate(&mut self) -> String;
}

/// Random nine-character ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl RandomIds {
    const LEN: usize = 9;
}

impl IdGenerator for RandomIds {
    fn generate(&mut self) -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(Self::LEN);
        id
    }
}

/// Deterministic ids with a fixed prefix and a running counter.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("c")
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn random_ids_are_nine_hex_chars() {
        let id = RandomIds.generate();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn random_ids_rarely_repeat() {
        let mut ids = RandomIds;
        let drawn: HashSet<String> = (0..200).map(|_| ids.generate()).collect();
        assert_eq!(drawn.len(), 200);
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::new("btn-");
        assert_eq!(ids.generate(), "btn-1");
        assert_eq!(ids.generate(), "btn-2");
    }
}
