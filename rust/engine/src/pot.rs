use serde::{Deserialize, Serialize};

/// Single running pot for a hand. There is no side-pot partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    total: u32,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, amount: u32) {
        self.total = self.total.saturating_add(amount);
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Empties the pot and returns what it held.
    pub fn take_all(&mut self) -> u32 {
        std::mem::take(&mut self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_all_resets_to_zero() {
        let mut pot = Pot::new();
        pot.add(30);
        pot.add(70);
        assert_eq!(pot.total(), 100);
        assert_eq!(pot.take_all(), 100);
        assert_eq!(pot.total(), 0);
    }
}
