//! Session statistics for the human seat.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use holdem_engine::analysis::DecisionReport;
use holdem_engine::cards::HoleCards;

/// Running totals across one play session.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    hands_played: u32,
    hands_won: u32,
    starting_chips: i64,
    current_chips: i64,
    optimal_decisions: u32,
    total_decisions: u32,
    // notation -> (net chips, times played)
    by_hand: BTreeMap<String, (i64, u32)>,
    history: Vec<DecisionReport>,
}

impl SessionStats {
    pub fn new(starting_chips: u32) -> Self {
        Self {
            starting_chips: i64::from(starting_chips),
            current_chips: i64::from(starting_chips),
            ..Self::default()
        }
    }

    pub fn record_decision(&mut self, report: &DecisionReport) {
        self.total_decisions += 1;
        if report.optimal {
            self.optimal_decisions += 1;
        }
        self.history.push(report.clone());
    }

    pub fn record_hand_result(&mut self, hole: &HoleCards, chips_delta: i64, won: bool) {
        self.hands_played += 1;
        if won {
            self.hands_won += 1;
        }
        self.current_chips += chips_delta;
        let entry = self.by_hand.entry(hole.notation()).or_insert((0, 0));
        entry.0 += chips_delta;
        entry.1 += 1;
    }

    pub fn update_chips(&mut self, chips: u32) {
        self.current_chips = i64::from(chips);
    }

    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    pub fn hands_won(&self) -> u32 {
        self.hands_won
    }

    pub fn total_decisions(&self) -> u32 {
        self.total_decisions
    }

    pub fn optimal_decisions(&self) -> u32 {
        self.optimal_decisions
    }

    pub fn history(&self) -> &[DecisionReport] {
        &self.history
    }

    pub fn win_rate(&self) -> f64 {
        if self.hands_played == 0 {
            0.0
        } else {
            f64::from(self.hands_won) / f64::from(self.hands_played)
        }
    }

    pub fn optimal_rate(&self) -> f64 {
        if self.total_decisions == 0 {
            0.0
        } else {
            f64::from(self.optimal_decisions) / f64::from(self.total_decisions)
        }
    }

    pub fn chips_delta(&self) -> i64 {
        self.current_chips - self.starting_chips
    }

    /// Starting hands by net result, best first: `(notation, net, times)`.
    /// Ties keep notation order.
    pub fn best_hands(&self, count: usize) -> Vec<(String, i64, u32)> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows.truncate(count);
        rows
    }

    pub fn worst_hands(&self, count: usize) -> Vec<(String, i64, u32)> {
        let mut rows = self.rows();
        rows.sort_by(|a, b| a.1.cmp(&b.1));
        rows.truncate(count);
        rows
    }

    fn rows(&self) -> Vec<(String, i64, u32)> {
        self.by_hand
            .iter()
            .map(|(n, &(net, times))| (n.clone(), net, times))
            .collect()
    }

    /// Improvement hints derived from the whole session.
    pub fn suggestions(&self) -> Vec<String> {
        let mut out = Vec::new();
        let rate = self.optimal_rate();
        if rate < 0.6 {
            out.push("Study the starting-hand chart, too many decisions were off".to_string());
        }
        if rate >= 0.8 {
            out.push("Great play! Keep it up".to_string());
        }
        // offsuit hands without an ace or king
        let trash_losses: i64 = self
            .by_hand
            .iter()
            .filter(|(n, _)| n.contains('o') && !n.starts_with('A') && !n.starts_with('K'))
            .map(|(_, &(net, _))| net)
            .filter(|&net| net < 0)
            .sum();
        if trash_losses < -100 {
            out.push("Fold trash hands earlier, they are costing you chips".to_string());
        }
        if out.is_empty() {
            out.push("Keep playing to collect more statistics".to_string());
        }
        out
    }

    /// Short tips shown after each hand.
    pub fn end_of_hand_tips(&self, last: &DecisionReport) -> Vec<String> {
        let mut tips = Vec::new();
        if self.optimal_rate() < 0.5 && self.total_decisions > 5 {
            tips.push("Many decisions were off. Ask for a hint before acting.".to_string());
        }
        if !last.optimal {
            tips.push(format!("This hand the better play was: {}", last.advice));
        }
        tips
    }

    pub fn summary(&self) -> String {
        let mut s = String::from("\n=== Session summary ===\n\n");
        let _ = writeln!(s, "Hands played: {}", self.hands_played);
        let _ = writeln!(
            s,
            "Hands won: {} ({:.1}%)",
            self.hands_won,
            self.win_rate() * 100.0
        );
        let _ = writeln!(s, "Chips: {} ({:+})", self.current_chips, self.chips_delta());
        let _ = writeln!(s, "Optimal decisions: {:.1}%", self.optimal_rate() * 100.0);

        s.push_str("\n--- Best hands ---\n");
        write_rows(&mut s, &self.best_hands(3));
        s.push_str("\n--- Worst hands ---\n");
        write_rows(&mut s, &self.worst_hands(3));
        s.push_str("\n--- Suggestions ---\n");
        for tip in self.suggestions() {
            let _ = writeln!(s, "  * {tip}");
        }
        s
    }
}

fn write_rows(s: &mut String, rows: &[(String, i64, u32)]) {
    if rows.is_empty() {
        s.push_str("  (no data yet)\n");
    }
    for (notation, net, times) in rows {
        let _ = writeln!(s, "  {notation}: {net:+} ({times}x)");
    }
}
