//! Help table: every computer move against every user move.

use super::{matrix_row, MoveSet, Outcome, OutcomeError};
use std::fmt;

const CORNER: &str = "v PC\\User >";

/// Win/Lose/Draw grid. Rows are the computer's move, columns the user's,
/// cells the result for the user.
#[derive(Clone, Debug)]
pub struct HelpTable<'a> {
    moves: &'a MoveSet,
    rows: Vec<Vec<Outcome>>,
}

impl<'a> HelpTable<'a> {
    pub fn new(moves: &'a MoveSet) -> Result<Self, OutcomeError> {
        let rows = (0..moves.len())
            .map(|row| matrix_row(moves, row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { moves, rows })
    }

    /// Outcome for the user when the computer plays `row` and the user `column`
    pub fn outcome(&self, row: usize, column: usize) -> Option<Outcome> {
        self.rows.get(row)?.get(column).copied()
    }

    /// Rendered lines, without line terminators
    pub fn lines(&self) -> Vec<String> {
        let n = self.moves.len();
        let divider = format!("+-------------{}", "+".repeat(n * 8));

        let header = std::iter::once(CORNER)
            .chain(self.moves.iter())
            .map(|cell| format!("{:<4}", cell))
            .collect::<Vec<_>>()
            .join(" | ");

        let mut lines = Vec::with_capacity(3 + 2 * n);
        lines.push(divider.clone());
        lines.push(format!("| {}|", header));
        lines.push(divider.clone());

        for (label, row) in self.moves.iter().zip(&self.rows) {
            let cells = row.iter().map(Outcome::cell).collect::<Vec<_>>().join(" | ");
            lines.push(format!(
                "| {:<11} | {:<width$} |",
                label,
                cells,
                width = n * 6 - 5
            ));
            lines.push(divider.clone());
        }

        lines
    }
}

impl fmt::Display for HelpTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_table_layout() {
        let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        let table = HelpTable::new(&moves).unwrap();
        let divider = "+-------------++++++++++++++++++++++++";

        assert_eq!(
            table.lines(),
            vec![
                divider,
                "| v PC\\User > | Rock | Paper | Scissors|",
                divider,
                "| Rock        | Draw | Win | Lose |",
                divider,
                "| Paper       | Lose | Draw | Win |",
                divider,
                "| Scissors    | Win | Lose | Draw |",
                divider,
            ]
        );
    }

    #[test]
    fn test_short_labels_are_padded() {
        let moves = MoveSet::new(["a", "b", "c"]).unwrap();
        let lines = HelpTable::new(&moves).unwrap().lines();

        assert_eq!(lines[1], "| v PC\\User > | a    | b    | c   |");
        assert_eq!(lines[3], "| a           | Draw | Win | Lose |");
    }

    #[test]
    fn test_diagonal_is_draw() {
        let moves = MoveSet::new(["1", "2", "3", "4", "5", "6", "7"]).unwrap();
        let table = HelpTable::new(&moves).unwrap();
        for i in 0..moves.len() {
            assert_eq!(table.outcome(i, i), Some(Outcome::Draw));
        }
        assert_eq!(table.lines().len(), 3 + 2 * 7);
    }

    #[test]
    fn test_display_matches_lines() {
        let moves = MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        let table = HelpTable::new(&moves).unwrap();
        let rendered = table.to_string();
        assert_eq!(rendered.lines().collect::<Vec<_>>(), table.lines());
    }
}
