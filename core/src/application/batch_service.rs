//! Batch solving application service.

use tracing::{debug, trace};

use crate::adapters::ClosedFormSolver;
use crate::domain::{Answer, GridDimensions};
use crate::error::Result;
use crate::ports::DirectionSolver;
use crate::protocol::{self, ParseOptions, QueryBatch};

/// Application service that parses batches and resolves every case.
///
/// The solving strategy is injected through the `DirectionSolver` port, so
/// the same pipeline can run against the closed-form rule or a test oracle.
pub struct BatchService<S: DirectionSolver> {
    solver: S,
    options: ParseOptions,
}

impl<S: DirectionSolver> BatchService<S> {
    /// Create a service with default (lenient) parsing.
    pub fn new(solver: S) -> Self {
        Self::with_options(solver, ParseOptions::default())
    }

    /// Create a service with explicit parse options.
    pub fn with_options(solver: S, options: ParseOptions) -> Self {
        Self { solver, options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Resolve a single grid.
    pub fn answer(&self, grid: &GridDimensions) -> Answer {
        let direction = self.solver.solve(grid);
        trace!(%grid, %direction, "Solved case");
        Answer::new(grid.clone(), direction)
    }

    /// Resolve every grid of an already parsed batch, in order.
    pub fn answer_batch(&self, batch: &QueryBatch) -> Vec<Answer> {
        batch.iter().map(|grid| self.answer(grid)).collect()
    }

    /// Parse `input` and resolve every case. Any parse error rejects the
    /// whole batch.
    pub fn solve_answers(&self, input: &str) -> Result<Vec<Answer>> {
        let batch = protocol::parse_batch(input, self.options)?;
        let answers = self.answer_batch(&batch);
        debug!(cases = answers.len(), "Solved batch");
        Ok(answers)
    }

    /// Text-to-text batch transformation.
    pub fn solve_text(&self, input: &str) -> Result<String> {
        let answers = self.solve_answers(input)?;
        Ok(protocol::render_text(answers.iter().map(|a| a.direction)))
    }
}

impl Default for BatchService<ClosedFormSolver> {
    fn default() -> Self {
        Self::new(ClosedFormSolver::new())
    }
}

/// Solve a protocol batch with the closed-form rule and lenient parsing.
///
/// ```
/// let out = spiralsolve_core::solve_batch("4\n\n1 1\n\n2 2\n\n3 1\n\n3 3\n").unwrap();
/// assert_eq!(out, "R\nL\nD\nR");
/// ```
pub fn solve_batch(input: &str) -> Result<String> {
    BatchService::default().solve_text(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Direction;
    use crate::error::Error;
    use crate::testkit::SimulatedSolver;

    /// Mock solver that always answers the same heading.
    struct FixedSolver(Direction);

    impl DirectionSolver for FixedSolver {
        fn solve(&self, _grid: &GridDimensions) -> Direction {
            self.0
        }
    }

    #[test]
    fn test_solve_batch_sample() {
        let out = solve_batch("4\n\n1 1\n\n2 2\n\n3 1\n\n3 3\n").unwrap();
        assert_eq!(out, "R\nL\nD\nR");
    }

    #[test]
    fn test_solve_batch_empty() {
        assert_eq!(solve_batch("").unwrap(), "");
        assert_eq!(solve_batch("0\n").unwrap(), "");
    }

    #[test]
    fn test_solve_batch_short_input_fails() {
        assert!(matches!(
            solve_batch("2\n1 1\n"),
            Err(Error::MalformedCount { ref declared, .. }) if *declared == 2
        ));
    }

    #[test]
    fn test_solve_batch_oversized_dimensions() {
        assert_eq!(solve_batch("1\n99999999999999999999 3").unwrap(), "D");
        assert_eq!(
            solve_batch("2\n3 99999999999999999999\n100000000000000000000 100000000000000000000")
                .unwrap(),
            "R\nL"
        );
    }

    #[test]
    fn test_injected_solver_is_used() {
        let service = BatchService::new(FixedSolver(Direction::Up));
        assert_eq!(service.solve_text("3 1 1 2 2 3 3").unwrap(), "U\nU\nU");
    }

    #[test]
    fn test_answers_keep_input_order() {
        let service = BatchService::default();
        let answers = service.solve_answers("3\n7 4\n1 5\n5 1").unwrap();
        let got: Vec<_> = answers
            .iter()
            .map(|a| (a.grid.rows().to_i64(), a.grid.cols().to_i64(), a.direction))
            .collect();
        assert_eq!(
            got,
            vec![
                (Some(7), Some(4), Direction::Up),
                (Some(1), Some(5), Direction::Right),
                (Some(5), Some(1), Direction::Down),
            ]
        );
    }

    #[test]
    fn test_strict_service() {
        let service = BatchService::with_options(ClosedFormSolver::new(), ParseOptions::strict());
        assert!(service.options().strict);
        assert!(matches!(
            service.solve_text("1 1 1 9"),
            Err(Error::TrailingTokens { count: 1 })
        ));
        assert_eq!(BatchService::default().solve_text("1 1 1 9").unwrap(), "R");
    }

    #[test]
    fn test_simulated_solver_agrees_on_sample() {
        let input = "6 1 5 5 1 2 3 4 2 6 6 7 4";
        let simulated = BatchService::new(SimulatedSolver).solve_text(input).unwrap();
        assert_eq!(simulated, solve_batch(input).unwrap());
        assert_eq!(simulated, "R\nD\nL\nU\nL\nU");
    }
}
