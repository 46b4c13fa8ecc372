//! Adapters layer - Concrete solver implementations.

mod closed_form;

pub use closed_form::ClosedFormSolver;
