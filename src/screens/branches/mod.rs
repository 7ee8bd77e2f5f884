//! Branches of a repository. Selecting a branch hands it back to the
//! previous screen.

mod cell;
mod view_model;

pub use cell::BranchCellViewModel;
pub use view_model::{BranchesInput, BranchesOutput, BranchesViewModel};
