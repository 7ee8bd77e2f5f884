//! Users list screen: followers, following, watchers, stargazers and
//! contributors share one screen, selected by [`UsersMode`].

mod cell;
mod mode;
mod view_model;

pub use cell::{k_formatted, UserCellViewModel};
pub use mode::{UsersMode, UsersQuery};
pub use view_model::{UsersInput, UsersOutput, UsersViewModel};
