//! Concrete screens built on the presentation infrastructure.

pub mod branches;
pub mod home;
pub mod users;
