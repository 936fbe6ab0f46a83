pub mod locker_resolution;
pub mod machine;
pub mod pass_selection;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{LockerPass, LockerResolution, OrderOutcome, Pass, PassType};
pub use crate::domain::ports::{CatalogRepository, InputProvider, OutputPresenter};
pub use crate::utils::error::Result;
