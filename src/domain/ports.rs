use crate::domain::model::{LockerPass, Pass, PassType};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only source of the offers. Every call reads fresh.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn read_passes(&self) -> Result<Vec<Pass>>;
    async fn read_locker_passes(&self) -> Result<Vec<LockerPass>>;
}

#[async_trait]
pub trait InputProvider: Send {
    /// Fails with an application error when the token is not a known pass type.
    async fn get_pass_type(&mut self) -> Result<PassType>;

    /// Fails with an application error when the choice is outside `candidates`.
    async fn get_pass_selection(&mut self, candidates: &[Pass]) -> Result<Pass>;

    async fn get_locker_confirmation(&mut self) -> Result<bool>;
}

#[async_trait]
pub trait OutputPresenter: Send {
    async fn show_welcome(&mut self) -> Result<()>;
    async fn show_announcement(&mut self) -> Result<()>;
    async fn prompt_pass_type_selection(&mut self) -> Result<()>;
    async fn show_pass_list(&mut self, candidates: &[Pass]) -> Result<()>;
    async fn prompt_locker_offer(&mut self, locker_pass: &LockerPass) -> Result<()>;
    async fn show_order_summary(
        &mut self,
        pass: &Pass,
        locker_pass: Option<&LockerPass>,
    ) -> Result<()>;
    async fn show_message(&mut self, message: &str) -> Result<()>;
}
