//! In-memory collaborators for exercising the steps without a console.

use crate::domain::model::{LockerPass, Pass, PassType};
use crate::domain::ports::{CatalogRepository, InputProvider, OutputPresenter};
use crate::utils::error::{Result, StudyCafeError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn pass(pass_type: PassType, duration: u32, price: u64) -> Pass {
    Pass {
        pass_type,
        duration,
        price,
        discount_rate: 0.0,
    }
}

pub fn locker(pass_type: PassType, duration: u32, price: u64) -> LockerPass {
    LockerPass {
        pass_type,
        duration,
        price,
    }
}

#[derive(Default)]
pub struct StubCatalog {
    pub passes: Vec<Pass>,
    pub locker_passes: Vec<LockerPass>,
    pub fail_reads: bool,
    pub locker_reads: AtomicUsize,
}

impl StubCatalog {
    pub fn new(passes: Vec<Pass>, locker_passes: Vec<LockerPass>) -> Self {
        Self {
            passes,
            locker_passes,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    pub fn locker_read_count(&self) -> usize {
        self.locker_reads.load(Ordering::SeqCst)
    }

    fn fault(&self) -> StudyCafeError {
        StudyCafeError::Internal {
            message: "catalog store offline".to_string(),
        }
    }
}

#[async_trait]
impl CatalogRepository for StubCatalog {
    async fn read_passes(&self) -> Result<Vec<Pass>> {
        if self.fail_reads {
            return Err(self.fault());
        }
        Ok(self.passes.clone())
    }

    async fn read_locker_passes(&self) -> Result<Vec<LockerPass>> {
        self.locker_reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(self.fault());
        }
        Ok(self.locker_passes.clone())
    }
}

/// Replays scripted answers. Selections are zero-based indexes.
#[derive(Default)]
pub struct ScriptedInput {
    pub pass_type: Option<PassType>,
    pub selection: usize,
    pub confirmations: VecDeque<bool>,
    pub seen_candidates: Vec<Vec<Pass>>,
    pub confirmation_requests: usize,
}

impl ScriptedInput {
    pub fn new(pass_type: Option<PassType>, selection: usize, confirm: bool) -> Self {
        Self {
            pass_type,
            selection,
            confirmations: VecDeque::from([confirm]),
            ..Default::default()
        }
    }
}

#[async_trait]
impl InputProvider for ScriptedInput {
    async fn get_pass_type(&mut self) -> Result<PassType> {
        self.pass_type.ok_or_else(StudyCafeError::invalid_input)
    }

    async fn get_pass_selection(&mut self, candidates: &[Pass]) -> Result<Pass> {
        self.seen_candidates.push(candidates.to_vec());
        candidates
            .get(self.selection)
            .cloned()
            .ok_or_else(StudyCafeError::invalid_input)
    }

    async fn get_locker_confirmation(&mut self) -> Result<bool> {
        self.confirmation_requests += 1;
        Ok(self.confirmations.pop_front().unwrap_or(false))
    }
}

/// Records every presenter call as a line of text.
#[derive(Default)]
pub struct RecordingOutput {
    pub events: Vec<String>,
}

impl RecordingOutput {
    pub fn contains(&self, prefix: &str) -> bool {
        self.events.iter().any(|event| event.starts_with(prefix))
    }
}

#[async_trait]
impl OutputPresenter for RecordingOutput {
    async fn show_welcome(&mut self) -> Result<()> {
        self.events.push("welcome".to_string());
        Ok(())
    }

    async fn show_announcement(&mut self) -> Result<()> {
        self.events.push("announcement".to_string());
        Ok(())
    }

    async fn prompt_pass_type_selection(&mut self) -> Result<()> {
        self.events.push("prompt_pass_type".to_string());
        Ok(())
    }

    async fn show_pass_list(&mut self, candidates: &[Pass]) -> Result<()> {
        self.events.push(format!("pass_list:{}", candidates.len()));
        Ok(())
    }

    async fn prompt_locker_offer(&mut self, locker_pass: &LockerPass) -> Result<()> {
        self.events.push(format!("locker_offer:{}", locker_pass));
        Ok(())
    }

    async fn show_order_summary(
        &mut self,
        pass: &Pass,
        locker_pass: Option<&LockerPass>,
    ) -> Result<()> {
        let locker = locker_pass.map_or_else(|| "none".to_string(), |l| l.to_string());
        self.events.push(format!("summary:{}|{}", pass, locker));
        Ok(())
    }

    async fn show_message(&mut self, message: &str) -> Result<()> {
        self.events.push(format!("message:{}", message));
        Ok(())
    }
}
