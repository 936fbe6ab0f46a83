use crate::core::locker_resolution::resolve_locker;
use crate::core::pass_selection::select_pass;
use crate::core::{CatalogRepository, InputProvider, OrderOutcome, OutputPresenter, Result};
use crate::utils::error::ErrorCategory;

/// Drives one ordering run and is the only place failures are recovered.
pub struct PassMachine<C, I, O>
where
    C: CatalogRepository,
    I: InputProvider,
    O: OutputPresenter,
{
    catalog: C,
    input: I,
    output: O,
}

impl<C, I, O> PassMachine<C, I, O>
where
    C: CatalogRepository,
    I: InputProvider,
    O: OutputPresenter,
{
    pub fn new(catalog: C, input: I, output: O) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Runs the whole flow. Never fails: an error ends the run after a
    /// single message.
    pub async fn run(&mut self) {
        let err = match self.place_order().await {
            Ok(outcome) => {
                tracing::info!(
                    "Order completed: {} (locker: {:?}, total {} won)",
                    outcome.pass,
                    outcome.locker_pass,
                    outcome.total_price()
                );
                return;
            }
            Err(err) => err,
        };

        match err.category() {
            ErrorCategory::Application => tracing::warn!("Order rejected: {}", err),
            ErrorCategory::Unrecognized => {
                tracing::error!("Order failed: {} ({})", err, err.recovery_suggestion())
            }
        }

        if let Err(display_err) = self.output.show_message(err.user_friendly_message()).await {
            tracing::error!("Could not display error message: {}", display_err);
        }
    }

    /// The flow without recovery: welcome, pass, locker, summary.
    pub async fn place_order(&mut self) -> Result<OrderOutcome> {
        self.output.show_welcome().await?;
        self.output.show_announcement().await?;

        let pass = select_pass(&self.catalog, &mut self.input, &mut self.output).await?;
        let locker_pass = resolve_locker(&pass, &self.catalog, &mut self.input, &mut self.output)
            .await?
            .into_locker_pass();

        self.output
            .show_order_summary(&pass, locker_pass.as_ref())
            .await?;

        Ok(OrderOutcome { pass, locker_pass })
    }

    pub fn into_parts(self) -> (C, I, O) {
        (self.catalog, self.input, self.output)
    }
}
