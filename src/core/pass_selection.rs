use crate::core::{CatalogRepository, InputProvider, OutputPresenter, Pass, PassType, Result};

/// Keeps the passes of `pass_type` in catalog order.
pub fn filter_passes_by_type(passes: &[Pass], pass_type: PassType) -> Vec<Pass> {
    passes
        .iter()
        .filter(|pass| pass.is_same_type(pass_type))
        .cloned()
        .collect()
}

/// Asks for a pass type, narrows the catalog and lets the customer pick.
///
/// An empty candidate list is still handed to the input provider; rejecting
/// it is the selection call's job.
pub async fn select_pass<C, I, O>(catalog: &C, input: &mut I, output: &mut O) -> Result<Pass>
where
    C: CatalogRepository + ?Sized,
    I: InputProvider + ?Sized,
    O: OutputPresenter + ?Sized,
{
    output.prompt_pass_type_selection().await?;
    let pass_type = input.get_pass_type().await?;
    tracing::debug!("Pass type selected: {:?}", pass_type);

    let passes = catalog.read_passes().await?;
    let candidates = filter_passes_by_type(&passes, pass_type);
    tracing::debug!(
        "{} of {} catalog passes match {:?}",
        candidates.len(),
        passes.len(),
        pass_type
    );

    output.show_pass_list(&candidates).await?;
    input.get_pass_selection(&candidates).await
}
