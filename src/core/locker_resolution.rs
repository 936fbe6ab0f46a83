use crate::core::{
    CatalogRepository, InputProvider, LockerPass, LockerResolution, OutputPresenter, Pass, Result,
};

/// First locker in catalog order with the same type and duration as `pass`.
pub fn find_matching_locker<'a>(locker_passes: &'a [LockerPass], pass: &Pass) -> Option<&'a LockerPass> {
    locker_passes.iter().find(|locker_pass| locker_pass.matches(pass))
}

/// Decides whether a locker add-on is offered for `pass` and asks for it.
///
/// Fixed passes never reach the catalog or the customer.
pub async fn resolve_locker<C, I, O>(
    pass: &Pass,
    catalog: &C,
    input: &mut I,
    output: &mut O,
) -> Result<LockerResolution>
where
    C: CatalogRepository + ?Sized,
    I: InputProvider + ?Sized,
    O: OutputPresenter + ?Sized,
{
    if !pass.pass_type.supports_locker() {
        tracing::debug!("Locker not offered for {:?} passes", pass.pass_type);
        return Ok(LockerResolution::NotOffered);
    }

    let locker_passes = catalog.read_locker_passes().await?;
    let Some(locker_pass) = find_matching_locker(&locker_passes, pass).cloned() else {
        tracing::debug!("No locker matches {}", pass);
        return Ok(LockerResolution::NoMatch);
    };

    output.prompt_locker_offer(&locker_pass).await?;
    let resolution = if input.get_locker_confirmation().await? {
        LockerResolution::Confirmed(locker_pass)
    } else {
        LockerResolution::Declined(locker_pass)
    };
    tracing::debug!("Locker resolution: {:?}", resolution);

    Ok(resolution)
}
