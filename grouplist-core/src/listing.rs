//! Producing the full group listing.

use grouplist_state::gs;

use crate::{
    catalog::{Catalog, CatalogSnapshot},
    locale::LocaleManager,
    membership::tracks_containing,
    rank::rank,
    render::{RenderedLine, render},
};

/// The catalog could not be loaded from storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadError;
impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unable to load groups from storage")
    }
}
impl std::error::Error for LoadError {}

/// Refreshes the catalog, then renders one line per group in display order.
///
/// Nothing is ranked or rendered if the refresh fails.
pub async fn list_groups<S: gs::Storage>(
    catalog: &Catalog<S>,
    label: &str,
    locale: &LocaleManager,
) -> Result<Vec<RenderedLine>, LoadError> {
    if !catalog.refresh().await {
        return Err(LoadError);
    }
    Ok(list_snapshot(&catalog.snapshot(), label, locale))
}

/// Renders one line per group in `snapshot`, in display order.
pub fn list_snapshot(
    snapshot: &CatalogSnapshot,
    label: &str,
    locale: &LocaleManager,
) -> Vec<RenderedLine> {
    rank(snapshot.groups().cloned())
        .iter()
        .map(|group| {
            let tracks = tracks_containing(group, snapshot.tracks().map(|t| t.as_ref()));
            render(group, &tracks, label, locale)
        })
        .collect()
}
