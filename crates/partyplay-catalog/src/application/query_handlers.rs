//! Query handlers for the Party Catalog context.
//!
//! This module contains query handlers that load a catalog and return
//! read-only view DTOs for the overview, materials and guest pages.

use partyplay_core::error::DomainError;
use serde::Serialize;

use crate::application::loader::CatalogLoader;
use crate::domain::catalog::{CrewConfig, Guest, PartyCatalog};
use crate::domain::locale::Locale;
use crate::domain::party::PartySlug;

/// Summary of one phase for the party overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub island_name: String,
    pub order: u32,
    pub activity_count: usize,
}

/// Read-only view of a party for its landing page.
#[derive(Debug, Clone, Serialize)]
pub struct PartyOverview {
    /// The party identifier.
    pub party: PartySlug,
    /// The locale the catalog was loaded in.
    pub locale: Locale,
    /// Native name of `locale`, for a language switcher.
    pub locale_name: &'static str,
    pub title: String,
    pub subtitle: String,
    pub theme: String,
    pub age_range: String,
    pub estimated_duration: String,
    /// Actual number of activities across phases.
    pub total_activities: usize,
    pub phases: Vec<PhaseSummary>,
    pub crews: Option<CrewConfig>,
    /// Content revision of the loaded catalog.
    pub version_hash: String,
}

/// A material and the activities that need it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialUsage {
    pub material: String,
    /// Titles of the activities using the material, in catalog order.
    pub activities: Vec<String>,
}

/// Read-only view of the materials checklist.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialsView {
    pub printables: Vec<String>,
    pub materials: Vec<MaterialUsage>,
}

/// Read-only view of the guest list.
#[derive(Debug, Clone, Serialize)]
pub struct GuestListView {
    pub total_adults: u32,
    pub total_children: u32,
    pub guests: Vec<Guest>,
}

/// Builds the overview of an already-loaded catalog.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the version hash cannot be
/// computed.
pub fn party_overview(
    party: &PartySlug,
    locale: Locale,
    catalog: &PartyCatalog,
) -> Result<PartyOverview, DomainError> {
    let mut phases: Vec<PhaseSummary> = catalog
        .phases
        .iter()
        .map(|phase| PhaseSummary {
            id: phase.id.clone(),
            name: phase.name.clone(),
            icon: phase.icon.clone(),
            color: phase.color.clone(),
            island_name: phase.island_name.clone(),
            order: phase.order,
            activity_count: phase.activities.len(),
        })
        .collect();
    phases.sort_by_key(|phase| phase.order);

    Ok(PartyOverview {
        party: party.clone(),
        locale,
        locale_name: locale.display_name(),
        title: catalog.meta.title.clone(),
        subtitle: catalog.meta.subtitle.clone(),
        theme: catalog.meta.theme.clone(),
        age_range: catalog.meta.age_range.clone(),
        estimated_duration: catalog.meta.estimated_duration.clone(),
        total_activities: catalog.activity_count(),
        phases,
        crews: catalog.crews.clone(),
        version_hash: catalog.version_hash()?,
    })
}

/// Collects every distinct material, in first-seen order, with the titles of
/// the activities that need it.
#[must_use]
pub fn collect_materials(catalog: &PartyCatalog) -> Vec<MaterialUsage> {
    let mut usages: Vec<MaterialUsage> = Vec::new();
    let activities = catalog.phases.iter().flat_map(|phase| &phase.activities);
    for activity in activities {
        for material in &activity.materials {
            match usages.iter_mut().find(|usage| &usage.material == material) {
                Some(usage) => usage.activities.push(activity.title.clone()),
                None => usages.push(MaterialUsage {
                    material: material.clone(),
                    activities: vec![activity.title.clone()],
                }),
            }
        }
    }
    usages
}

/// Retrieves the overview of a party.
///
/// # Errors
///
/// Propagates the loader's `DomainError` and any hashing failure.
pub async fn get_party_overview(
    party: &PartySlug,
    locale: Locale,
    loader: &dyn CatalogLoader,
) -> Result<PartyOverview, DomainError> {
    let catalog = loader.load(party, locale).await?;
    party_overview(party, locale, &catalog)
}

/// Retrieves the materials checklist of a party.
///
/// # Errors
///
/// Propagates the loader's `DomainError`.
pub async fn get_materials(
    party: &PartySlug,
    locale: Locale,
    loader: &dyn CatalogLoader,
) -> Result<MaterialsView, DomainError> {
    let catalog = loader.load(party, locale).await?;
    Ok(MaterialsView {
        printables: catalog.printables.needed.clone(),
        materials: collect_materials(&catalog),
    })
}

/// Retrieves the guest list of a party.
///
/// # Errors
///
/// Propagates the loader's `DomainError`.
pub async fn get_guest_list(
    party: &PartySlug,
    locale: Locale,
    loader: &dyn CatalogLoader,
) -> Result<GuestListView, DomainError> {
    let catalog = loader.load(party, locale).await?;
    let list = catalog.guest_list;
    Ok(GuestListView {
        total_adults: list.summary.total_adults,
        total_children: list.summary.total_children,
        guests: list.guests,
    })
}
