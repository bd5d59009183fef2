//! Query handlers for the Session & Progress context.
//!
//! This module contains query handlers that build a sequence from a loaded
//! catalog and return read-only view DTOs. They never touch stored progress.

use std::sync::Arc;

use partyplay_catalog::application::loader::CatalogLoader;
use partyplay_catalog::domain::locale::Locale;
use partyplay_catalog::domain::party::PartySlug;
use partyplay_core::error::DomainError;
use serde::Serialize;

use crate::domain::crew::Crew;
use crate::domain::progress_key::ProgressKey;
use crate::domain::sequence::{Sequence, SequencePolicy};

/// One entry of a sequence preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceEntry {
    /// 0-based position in the sequence.
    pub position: usize,
    pub activity_id: String,
    pub title: String,
    pub phase_id: String,
    pub phase_name: String,
    pub character: String,
}

/// Read-only view of the order a crew plays a party in.
#[derive(Debug, Clone, Serialize)]
pub struct SequencePreview {
    pub party: PartySlug,
    pub locale: Locale,
    /// The resolved crew, `None` for single-crew play.
    pub crew: Option<Crew>,
    /// Storage key the crew's progress lives under.
    pub progress_key: String,
    pub total: usize,
    pub entries: Vec<SequenceEntry>,
}

/// Describes an already-built sequence.
#[must_use]
pub fn sequence_preview(
    party: &PartySlug,
    locale: Locale,
    policy: SequencePolicy,
    sequence: &Sequence,
) -> SequencePreview {
    let entries = sequence
        .iter()
        .map(|step| SequenceEntry {
            position: step.position,
            activity_id: step.activity.id.clone(),
            title: step.activity.title.clone(),
            phase_id: step.phase.id.clone(),
            phase_name: step.phase.name.clone(),
            character: step.activity.character.name.clone(),
        })
        .collect();

    SequencePreview {
        party: party.clone(),
        locale,
        crew: policy.crew(),
        progress_key: ProgressKey::new(party.clone(), policy.crew()).storage_key(),
        total: sequence.len(),
        entries,
    }
}

/// Retrieves the play order of a party.
///
/// No selector means single-crew play; an unrecognised selector resolves to
/// the default crew.
///
/// # Errors
///
/// Propagates the loader's `DomainError`.
pub async fn get_sequence_preview(
    party: &PartySlug,
    locale: Locale,
    crew_selector: Option<&str>,
    loader: &dyn CatalogLoader,
) -> Result<SequencePreview, DomainError> {
    let catalog = loader.load(party, locale).await?;
    let policy = match crew_selector {
        Some(selector) => SequencePolicy::CrewRotation(Crew::resolve(Some(selector))),
        None => SequencePolicy::SingleCrew,
    };
    let sequence = Sequence::build(Arc::new(catalog), policy);
    Ok(sequence_preview(party, locale, policy, &sequence))
}
