//! Events the controller emits toward whatever paints the UI.

use shared::domain::{DonorId, ScreeningId, StaffId};

use crate::render::{ReportTable, SearchResults, SelectOption, StaffList, TaskLists};
use crate::views::ViewId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient banner communicating the outcome of the last user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub text: String,
    pub severity: Severity,
}

/// Which donor-search UI a result set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchContext {
    General,
    Screening,
}

/// Immutable payload carried across the screening→collection handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionHandoff {
    pub donor_id: DonorId,
    pub screening_id: ScreeningId,
    pub blood_group: String,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    ViewChanged(ViewId),
    StatusShown(StatusBanner),
    StatusCleared,
    SearchResultsUpdated {
        context: SearchContext,
        results: SearchResults,
    },
    /// A donor was picked from the screening search; the vitals
    /// sub-form is now visible for them.
    VitalsFormRevealed {
        donor_id: DonorId,
        donor_name: String,
        blood_type: String,
    },
    /// The delayed handoff fired: the collection view is active with
    /// the screening lineage pre-filled and locked.
    CollectionPrefilled(CollectionHandoff),
    InventoryOptionsUpdated(Vec<SelectOption>),
    ReportUpdated(ReportTable),
    ReferenceDataUpdated,
    StaffListUpdated(StaffList),
    StaffDetailUpdated {
        staff_id: StaffId,
        tasks: TaskLists,
    },
}
