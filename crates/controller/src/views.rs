//! View identifiers and per-view activation rules.

/// One navigable view of the application. Exactly one is active at a
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    DonorRegistration,
    DonorSearch,
    Organizations,
    Screening,
    Collection,
    Inventory,
    Reports,
    Staff,
}

impl ViewId {
    pub const ALL: [ViewId; 8] = [
        ViewId::DonorRegistration,
        ViewId::DonorSearch,
        ViewId::Organizations,
        ViewId::Screening,
        ViewId::Collection,
        ViewId::Inventory,
        ViewId::Reports,
        ViewId::Staff,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::DonorRegistration => "donor-registration",
            ViewId::DonorSearch => "donor-search",
            ViewId::Organizations => "organizations",
            ViewId::Screening => "screening",
            ViewId::Collection => "collection",
            ViewId::Inventory => "inventory",
            ViewId::Reports => "reports",
            ViewId::Staff => "staff",
        }
    }

    /// Lookup by name; unknown names yield `None` and navigation is a
    /// no-op for the caller.
    pub fn from_name(name: &str) -> Option<ViewId> {
        ViewId::ALL.iter().copied().find(|v| v.as_str() == name)
    }

    /// Views whose forms need the staff/roles/tasks reference data and
    /// the inventory options refreshed on entry.
    pub(crate) fn needs_reference_data(self) -> bool {
        matches!(
            self,
            ViewId::Screening | ViewId::Collection | ViewId::Inventory
        )
    }

    /// The screening sub-form survives only while one of the workflow
    /// views is active.
    pub(crate) fn keeps_screening_state(self) -> bool {
        matches!(self, ViewId::Screening | ViewId::Collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_names_round_trip() {
        for view in ViewId::ALL {
            assert_eq!(ViewId::from_name(view.as_str()), Some(view));
        }
    }

    #[test]
    fn unknown_view_name_is_none() {
        assert_eq!(ViewId::from_name("exchange-hub"), None);
        assert_eq!(ViewId::from_name(""), None);
    }
}
