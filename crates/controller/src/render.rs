//! View-model construction. Pure functions from wire data to what the
//! UI paints; no I/O and no controller state in here.

use std::collections::HashSet;

use shared::protocol::{
    DonorMatch, OrgSummary, ReportRow, RoleSummary, StaffSummary, TaskSummary, UnitSummary,
};

/// One row of a donor search result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorCard {
    pub donor_id: shared::domain::DonorId,
    pub name: String,
    pub blood_type: String,
    /// Zero-padded display form, e.g. `D0042`.
    pub display_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResults {
    /// Nothing searched yet, or the list was deliberately cleared.
    Idle,
    NoneFound,
    FetchFailed,
    Matches(Vec<DonorCard>),
}

pub fn donor_cards(matches: &[DonorMatch]) -> SearchResults {
    if matches.is_empty() {
        return SearchResults::NoneFound;
    }
    SearchResults::Matches(
        matches
            .iter()
            .map(|m| DonorCard {
                donor_id: m.donor_id,
                name: format!("{} {}", m.first_name, m.last_name),
                blood_type: m.blood_type.clone(),
                display_id: m.donor_id.to_string(),
            })
            .collect(),
    )
}

/// One entry of a dropdown selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: i64,
    pub label: String,
}

/// Staff dropdown entries, optionally restricted to one role.
pub fn staff_options(staff: &[StaffSummary], role_filter: Option<&str>) -> Vec<SelectOption> {
    staff
        .iter()
        .filter(|s| role_filter.map_or(true, |role| s.role_name == role))
        .map(|s| SelectOption {
            value: s.staff_id.0,
            label: format!(
                "{} {} ({} - {})",
                s.first_name, s.last_name, s.staff_id, s.role_name
            ),
        })
        .collect()
}

pub fn role_options(roles: &[RoleSummary]) -> Vec<SelectOption> {
    roles
        .iter()
        .map(|r| SelectOption {
            value: r.role_id.0,
            label: r.role_name.clone(),
        })
        .collect()
}

pub fn org_options(orgs: &[OrgSummary]) -> Vec<SelectOption> {
    orgs.iter()
        .map(|o| SelectOption {
            value: o.org_id.0,
            label: format!("{} ({})", o.name, o.org_type),
        })
        .collect()
}

pub fn unit_options(units: &[UnitSummary]) -> Vec<SelectOption> {
    units
        .iter()
        .map(|u| SelectOption {
            value: u.unit_id.0,
            label: format!("{} ({}) - {}", u.unit_id, u.blood_type, u.status),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub task_id: shared::domain::TaskId,
    pub task_name: String,
}

/// A staff member's task panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskLists {
    /// The task fetch failed; neither column can be trusted.
    Unavailable,
    Partitioned {
        assigned: Vec<TaskItem>,
        available: Vec<TaskItem>,
    },
}

/// Splits the full task catalogue into assigned and available columns,
/// preserving catalogue order in both.
pub fn partition_tasks(all: &[TaskSummary], assigned: &[TaskSummary]) -> TaskLists {
    let assigned_ids: HashSet<_> = assigned.iter().map(|t| t.task_id).collect();
    let mut assigned_items = Vec::new();
    let mut available_items = Vec::new();
    for task in all {
        let item = TaskItem {
            task_id: task.task_id,
            task_name: task.task_name.clone(),
        };
        if assigned_ids.contains(&task.task_id) {
            assigned_items.push(item);
        } else {
            available_items.push(item);
        }
    }
    TaskLists::Partitioned {
        assigned: assigned_items,
        available: available_items,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTable {
    Empty,
    FetchFailed,
    Rows(Vec<ReportRowView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRowView {
    pub blood_type: String,
    pub status: String,
    pub count: i64,
}

pub fn report_table(rows: &[ReportRow]) -> ReportTable {
    if rows.is_empty() {
        return ReportTable::Empty;
    }
    ReportTable::Rows(
        rows.iter()
            .map(|r| ReportRowView {
                blood_type: r.blood_type.clone(),
                status: r.status.clone(),
                count: r.count,
            })
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffCard {
    pub staff_id: shared::domain::StaffId,
    pub name: String,
    pub employee_number: String,
    pub role_name: String,
    pub display_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaffList {
    LoadFailed,
    Empty,
    Cards(Vec<StaffCard>),
}

pub fn staff_list(staff: &[StaffSummary]) -> StaffList {
    if staff.is_empty() {
        return StaffList::Empty;
    }
    StaffList::Cards(
        staff
            .iter()
            .map(|s| StaffCard {
                staff_id: s.staff_id,
                name: format!("{} {}", s.first_name, s.last_name),
                employee_number: s.employee_number.clone(),
                role_name: s.role_name.clone(),
                display_id: s.staff_id.to_string(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::{RoleId, StaffId, TaskId, UnitId};

    fn task(id: i64, name: &str) -> TaskSummary {
        TaskSummary {
            task_id: TaskId(id),
            task_name: name.to_string(),
        }
    }

    #[test]
    fn partition_keeps_catalogue_order_in_both_columns() {
        let all = vec![
            task(1, "Screen donors"),
            task(2, "Inventory check"),
            task(3, "Issue units"),
            task(4, "File reports"),
        ];
        let assigned = vec![task(3, "Issue units"), task(1, "Screen donors")];

        let TaskLists::Partitioned { assigned, available } = partition_tasks(&all, &assigned)
        else {
            panic!("expected partitioned lists");
        };
        let assigned_ids: Vec<i64> = assigned.iter().map(|t| t.task_id.0).collect();
        let available_ids: Vec<i64> = available.iter().map(|t| t.task_id.0).collect();
        assert_eq!(assigned_ids, vec![1, 3]);
        assert_eq!(available_ids, vec![2, 4]);
    }

    #[test]
    fn empty_matches_render_as_none_found() {
        assert_eq!(donor_cards(&[]), SearchResults::NoneFound);
    }

    #[test]
    fn staff_options_filter_by_role_name() {
        let staff = vec![
            StaffSummary {
                staff_id: StaffId(1),
                first_name: "Jo".into(),
                last_name: "Reyes".into(),
                employee_number: "EMP001".into(),
                role_id: RoleId(2),
                role_name: "Phlebotomist".into(),
            },
            StaffSummary {
                staff_id: StaffId(2),
                first_name: "Sam".into(),
                last_name: "Park".into(),
                employee_number: "EMP002".into(),
                role_id: RoleId(3),
                role_name: "Lab Technician".into(),
            },
        ];

        let all = staff_options(&staff, None);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].label, "Jo Reyes (S0001 - Phlebotomist)");

        let phlebotomists = staff_options(&staff, Some("Phlebotomist"));
        assert_eq!(phlebotomists.len(), 1);
        assert_eq!(phlebotomists[0].value, 1);
    }

    #[test]
    fn unit_options_carry_display_id_and_status() {
        let units = vec![UnitSummary {
            unit_id: UnitId(12),
            blood_type: "A+".into(),
            status: "In Stock".into(),
        }];
        let options = unit_options(&units);
        assert_eq!(options[0].label, "U0012 (A+) - In Stock");
    }

    #[test]
    fn empty_report_renders_placeholder() {
        assert_eq!(report_table(&[]), ReportTable::Empty);
    }
}
