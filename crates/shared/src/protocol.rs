use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    DonationId, DonorId, OrgId, RequestId, RoleId, ScreeningId, StaffId, TaskId, UnitId,
};

/// Generic acknowledgement for mutations whose only payload is a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

// --- donors ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDonor {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub blood_group: String,
    pub phone_number: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub message: String,
    pub donor_id: DonorId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorMatch {
    pub donor_id: DonorId,
    pub first_name: String,
    pub last_name: String,
    pub blood_type: String,
}

// --- organizations ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrganization {
    pub name: String,
    pub org_type: String,
    pub contact_person: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgReceipt {
    pub message: String,
    pub org_id: OrgId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgSummary {
    pub org_id: OrgId,
    pub name: String,
    pub org_type: String,
}

// --- staff, roles, tasks ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffSummary {
    pub staff_id: StaffId,
    pub first_name: String,
    pub last_name: String,
    pub employee_number: String,
    pub role_id: RoleId,
    pub role_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSummary {
    pub role_id: RoleId,
    pub role_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSummary {
    pub task_id: TaskId,
    pub task_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStaff {
    pub first_name: String,
    pub last_name: String,
    pub employee_number: String,
    pub role_id: RoleId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffReceipt {
    pub message: String,
    pub staff_id: StaffId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleChange {
    pub role_id: RoleId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskAssignment {
    pub task_id: TaskId,
}

// --- screening and collection ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalsReport {
    pub donor_id: DonorId,
    pub staff_id: StaffId,
    pub hemoglobin: f64,
    pub bp_systolic: i32,
    pub bp_diastolic: i32,
    pub weight_kg: f64,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub message: String,
    pub notes: String,
    pub is_eligible: bool,
    pub screening_id: ScreeningId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDonation {
    pub donor_id: DonorId,
    pub screening_id: ScreeningId,
    pub staff_id: StaffId,
    pub blood_group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationReceipt {
    pub message: String,
    pub donation_id: DonationId,
    pub unit_id: UnitId,
}

// --- inventory and reporting ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSummary {
    pub unit_id: UnitId,
    pub blood_type: String,
    /// Backend-owned status vocabulary (`In Stock`, `Issued`, ...).
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: String,
    /// Receiving organization, recorded by the backend only when the
    /// new status is `Issued`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<OrgId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub blood_type: String,
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorDetails {
    pub donor_id: DonorId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub blood_type: String,
    pub gender: String,
    pub phone_number: String,
    pub email: Option<String>,
}

/// One screening (optionally carrying its donation and unit) from a
/// donor's history. Dates arrive pre-formatted by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorHistoryEntry {
    pub screening_id: ScreeningId,
    pub screening_date: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub donation_id: Option<DonationId>,
    #[serde(default)]
    pub donation_date: Option<String>,
    #[serde(default)]
    pub unit_id: Option<UnitId>,
    #[serde(default)]
    pub unit_status: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub issued_to_org: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorReport {
    pub donor_details: DonorDetails,
    pub history: Vec<DonorHistoryEntry>,
}

// --- blood requests ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBloodRequest {
    pub org_id: OrgId,
    pub patient_name: Option<String>,
    pub blood_group: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodRequestReceipt {
    pub message: String,
    pub request_id: RequestId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodRequestSummary {
    pub request_id: RequestId,
    pub status: String,
    pub quantity: i64,
    pub request_date: String,
    pub org_name: String,
    pub blood_type: String,
}
