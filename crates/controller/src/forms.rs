//! Operator-entered form state and its conversion to wire requests.
//!
//! Free-text fields stay strings until submit; parsing failures
//! surface through the same status banner a backend rejection uses.
//! On a rejected submission the form is left populated for correction.

use chrono::NaiveDate;
use shared::domain::{DonorId, OrgId, RoleId, ScreeningId, StaffId, UnitId};
use shared::protocol::{
    NewDonation, NewDonor, NewOrganization, NewStaff, StatusChange, VitalsReport,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{0} must be a date in YYYY-MM-DD form")]
    BadDate(&'static str),
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonorForm {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub blood_group: String,
    pub phone_number: String,
    pub email: String,
}

impl DonorForm {
    pub fn parse(&self) -> Result<NewDonor, FormError> {
        let date_of_birth = NaiveDate::parse_from_str(self.date_of_birth.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::BadDate("date of birth"))?;
        Ok(NewDonor {
            first_name: required("first name", &self.first_name)?,
            last_name: required("last name", &self.last_name)?,
            date_of_birth,
            gender: required("gender", &self.gender)?,
            blood_group: required("blood group", &self.blood_group)?,
            phone_number: required("phone number", &self.phone_number)?,
            email: optional(&self.email),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationForm {
    pub name: String,
    pub org_type: String,
    pub contact_person: String,
    pub contact_phone: String,
    pub contact_email: String,
}

impl OrganizationForm {
    pub fn parse(&self) -> Result<NewOrganization, FormError> {
        Ok(NewOrganization {
            name: required("name", &self.name)?,
            org_type: required("organization type", &self.org_type)?,
            contact_person: required("contact person", &self.contact_person)?,
            contact_phone: required("contact phone", &self.contact_phone)?,
            // Blank email goes over the wire as null.
            contact_email: optional(&self.contact_email),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VitalsForm {
    pub staff_id: Option<StaffId>,
    pub hemoglobin: String,
    pub bp_systolic: String,
    pub bp_diastolic: String,
    pub weight_kg: String,
    pub notes: String,
}

impl VitalsForm {
    /// The donor id comes from the screening selection, not the form.
    pub fn parse(&self, donor_id: DonorId) -> Result<VitalsReport, FormError> {
        let staff_id = self.staff_id.ok_or(FormError::Missing("screening staff"))?;
        Ok(VitalsReport {
            donor_id,
            staff_id,
            hemoglobin: self
                .hemoglobin
                .trim()
                .parse()
                .map_err(|_| FormError::NotANumber("hemoglobin"))?,
            bp_systolic: self
                .bp_systolic
                .trim()
                .parse()
                .map_err(|_| FormError::NotANumber("systolic blood pressure"))?,
            bp_diastolic: self
                .bp_diastolic
                .trim()
                .parse()
                .map_err(|_| FormError::NotANumber("diastolic blood pressure"))?,
            weight_kg: self
                .weight_kg
                .trim()
                .parse()
                .map_err(|_| FormError::NotANumber("weight"))?,
            notes: self.notes.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionForm {
    pub donor_id: Option<DonorId>,
    pub screening_id: String,
    pub staff_id: Option<StaffId>,
    pub blood_group: String,
    /// Set by the screening handoff; while true the screening id and
    /// blood group fields reject edits.
    pub lineage_locked: bool,
}

impl CollectionForm {
    pub fn parse(&self) -> Result<NewDonation, FormError> {
        let donor_id = self.donor_id.ok_or(FormError::Missing("donor"))?;
        let staff_id = self.staff_id.ok_or(FormError::Missing("collection staff"))?;
        let screening_id: i64 = required("screening id", &self.screening_id)?
            .parse()
            .map_err(|_| FormError::NotANumber("screening id"))?;
        Ok(NewDonation {
            donor_id,
            screening_id: ScreeningId(screening_id),
            staff_id,
            blood_group: required("blood group", &self.blood_group)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryForm {
    pub unit_id: Option<UnitId>,
    pub new_status: String,
    pub issued_to: Option<OrgId>,
}

impl InventoryForm {
    pub fn parse(&self) -> Result<(UnitId, StatusChange), FormError> {
        let unit_id = self.unit_id.ok_or(FormError::Missing("unit"))?;
        let status = required("new status", &self.new_status)?;
        Ok((
            unit_id,
            StatusChange {
                status,
                org_id: self.issued_to,
            },
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaffForm {
    pub first_name: String,
    pub last_name: String,
    pub employee_number: String,
    pub role_id: Option<RoleId>,
}

impl StaffForm {
    pub fn parse(&self) -> Result<NewStaff, FormError> {
        Ok(NewStaff {
            first_name: required("first name", &self.first_name)?,
            last_name: required("last name", &self.last_name)?,
            employee_number: required("employee number", &self.employee_number)?,
            role_id: self.role_id.ok_or(FormError::Missing("role"))?,
        })
    }
}

/// All per-view forms, owned by the controller.
#[derive(Debug, Clone, Default)]
pub struct Forms {
    pub donor: DonorForm,
    pub organization: OrganizationForm,
    pub vitals: VitalsForm,
    pub collection: CollectionForm,
    pub inventory: InventoryForm,
    pub staff: StaffForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donor_form_parses_date_and_trims_blank_email() {
        let form = DonorForm {
            first_name: "Maya".into(),
            last_name: "Okafor".into(),
            date_of_birth: "1990-05-17".into(),
            gender: "F".into(),
            blood_group: "A+".into(),
            phone_number: "555-0142".into(),
            email: "   ".into(),
        };
        let donor = form.parse().expect("parse");
        assert_eq!(donor.date_of_birth.to_string(), "1990-05-17");
        assert_eq!(donor.email, None);
    }

    #[test]
    fn donor_form_rejects_malformed_date() {
        let form = DonorForm {
            first_name: "Maya".into(),
            last_name: "Okafor".into(),
            date_of_birth: "17/05/1990".into(),
            gender: "F".into(),
            blood_group: "A+".into(),
            phone_number: "555-0142".into(),
            email: String::new(),
        };
        assert!(matches!(
            form.parse(),
            Err(FormError::BadDate("date of birth"))
        ));
    }

    #[test]
    fn vitals_form_requires_numeric_measurements() {
        let form = VitalsForm {
            staff_id: Some(StaffId(1)),
            hemoglobin: "13.2".into(),
            bp_systolic: "120".into(),
            bp_diastolic: "eighty".into(),
            weight_kg: "70".into(),
            notes: String::new(),
        };
        assert!(matches!(
            form.parse(DonorId(3)),
            Err(FormError::NotANumber("diastolic blood pressure"))
        ));
    }

    #[test]
    fn collection_form_requires_full_lineage() {
        let form = CollectionForm {
            donor_id: Some(DonorId(3)),
            screening_id: String::new(),
            staff_id: Some(StaffId(1)),
            blood_group: "O+".into(),
            lineage_locked: false,
        };
        assert!(matches!(
            form.parse(),
            Err(FormError::Missing("screening id"))
        ));
    }
}
