//! HTTP access to the blood-bank backend API.
//!
//! Every endpoint goes through one uniform request path
//! ([`ApiClient::execute`]): JSON body when present, JSON response,
//! and a backend `error` field lifted into [`ApiError::Backend`] on
//! non-success statuses. Surfacing failures to the operator is the
//! controller's job; this crate only reports them.

use async_trait::async_trait;
use futures::future::try_join3;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    domain::{DonorId, RoleId, StaffId, TaskId, UnitId},
    error::ErrorBody,
    protocol::{
        Ack, BloodRequestReceipt, BloodRequestSummary, DonationReceipt, DonorMatch, DonorReport,
        NewBloodRequest, NewDonation, NewDonor, NewOrganization, NewStaff, OrgReceipt, OrgSummary,
        RegistrationReceipt, ReportRow, RoleChange, RoleSummary, ScreeningOutcome, StaffReceipt,
        StaffSummary, StatusChange, TaskAssignment, TaskSummary, UnitSummary, VitalsReport,
    },
};
use tracing::debug;

pub mod error;
pub use error::ApiError;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Staff, roles and tasks are always fetched together and rendered
/// together: if any of the three requests fails the whole load fails.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub staff: Vec<StaffSummary>,
    pub roles: Vec<RoleSummary>,
    pub tasks: Vec<TaskSummary>,
}

/// Seam between the workflow controller and the backend. Implemented
/// by [`ApiClient`] for production and by in-memory fakes in tests.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn register_donor(&self, donor: &NewDonor) -> Result<RegistrationReceipt>;
    async fn search_donors(&self, last_name: &str) -> Result<Vec<DonorMatch>>;
    async fn donor_report(&self, donor_id: DonorId) -> Result<DonorReport>;
    async fn register_organization(&self, org: &NewOrganization) -> Result<OrgReceipt>;
    async fn list_organizations(&self) -> Result<Vec<OrgSummary>>;
    async fn list_staff(&self) -> Result<Vec<StaffSummary>>;
    async fn list_roles(&self) -> Result<Vec<RoleSummary>>;
    async fn list_tasks(&self) -> Result<Vec<TaskSummary>>;
    async fn staff_tasks(&self, staff_id: StaffId) -> Result<Vec<TaskSummary>>;
    async fn assign_task(&self, staff_id: StaffId, task_id: TaskId) -> Result<Ack>;
    async fn remove_task(&self, staff_id: StaffId, task_id: TaskId) -> Result<Ack>;
    async fn update_staff_role(&self, staff_id: StaffId, role_id: RoleId) -> Result<Ack>;
    async fn add_staff(&self, staff: &NewStaff) -> Result<StaffReceipt>;
    async fn submit_screening(&self, vitals: &VitalsReport) -> Result<ScreeningOutcome>;
    async fn submit_donation(&self, donation: &NewDonation) -> Result<DonationReceipt>;
    async fn list_inventory(&self) -> Result<Vec<UnitSummary>>;
    async fn update_unit_status(&self, unit_id: UnitId, change: &StatusChange) -> Result<Ack>;
    async fn inventory_report(&self) -> Result<Vec<ReportRow>>;
    async fn list_blood_requests(&self) -> Result<Vec<BloodRequestSummary>>;
    async fn submit_blood_request(&self, request: &NewBloodRequest) -> Result<BloodRequestReceipt>;

    /// Grouped load of staff+roles+tasks; all-or-nothing so partial
    /// reference data is never rendered.
    async fn load_reference_data(&self) -> Result<ReferenceData> {
        let (staff, roles, tasks) =
            try_join3(self.list_staff(), self.list_roles(), self.list_tasks()).await?;
        Ok(ReferenceData {
            staff,
            roles,
            tasks,
        })
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` includes the API base path, e.g.
    /// `http://127.0.0.1:5000/api`. A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<T> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("HTTP status {}", status.as_u16()),
            };
            debug!(endpoint, status = status.as_u16(), "backend rejected request");
            return Err(ApiError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        response.json::<T>().await.map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.execute(self.http.get(self.url(endpoint)), endpoint)
            .await
    }

    async fn send_json<T, B>(&self, method: Method, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(
            self.http.request(method, self.url(endpoint)).json(body),
            endpoint,
        )
        .await
    }
}

#[async_trait]
impl BackendApi for ApiClient {
    async fn register_donor(&self, donor: &NewDonor) -> Result<RegistrationReceipt> {
        self.send_json(Method::POST, "/donors", donor).await
    }

    async fn search_donors(&self, last_name: &str) -> Result<Vec<DonorMatch>> {
        let endpoint = "/donors/search";
        self.execute(
            self.http
                .get(self.url(endpoint))
                .query(&[("last_name", last_name)]),
            endpoint,
        )
        .await
    }

    async fn donor_report(&self, donor_id: DonorId) -> Result<DonorReport> {
        self.get_json(&format!("/donors/{}/report", donor_id.0))
            .await
    }

    async fn register_organization(&self, org: &NewOrganization) -> Result<OrgReceipt> {
        self.send_json(Method::POST, "/organizations", org).await
    }

    async fn list_organizations(&self) -> Result<Vec<OrgSummary>> {
        self.get_json("/organizations").await
    }

    async fn list_staff(&self) -> Result<Vec<StaffSummary>> {
        self.get_json("/staff").await
    }

    async fn list_roles(&self) -> Result<Vec<RoleSummary>> {
        self.get_json("/roles").await
    }

    async fn list_tasks(&self) -> Result<Vec<TaskSummary>> {
        self.get_json("/tasks").await
    }

    async fn staff_tasks(&self, staff_id: StaffId) -> Result<Vec<TaskSummary>> {
        self.get_json(&format!("/staff/{}/tasks", staff_id.0)).await
    }

    async fn assign_task(&self, staff_id: StaffId, task_id: TaskId) -> Result<Ack> {
        self.send_json(
            Method::POST,
            &format!("/staff/{}/tasks", staff_id.0),
            &TaskAssignment { task_id },
        )
        .await
    }

    async fn remove_task(&self, staff_id: StaffId, task_id: TaskId) -> Result<Ack> {
        let endpoint = format!("/staff/{}/tasks/{}", staff_id.0, task_id.0);
        self.execute(self.http.delete(self.url(&endpoint)), &endpoint)
            .await
    }

    async fn update_staff_role(&self, staff_id: StaffId, role_id: RoleId) -> Result<Ack> {
        self.send_json(
            Method::PUT,
            &format!("/staff/{}", staff_id.0),
            &RoleChange { role_id },
        )
        .await
    }

    async fn add_staff(&self, staff: &NewStaff) -> Result<StaffReceipt> {
        self.send_json(Method::POST, "/staff", staff).await
    }

    async fn submit_screening(&self, vitals: &VitalsReport) -> Result<ScreeningOutcome> {
        self.send_json(Method::POST, "/screenings", vitals).await
    }

    async fn submit_donation(&self, donation: &NewDonation) -> Result<DonationReceipt> {
        self.send_json(Method::POST, "/donations", donation).await
    }

    async fn list_inventory(&self) -> Result<Vec<UnitSummary>> {
        self.get_json("/inventory").await
    }

    async fn update_unit_status(&self, unit_id: UnitId, change: &StatusChange) -> Result<Ack> {
        self.send_json(Method::PUT, &format!("/inventory/{}", unit_id.0), change)
            .await
    }

    async fn inventory_report(&self) -> Result<Vec<ReportRow>> {
        self.get_json("/reports/inventory").await
    }

    async fn list_blood_requests(&self) -> Result<Vec<BloodRequestSummary>> {
        self.get_json("/blood_requests").await
    }

    async fn submit_blood_request(&self, request: &NewBloodRequest) -> Result<BloodRequestReceipt> {
        self.send_json(Method::POST, "/blood_requests", request).await
    }
}
