//! Workflow controller for the blood-bank client.
//!
//! Owns all client-side state (active view, caches, forms, the
//! screening state machine) behind a [`tokio::sync::Mutex`] and talks
//! to the backend through the [`BackendApi`] seam. Display output is
//! a stream of [`UiEvent`]s over a broadcast channel; rendering
//! itself is pure (see [`render`]).

use std::sync::Arc;
use std::time::Duration;

use client_core::BackendApi;
use shared::domain::{DonorId, RoleId, StaffId, TaskId};
use shared::protocol::{
    BloodRequestSummary, DonorReport, NewBloodRequest, OrgSummary, RoleSummary, StaffSummary,
    TaskSummary, UnitSummary,
};
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

pub mod events;
pub mod forms;
pub mod render;
pub mod views;


pub use events::{CollectionHandoff, SearchContext, Severity, StatusBanner, UiEvent};
pub use views::ViewId;

use forms::{CollectionForm, DonorForm, Forms, InventoryForm, OrganizationForm, StaffForm, VitalsForm};
use render::{donor_cards, partition_tasks, report_table, staff_list, unit_options, SearchResults, TaskLists};

/// Interval between an eligible screening result and the automatic
/// switch to the collection view.
pub const COLLECTION_HANDOFF_DELAY: Duration = Duration::from_millis(1500);

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Outcome of a form submission. The banner has already been shown
/// either way; callers branch only if they need to.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    Rejected,
}

/// Where the screening workflow currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreeningPhase {
    Idle,
    Searching,
    DonorSelected {
        donor_id: DonorId,
        donor_name: String,
        blood_type: String,
    },
    Submitted {
        eligible: bool,
    },
}

#[derive(Debug)]
struct ControllerState {
    active_view: ViewId,
    banner: Option<StatusBanner>,
    /// Bumped on every view activation; responses tagged with an older
    /// epoch are discarded on arrival.
    refresh_epoch: u64,
    screening: ScreeningPhase,
    forms: Forms,
    add_staff_modal_open: bool,
    current_staff: Option<StaffId>,
    staff: Vec<StaffSummary>,
    roles: Vec<RoleSummary>,
    tasks: Vec<TaskSummary>,
    organizations: Vec<OrgSummary>,
    inventory: Vec<UnitSummary>,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            active_view: ViewId::DonorRegistration,
            banner: None,
            refresh_epoch: 0,
            screening: ScreeningPhase::Idle,
            forms: Forms::default(),
            add_staff_modal_open: false,
            current_staff: None,
            staff: Vec::new(),
            roles: Vec::new(),
            tasks: Vec::new(),
            organizations: Vec::new(),
            inventory: Vec::new(),
        }
    }
}

/// Read-only copy of the state a painter needs between events.
#[derive(Debug, Clone)]
pub struct ControllerSnapshot {
    pub active_view: ViewId,
    pub banner: Option<StatusBanner>,
    pub screening: ScreeningPhase,
    pub add_staff_modal_open: bool,
    pub forms: Forms,
}

struct PendingHandoff {
    task: JoinHandle<()>,
}

pub struct WorkflowController {
    api: Arc<dyn BackendApi>,
    handoff_delay: Duration,
    state: Mutex<ControllerState>,
    pending_handoff: Mutex<Option<PendingHandoff>>,
    events: broadcast::Sender<UiEvent>,
}

impl WorkflowController {
    pub fn new(api: Arc<dyn BackendApi>) -> Arc<Self> {
        Self::with_handoff_delay(api, COLLECTION_HANDOFF_DELAY)
    }

    pub fn with_handoff_delay(api: Arc<dyn BackendApi>, handoff_delay: Duration) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            api,
            handoff_delay,
            state: Mutex::new(ControllerState::default()),
            pending_handoff: Mutex::new(None),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<UiEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> ControllerSnapshot {
        let state = self.state.lock().await;
        ControllerSnapshot {
            active_view: state.active_view,
            banner: state.banner.clone(),
            screening: state.screening.clone(),
            add_staff_modal_open: state.add_staff_modal_open,
            forms: state.forms.clone(),
        }
    }

    fn emit(&self, event: UiEvent) {
        // Nobody listening is fine; state is still authoritative.
        let _ = self.events.send(event);
    }

    async fn show_status(&self, text: impl Into<String>, severity: Severity) {
        let banner = StatusBanner {
            text: text.into(),
            severity,
        };
        self.state.lock().await.banner = Some(banner.clone());
        self.emit(UiEvent::StatusShown(banner));
    }

    /// Shows a failure as an error banner and hands the result back
    /// unchanged. Foreground calls go through here; background
    /// refreshes log instead.
    async fn surfaced<T>(&self, result: client_core::Result<T>) -> client_core::Result<T> {
        if let Err(err) = &result {
            self.show_status(err.to_string(), Severity::Error).await;
        }
        result
    }

    // --- navigation ---

    /// Navigation by name, for callers holding user input. Unknown
    /// names are a no-op.
    pub async fn navigate(self: &Arc<Self>, name: &str) {
        match ViewId::from_name(name) {
            Some(view) => self.show_view(view).await,
            None => debug!(name, "ignoring unknown view name"),
        }
    }

    /// Manual navigation. Always cancels a pending collection handoff
    /// before switching.
    pub async fn show_view(self: &Arc<Self>, view: ViewId) {
        self.cancel_pending_handoff().await;
        self.activate_view(view).await;
    }

    async fn activate_view(self: &Arc<Self>, view: ViewId) {
        let epoch = {
            let mut state = self.state.lock().await;
            state.active_view = view;
            state.banner = None;
            state.refresh_epoch += 1;
            if !view.keeps_screening_state() {
                state.screening = ScreeningPhase::Idle;
                state.forms.vitals = VitalsForm::default();
            }
            state.refresh_epoch
        };
        self.emit(UiEvent::StatusCleared);
        self.emit(UiEvent::ViewChanged(view));

        if view == ViewId::Staff {
            let controller = Arc::clone(self);
            tokio::spawn(async move {
                controller.staff_management_load(epoch).await;
            });
        }
        if view.needs_reference_data() {
            let controller = Arc::clone(self);
            tokio::spawn(async move {
                controller.load_reference_data(epoch).await;
            });
            let controller = Arc::clone(self);
            tokio::spawn(async move {
                controller.refresh_inventory_options(epoch).await;
            });
        }
    }

    /// Background staff/roles/tasks reload for the form views.
    /// Failures are logged, never bannered; stale epochs are dropped.
    async fn load_reference_data(&self, epoch: u64) {
        match self.api.load_reference_data().await {
            Ok(data) => {
                let mut state = self.state.lock().await;
                if state.refresh_epoch != epoch {
                    debug!(epoch, current = state.refresh_epoch, "discarding stale reference load");
                    return;
                }
                state.staff = data.staff;
                state.roles = data.roles;
                state.tasks = data.tasks;
                drop(state);
                self.emit(UiEvent::ReferenceDataUpdated);
            }
            Err(err) => warn!(%err, "reference data reload failed"),
        }
    }

    /// Refetches the inventory and organization lists and republishes
    /// the unit selector options. Silent on failure.
    async fn refresh_inventory_options(&self, epoch: u64) {
        let loaded = tokio::try_join!(self.api.list_inventory(), self.api.list_organizations());
        match loaded {
            Ok((inventory, organizations)) => {
                let mut state = self.state.lock().await;
                if state.refresh_epoch != epoch {
                    debug!(epoch, current = state.refresh_epoch, "discarding stale inventory load");
                    return;
                }
                state.inventory = inventory;
                state.organizations = organizations;
                let options = unit_options(&state.inventory);
                drop(state);
                self.emit(UiEvent::InventoryOptionsUpdated(options));
            }
            Err(err) => warn!(%err, "inventory options refresh failed"),
        }
    }

    // --- donor registration ---

    pub async fn submit_donor_registration(&self) -> Submission {
        let parsed = {
            let state = self.state.lock().await;
            state.forms.donor.parse()
        };
        let donor = match parsed {
            Ok(donor) => donor,
            Err(err) => {
                self.show_status(err.to_string(), Severity::Error).await;
                return Submission::Rejected;
            }
        };
        match self.surfaced(self.api.register_donor(&donor).await).await {
            Ok(receipt) => {
                self.state.lock().await.forms.donor = DonorForm::default();
                self.show_status(receipt.message, Severity::Success).await;
                Submission::Accepted
            }
            Err(_) => Submission::Rejected,
        }
    }

    // --- organizations ---

    pub async fn submit_organization_registration(self: &Arc<Self>) -> Submission {
        let parsed = {
            let state = self.state.lock().await;
            state.forms.organization.parse()
        };
        let org = match parsed {
            Ok(org) => org,
            Err(err) => {
                self.show_status(err.to_string(), Severity::Error).await;
                return Submission::Rejected;
            }
        };
        match self.surfaced(self.api.register_organization(&org).await).await {
            Ok(receipt) => {
                self.state.lock().await.forms.organization = OrganizationForm::default();
                self.show_status(receipt.message, Severity::Success).await;
                let controller = Arc::clone(self);
                tokio::spawn(async move {
                    controller.reload_organizations().await;
                });
                Submission::Accepted
            }
            Err(_) => Submission::Rejected,
        }
    }

    async fn reload_organizations(&self) {
        match self.api.list_organizations().await {
            Ok(organizations) => self.state.lock().await.organizations = organizations,
            Err(err) => warn!(%err, "organization list reload failed"),
        }
    }

    pub async fn organizations(&self) -> Vec<OrgSummary> {
        self.state.lock().await.organizations.clone()
    }

    // --- donor search ---

    pub async fn search_donors(&self, context: SearchContext, last_name: &str) -> SearchResults {
        if context == SearchContext::Screening {
            self.state.lock().await.screening = ScreeningPhase::Searching;
        }
        let results = match self.surfaced(self.api.search_donors(last_name).await).await {
            Ok(matches) => donor_cards(&matches),
            Err(_) => SearchResults::FetchFailed,
        };
        self.emit(UiEvent::SearchResultsUpdated {
            context,
            results: results.clone(),
        });
        results
    }

    /// Operator picked a donor card in the screening search: the
    /// vitals form opens for them and the search UI clears.
    pub async fn select_screening_donor(
        &self,
        donor_id: DonorId,
        donor_name: &str,
        blood_type: &str,
    ) {
        {
            let mut state = self.state.lock().await;
            state.screening = ScreeningPhase::DonorSelected {
                donor_id,
                donor_name: donor_name.to_string(),
                blood_type: blood_type.to_string(),
            };
        }
        self.emit(UiEvent::VitalsFormRevealed {
            donor_id,
            donor_name: donor_name.to_string(),
            blood_type: blood_type.to_string(),
        });
        self.emit(UiEvent::SearchResultsUpdated {
            context: SearchContext::Screening,
            results: SearchResults::Idle,
        });
    }

    // --- screening ---

    pub async fn submit_screening(self: &Arc<Self>) -> Submission {
        let (donor_id, blood_type, parsed) = {
            let state = self.state.lock().await;
            let ScreeningPhase::DonorSelected {
                donor_id,
                blood_type,
                ..
            } = &state.screening
            else {
                drop(state);
                self.show_status("Select a donor before recording vitals", Severity::Error)
                    .await;
                return Submission::Rejected;
            };
            (
                *donor_id,
                blood_type.clone(),
                state.forms.vitals.parse(*donor_id),
            )
        };
        let vitals = match parsed {
            Ok(vitals) => vitals,
            Err(err) => {
                self.show_status(err.to_string(), Severity::Error).await;
                return Submission::Rejected;
            }
        };
        match self.surfaced(self.api.submit_screening(&vitals).await).await {
            Ok(outcome) => {
                let text = if outcome.notes.is_empty() {
                    outcome.message.clone()
                } else {
                    format!("{} Reason: {}", outcome.message, outcome.notes)
                };
                let severity = if outcome.is_eligible {
                    Severity::Success
                } else {
                    Severity::Error
                };
                {
                    let mut state = self.state.lock().await;
                    state.forms.vitals = VitalsForm::default();
                    state.screening = ScreeningPhase::Submitted {
                        eligible: outcome.is_eligible,
                    };
                }
                self.show_status(text, severity).await;
                if outcome.is_eligible {
                    self.schedule_collection_handoff(CollectionHandoff {
                        donor_id,
                        screening_id: outcome.screening_id,
                        blood_group: blood_type,
                    })
                    .await;
                }
                Submission::Accepted
            }
            Err(_) => Submission::Rejected,
        }
    }

    async fn schedule_collection_handoff(self: &Arc<Self>, handoff: CollectionHandoff) {
        let controller = Arc::clone(self);
        let delay = self.handoff_delay;
        let task = tokio::spawn(async move {
            sleep(delay).await;
            controller.apply_collection_handoff(handoff).await;
        });
        let mut pending = self.pending_handoff.lock().await;
        if let Some(previous) = pending.replace(PendingHandoff { task }) {
            previous.task.abort();
        }
    }

    async fn apply_collection_handoff(self: &Arc<Self>, handoff: CollectionHandoff) {
        // Hold the pending slot for the whole switch. A manual
        // navigation either aborts this task while it still waits for
        // the slot, or blocks on it and then activates its own view
        // after the switch, so manual navigation wins both races.
        let mut pending = self.pending_handoff.lock().await;
        self.activate_view(ViewId::Collection).await;
        {
            let mut state = self.state.lock().await;
            let form = &mut state.forms.collection;
            form.donor_id = Some(handoff.donor_id);
            form.screening_id = handoff.screening_id.0.to_string();
            form.blood_group = handoff.blood_group.clone();
            form.lineage_locked = true;
        }
        self.emit(UiEvent::CollectionPrefilled(handoff));
        pending.take();
    }

    async fn cancel_pending_handoff(&self) {
        if let Some(pending) = self.pending_handoff.lock().await.take() {
            pending.task.abort();
            debug!("cancelled pending collection handoff");
        }
    }

    // --- collection ---

    pub async fn submit_collection(&self) -> Submission {
        let parsed = {
            let state = self.state.lock().await;
            state.forms.collection.parse()
        };
        let donation = match parsed {
            Ok(donation) => donation,
            Err(err) => {
                self.show_status(err.to_string(), Severity::Error).await;
                return Submission::Rejected;
            }
        };
        match self.surfaced(self.api.submit_donation(&donation).await).await {
            Ok(receipt) => {
                let epoch = {
                    let mut state = self.state.lock().await;
                    state.forms.collection = CollectionForm::default();
                    state.screening = ScreeningPhase::Idle;
                    state.refresh_epoch
                };
                self.show_status(
                    format!("{} New Unit ID: {}", receipt.message, receipt.unit_id),
                    Severity::Success,
                )
                .await;
                self.refresh_inventory_options(epoch).await;
                Submission::Accepted
            }
            Err(_) => Submission::Rejected,
        }
    }

    // --- inventory ---

    pub async fn submit_inventory_update(&self) -> Submission {
        let parsed = {
            let state = self.state.lock().await;
            state.forms.inventory.parse()
        };
        let (unit_id, change) = match parsed {
            Ok(update) => update,
            Err(err) => {
                self.show_status(err.to_string(), Severity::Error).await;
                return Submission::Rejected;
            }
        };
        match self
            .surfaced(self.api.update_unit_status(unit_id, &change).await)
            .await
        {
            Ok(ack) => {
                let epoch = {
                    let mut state = self.state.lock().await;
                    state.forms.inventory = InventoryForm::default();
                    state.refresh_epoch
                };
                self.show_status(ack.message, Severity::Success).await;
                self.refresh_inventory_options(epoch).await;
                Submission::Accepted
            }
            Err(_) => Submission::Rejected,
        }
    }

    // --- reporting ---

    pub async fn generate_report(&self) -> render::ReportTable {
        let table = match self.surfaced(self.api.inventory_report().await).await {
            Ok(rows) => report_table(&rows),
            Err(_) => render::ReportTable::FetchFailed,
        };
        self.emit(UiEvent::ReportUpdated(table.clone()));
        table
    }

    pub async fn donor_report(&self, donor_id: DonorId) -> Option<DonorReport> {
        self.surfaced(self.api.donor_report(donor_id).await)
            .await
            .ok()
    }

    // --- blood requests ---

    pub async fn load_blood_requests(&self) -> Option<Vec<BloodRequestSummary>> {
        self.surfaced(self.api.list_blood_requests().await)
            .await
            .ok()
    }

    pub async fn submit_blood_request(&self, request: NewBloodRequest) -> Submission {
        match self
            .surfaced(self.api.submit_blood_request(&request).await)
            .await
        {
            Ok(receipt) => {
                self.show_status(receipt.message, Severity::Success).await;
                Submission::Accepted
            }
            Err(_) => Submission::Rejected,
        }
    }

    // --- staff management ---

    /// Grouped load behind the staff view. Any failure leaves the
    /// caches untouched and renders an error placeholder.
    pub async fn initialize_staff_management(&self) {
        let epoch = self.state.lock().await.refresh_epoch;
        self.staff_management_load(epoch).await;
    }

    async fn staff_management_load(&self, epoch: u64) {
        self.state.lock().await.current_staff = None;
        match self.api.load_reference_data().await {
            Ok(data) => {
                let list = staff_list(&data.staff);
                {
                    let mut state = self.state.lock().await;
                    if state.refresh_epoch != epoch {
                        debug!(epoch, current = state.refresh_epoch, "discarding stale staff load");
                        return;
                    }
                    state.staff = data.staff;
                    state.roles = data.roles;
                    state.tasks = data.tasks;
                }
                self.emit(UiEvent::ReferenceDataUpdated);
                self.emit(UiEvent::StaffListUpdated(list));
            }
            Err(err) => {
                warn!(%err, "staff management load failed");
                self.emit(UiEvent::StaffListUpdated(render::StaffList::LoadFailed));
            }
        }
    }

    pub async fn select_staff(&self, staff_id: StaffId) {
        self.state.lock().await.current_staff = Some(staff_id);
        self.load_staff_detail(staff_id).await;
    }

    async fn load_staff_detail(&self, staff_id: StaffId) {
        let tasks = match self.api.staff_tasks(staff_id).await {
            Ok(assigned) => {
                let state = self.state.lock().await;
                partition_tasks(&state.tasks, &assigned)
            }
            Err(err) => {
                warn!(%err, staff_id = staff_id.0, "staff task fetch failed");
                TaskLists::Unavailable
            }
        };
        self.emit(UiEvent::StaffDetailUpdated { staff_id, tasks });
    }

    pub async fn update_staff_role(&self, role_id: RoleId) -> Submission {
        let Some(staff_id) = self.state.lock().await.current_staff else {
            self.show_status("Select a staff member first", Severity::Error)
                .await;
            return Submission::Rejected;
        };
        match self
            .surfaced(self.api.update_staff_role(staff_id, role_id).await)
            .await
        {
            Ok(ack) => {
                self.show_status(ack.message, Severity::Success).await;
                self.reload_staff_list(Some(staff_id)).await;
                Submission::Accepted
            }
            Err(_) => Submission::Rejected,
        }
    }

    /// Full list reload after a mutation, optionally keeping the
    /// current selection and its detail panel.
    async fn reload_staff_list(&self, keep_selected: Option<StaffId>) {
        let epoch = self.state.lock().await.refresh_epoch;
        match self.api.load_reference_data().await {
            Ok(data) => {
                let list = staff_list(&data.staff);
                {
                    let mut state = self.state.lock().await;
                    if state.refresh_epoch != epoch {
                        debug!(epoch, current = state.refresh_epoch, "discarding stale staff reload");
                        return;
                    }
                    state.staff = data.staff;
                    state.roles = data.roles;
                    state.tasks = data.tasks;
                    state.current_staff = keep_selected;
                }
                self.emit(UiEvent::StaffListUpdated(list));
                if let Some(staff_id) = keep_selected {
                    self.load_staff_detail(staff_id).await;
                }
            }
            Err(err) => warn!(%err, "staff list reload failed"),
        }
    }

    pub async fn assign_task(&self, task_id: TaskId) -> Submission {
        let Some(staff_id) = self.state.lock().await.current_staff else {
            self.show_status("Select a staff member first", Severity::Error)
                .await;
            return Submission::Rejected;
        };
        match self
            .surfaced(self.api.assign_task(staff_id, task_id).await)
            .await
        {
            Ok(_) => {
                self.load_staff_detail(staff_id).await;
                Submission::Accepted
            }
            Err(_) => Submission::Rejected,
        }
    }

    pub async fn remove_task(&self, task_id: TaskId) -> Submission {
        let Some(staff_id) = self.state.lock().await.current_staff else {
            self.show_status("Select a staff member first", Severity::Error)
                .await;
            return Submission::Rejected;
        };
        match self
            .surfaced(self.api.remove_task(staff_id, task_id).await)
            .await
        {
            Ok(_) => {
                self.load_staff_detail(staff_id).await;
                Submission::Accepted
            }
            Err(_) => Submission::Rejected,
        }
    }

    pub async fn open_add_staff_modal(&self) {
        self.state.lock().await.add_staff_modal_open = true;
    }

    pub async fn close_add_staff_modal(&self) {
        self.state.lock().await.add_staff_modal_open = false;
    }

    pub async fn submit_new_staff(&self) -> Submission {
        let parsed = {
            let state = self.state.lock().await;
            state.forms.staff.parse()
        };
        let staff = match parsed {
            Ok(staff) => staff,
            Err(err) => {
                self.show_status(err.to_string(), Severity::Error).await;
                return Submission::Rejected;
            }
        };
        match self.surfaced(self.api.add_staff(&staff).await).await {
            Ok(_) => {
                {
                    let mut state = self.state.lock().await;
                    state.forms.staff = StaffForm::default();
                    state.add_staff_modal_open = false;
                }
                self.show_status("Staff member added successfully!", Severity::Success)
                    .await;
                let keep = self.state.lock().await.current_staff;
                self.reload_staff_list(keep).await;
                Submission::Accepted
            }
            Err(_) => Submission::Rejected,
        }
    }

    // --- form editing ---

    pub async fn edit_donor_form(&self, edit: impl FnOnce(&mut DonorForm)) {
        edit(&mut self.state.lock().await.forms.donor);
    }

    pub async fn edit_organization_form(&self, edit: impl FnOnce(&mut OrganizationForm)) {
        edit(&mut self.state.lock().await.forms.organization);
    }

    pub async fn edit_vitals_form(&self, edit: impl FnOnce(&mut VitalsForm)) {
        edit(&mut self.state.lock().await.forms.vitals);
    }

    /// Collection form edits respect the handoff lock: while
    /// `lineage_locked` is set, the screening id and blood group keep
    /// their pre-filled values no matter what the edit writes.
    pub async fn edit_collection_form(&self, edit: impl FnOnce(&mut CollectionForm)) {
        let mut state = self.state.lock().await;
        let locked = state.forms.collection.lineage_locked;
        let screening_id = state.forms.collection.screening_id.clone();
        let blood_group = state.forms.collection.blood_group.clone();
        edit(&mut state.forms.collection);
        if locked {
            state.forms.collection.screening_id = screening_id;
            state.forms.collection.blood_group = blood_group;
            state.forms.collection.lineage_locked = true;
        }
    }

    pub async fn edit_inventory_form(&self, edit: impl FnOnce(&mut InventoryForm)) {
        edit(&mut self.state.lock().await.forms.inventory);
    }

    pub async fn edit_staff_form(&self, edit: impl FnOnce(&mut StaffForm)) {
        edit(&mut self.state.lock().await.forms.staff);
    }

    // --- cached reference data accessors for selector rendering ---

    pub async fn staff_selector(&self, role_filter: Option<&str>) -> Vec<render::SelectOption> {
        let state = self.state.lock().await;
        render::staff_options(&state.staff, role_filter)
    }

    pub async fn role_selector(&self) -> Vec<render::SelectOption> {
        let state = self.state.lock().await;
        render::role_options(&state.roles)
    }

    pub async fn organization_selector(&self) -> Vec<render::SelectOption> {
        let state = self.state.lock().await;
        render::org_options(&state.organizations)
    }

    pub async fn unit_selector(&self) -> Vec<render::SelectOption> {
        let state = self.state.lock().await;
        unit_options(&state.inventory)
    }
}

/// Role name the collection staff selector is restricted to.
pub const PHLEBOTOMIST_ROLE: &str = "Phlebotomist";
