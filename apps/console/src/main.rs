//! Line-oriented console front end for the blood-bank workflow
//! controller. Type `help` for the command list.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use client_core::ApiClient;
use controller::render::{DonorCard, ReportTable, SearchResults, StaffList, TaskLists};
use controller::{SearchContext, Severity, UiEvent, WorkflowController, PHLEBOTOMIST_ROLE};
use shared::domain::{DonorId, OrgId, RoleId, StaffId, TaskId, UnitId};
use shared::protocol::NewBloodRequest;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Parser, Debug)]
struct Args {
    /// Backend API base url; overrides bloodbank.toml and env.
    #[arg(long)]
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(url) = args.server_url {
        settings.server_url = url;
    }
    println!("Connecting to {}", settings.server_url);

    let api = Arc::new(ApiClient::new(settings.server_url));
    let controller = WorkflowController::new(api);

    // Cards from the most recent screening search, so `pick <n>` can
    // refer back to them.
    let last_cards: Arc<Mutex<Vec<DonorCard>>> = Arc::new(Mutex::new(Vec::new()));
    spawn_event_printer(&controller, Arc::clone(&last_cards));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_help();
    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }
        if words[0] == "quit" {
            break;
        }
        run_command(&controller, &last_cards, &words).await;
    }
    Ok(())
}

fn spawn_event_printer(
    controller: &Arc<WorkflowController>,
    last_cards: Arc<Mutex<Vec<DonorCard>>>,
) {
    let mut events = controller.subscribe_events();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => print_event(event, &last_cards).await,
                Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}

async fn print_event(event: UiEvent, last_cards: &Mutex<Vec<DonorCard>>) {
    match event {
        UiEvent::ViewChanged(view) => println!("== {} ==", view.as_str()),
        UiEvent::StatusShown(banner) => {
            let tag = match banner.severity {
                Severity::Success => "ok",
                Severity::Error => "error",
            };
            println!("[{tag}] {}", banner.text);
        }
        UiEvent::StatusCleared => {}
        UiEvent::SearchResultsUpdated { results, .. } => match results {
            SearchResults::Idle => {}
            SearchResults::NoneFound => println!("No donors found."),
            SearchResults::FetchFailed => println!("Error fetching donors."),
            SearchResults::Matches(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    println!(
                        "  {}. {} ({}) {}",
                        index + 1,
                        card.name,
                        card.blood_type,
                        card.display_id
                    );
                }
                *last_cards.lock().await = cards;
            }
        },
        UiEvent::VitalsFormRevealed {
            donor_name,
            blood_type,
            ..
        } => println!("Recording vitals for {donor_name} ({blood_type})"),
        UiEvent::CollectionPrefilled(handoff) => println!(
            "Collection pre-filled: donor {} screening {} blood group {}",
            handoff.donor_id, handoff.screening_id.0, handoff.blood_group
        ),
        UiEvent::InventoryOptionsUpdated(options) => {
            for option in options {
                println!("  unit {}: {}", option.value, option.label);
            }
        }
        UiEvent::ReportUpdated(table) => match table {
            ReportTable::Empty => println!("No inventory data available."),
            ReportTable::FetchFailed => println!("Error generating report."),
            ReportTable::Rows(rows) => {
                for row in rows {
                    println!("  {:4} {:10} {}", row.blood_type, row.status, row.count);
                }
            }
        },
        UiEvent::ReferenceDataUpdated => {}
        UiEvent::StaffListUpdated(list) => match list {
            StaffList::LoadFailed => println!("Error loading staff."),
            StaffList::Empty => println!("No staff found."),
            StaffList::Cards(cards) => {
                for card in cards {
                    println!(
                        "  {} {} ({}) {}",
                        card.display_id, card.name, card.employee_number, card.role_name
                    );
                }
            }
        },
        UiEvent::StaffDetailUpdated { staff_id, tasks } => match tasks {
            TaskLists::Unavailable => println!("Error loading tasks for {staff_id}."),
            TaskLists::Partitioned {
                assigned,
                available,
            } => {
                println!("Tasks for {staff_id}:");
                for task in &assigned {
                    println!("  [x] {}", task.task_name);
                }
                for task in &available {
                    println!("  [ ] {}", task.task_name);
                }
            }
        },
    }
}

async fn run_command(
    controller: &Arc<WorkflowController>,
    last_cards: &Mutex<Vec<DonorCard>>,
    words: &[&str],
) {
    match words {
        ["help"] => print_help(),
        ["view", name] => controller.navigate(name).await,
        ["search", last_name] => {
            let _ = controller
                .search_donors(SearchContext::General, last_name)
                .await;
        }
        ["screen", last_name] => {
            let _ = controller
                .search_donors(SearchContext::Screening, last_name)
                .await;
        }
        ["pick", index] => pick_donor(controller, last_cards, index).await,
        ["donor", first, last, dob, gender, blood, phone, rest @ ..] => {
            let email = rest.first().unwrap_or(&"").to_string();
            controller
                .edit_donor_form(|form| {
                    form.first_name = first.to_string();
                    form.last_name = last.to_string();
                    form.date_of_birth = dob.to_string();
                    form.gender = gender.to_string();
                    form.blood_group = blood.to_string();
                    form.phone_number = phone.to_string();
                    form.email = email;
                })
                .await;
            let _ = controller.submit_donor_registration().await;
        }
        ["org", name, org_type, person, phone, rest @ ..] => {
            let email = rest.first().unwrap_or(&"").to_string();
            controller
                .edit_organization_form(|form| {
                    form.name = name.to_string();
                    form.org_type = org_type.to_string();
                    form.contact_person = person.to_string();
                    form.contact_phone = phone.to_string();
                    form.contact_email = email;
                })
                .await;
            let _ = controller.submit_organization_registration().await;
        }
        ["vitals", staff, hb, sys, dia, kg, rest @ ..] => {
            let staff_id = parse_id(staff).map(StaffId);
            let notes = rest.join(" ");
            controller
                .edit_vitals_form(|form| {
                    form.staff_id = staff_id;
                    form.hemoglobin = hb.to_string();
                    form.bp_systolic = sys.to_string();
                    form.bp_diastolic = dia.to_string();
                    form.weight_kg = kg.to_string();
                    form.notes = notes;
                })
                .await;
            let _ = controller.submit_screening().await;
        }
        ["collect", staff] => {
            let staff_id = parse_id(staff).map(StaffId);
            controller
                .edit_collection_form(|form| form.staff_id = staff_id)
                .await;
            let _ = controller.submit_collection().await;
        }
        ["collect", staff, donor, screening, blood] => {
            // Standalone collection without a screening handoff.
            let staff_id = parse_id(staff).map(StaffId);
            let donor_id = parse_id(donor).map(DonorId);
            controller
                .edit_collection_form(|form| {
                    form.staff_id = staff_id;
                    form.donor_id = donor_id;
                    form.screening_id = screening.to_string();
                    form.blood_group = blood.to_string();
                })
                .await;
            let _ = controller.submit_collection().await;
        }
        ["issue", unit, status, rest @ ..] => {
            let unit_id = parse_id(unit).map(UnitId);
            let issued_to = rest.first().and_then(|v| parse_id(v)).map(OrgId);
            let status = status.replace('_', " ");
            controller
                .edit_inventory_form(|form| {
                    form.unit_id = unit_id;
                    form.new_status = status;
                    form.issued_to = issued_to;
                })
                .await;
            let _ = controller.submit_inventory_update().await;
        }
        ["report"] => {
            let _ = controller.generate_report().await;
        }
        ["report", "donor", id] => {
            if let Some(donor_id) = parse_id(id).map(DonorId) {
                print_donor_report(controller, donor_id).await;
            }
        }
        ["staff"] => controller.navigate("staff").await,
        ["staff", "pick", id] => {
            if let Some(staff_id) = parse_id(id).map(StaffId) {
                controller.select_staff(staff_id).await;
            }
        }
        ["staff", "role", id] => {
            if let Some(role_id) = parse_id(id).map(RoleId) {
                let _ = controller.update_staff_role(role_id).await;
            }
        }
        ["staff", "assign", id] => {
            if let Some(task_id) = parse_id(id).map(TaskId) {
                let _ = controller.assign_task(task_id).await;
            }
        }
        ["staff", "unassign", id] => {
            if let Some(task_id) = parse_id(id).map(TaskId) {
                let _ = controller.remove_task(task_id).await;
            }
        }
        ["staff", "add", first, last, employee, role] => {
            let role_id = parse_id(role).map(RoleId);
            controller.open_add_staff_modal().await;
            controller
                .edit_staff_form(|form| {
                    form.first_name = first.to_string();
                    form.last_name = last.to_string();
                    form.employee_number = employee.to_string();
                    form.role_id = role_id;
                })
                .await;
            let _ = controller.submit_new_staff().await;
        }
        ["requests"] => {
            if let Some(requests) = controller.load_blood_requests().await {
                if requests.is_empty() {
                    println!("No blood requests.");
                }
                for request in requests {
                    println!(
                        "  #{} {} x{} {} from {} ({})",
                        request.request_id.0,
                        request.blood_type,
                        request.quantity,
                        request.status,
                        request.org_name,
                        request.request_date
                    );
                }
            }
        }
        ["request", org, blood, quantity, rest @ ..] => {
            let (Some(org_id), Ok(quantity)) = (parse_id(org), quantity.parse()) else {
                println!("usage: request <org-id> <blood-group> <quantity> [patient name]");
                return;
            };
            let patient = rest.join(" ");
            let _ = controller
                .submit_blood_request(NewBloodRequest {
                    org_id: OrgId(org_id),
                    patient_name: (!patient.is_empty()).then_some(patient),
                    blood_group: blood.to_string(),
                    quantity,
                })
                .await;
        }
        ["options", "staff"] => print_options(controller.staff_selector(None).await),
        ["options", "phlebotomists"] => {
            print_options(controller.staff_selector(Some(PHLEBOTOMIST_ROLE)).await)
        }
        ["options", "roles"] => print_options(controller.role_selector().await),
        ["options", "units"] => print_options(controller.unit_selector().await),
        ["options", "orgs"] => print_options(controller.organization_selector().await),
        _ => println!("Unrecognized command; type `help`."),
    }
}

async fn pick_donor(
    controller: &Arc<WorkflowController>,
    last_cards: &Mutex<Vec<DonorCard>>,
    index: &str,
) {
    let card = {
        let cards = last_cards.lock().await;
        index
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| cards.get(n).cloned())
    };
    match card {
        Some(card) => {
            controller
                .select_screening_donor(card.donor_id, &card.name, &card.blood_type)
                .await;
        }
        None => println!("No such result; run `screen <last-name>` first."),
    }
}

async fn print_donor_report(controller: &Arc<WorkflowController>, donor_id: DonorId) {
    let Some(report) = controller.donor_report(donor_id).await else {
        return;
    };
    let details = &report.donor_details;
    println!(
        "{} {} {} ({}), born {}",
        details.donor_id,
        details.first_name,
        details.last_name,
        details.blood_type,
        details.date_of_birth
    );
    if report.history.is_empty() {
        println!("  no screening history");
    }
    for entry in &report.history {
        let donation = match (&entry.donation_date, &entry.unit_id) {
            (Some(date), Some(unit_id)) => format!("donated {date} as {unit_id}"),
            _ => "no donation".to_string(),
        };
        println!(
            "  screening {} on {}: {}",
            entry.screening_id.0, entry.screening_date, donation
        );
    }
}

fn print_options(options: Vec<controller::render::SelectOption>) {
    if options.is_empty() {
        println!("  (none loaded)");
    }
    for option in options {
        println!("  {}: {}", option.value, option.label);
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn print_help() {
    println!("commands:");
    println!("  view <name>                         switch view (donor-registration, screening, ...)");
    println!("  search <last-name>                  general donor search");
    println!("  screen <last-name>                  screening donor search");
    println!("  pick <n>                            select the n-th screening result");
    println!("  donor <first> <last> <dob> <gender> <blood> <phone> [email]");
    println!("  org <name> <type> <person> <phone> [email]");
    println!("  vitals <staff-id> <hb> <sys> <dia> <kg> [notes]");
    println!("  collect <staff-id> [donor-id screening-id blood]");
    println!("  issue <unit-id> <status> [org-id]   e.g. issue 8 Issued 3, issue 9 Discarded");
    println!("  report | report donor <id>");
    println!("  staff [pick|role|assign|unassign|add ...]");
    println!("  requests | request <org-id> <blood> <qty> [patient]");
    println!("  options staff|phlebotomists|roles|units|orgs");
    println!("  quit");
}
