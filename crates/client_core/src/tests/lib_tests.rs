use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

use crate::*;
use shared::domain::{RoleId, StaffId, TaskId, UnitId};
use shared::protocol::{NewDonation, NewDonor, StatusChange};

async fn spawn_backend(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

#[derive(Clone)]
struct Capture {
    tx: Arc<Mutex<Option<oneshot::Sender<Value>>>>,
}

impl Capture {
    fn channel() -> (Self, oneshot::Receiver<Value>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                tx: Arc::new(Mutex::new(Some(tx))),
            },
            rx,
        )
    }

    async fn record(&self, payload: Value) {
        if let Some(tx) = self.tx.lock().await.take() {
            let _ = tx.send(payload);
        }
    }
}

#[tokio::test]
async fn backend_error_body_surfaces_verbatim() {
    let app = Router::new().route(
        "/donors",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Database error: duplicate entry"})),
            )
        }),
    );
    let server_url = spawn_backend(app).await;
    let client = ApiClient::new(server_url);

    let err = client
        .register_donor(&sample_donor())
        .await
        .expect_err("must fail");
    match err {
        ApiError::Backend { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Database error: duplicate entry");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_error_field_falls_back_to_status_line() {
    let app = Router::new().route(
        "/inventory",
        get(|| async { (StatusCode::BAD_GATEWAY, Json(json!({}))) }),
    );
    let server_url = spawn_backend(app).await;
    let client = ApiClient::new(server_url);

    let err = client.list_inventory().await.expect_err("must fail");
    assert_eq!(err.to_string(), "HTTP status 502");
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn search_round_trips_url_encoded_last_name() {
    async fn handler(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        let last_name = params.get("last_name").cloned().unwrap_or_default();
        Json(json!([{
            "donor_id": 3,
            "first_name": "Ana",
            "last_name": last_name,
            "blood_type": "O+",
        }]))
    }
    let app = Router::new().route("/donors/search", get(handler));
    let server_url = spawn_backend(app).await;
    let client = ApiClient::new(server_url);

    let matches = client
        .search_donors("O'Hara Müller & sons")
        .await
        .expect("search");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].last_name, "O'Hara Müller & sons");
}

#[tokio::test]
async fn register_donor_posts_expected_payload() {
    async fn handler(
        State(capture): State<Capture>,
        Json(payload): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        capture.record(payload).await;
        (
            StatusCode::CREATED,
            Json(json!({"message": "Donor registered successfully!", "donor_id": 12})),
        )
    }
    let (capture, payload_rx) = Capture::channel();
    let app = Router::new()
        .route("/donors", post(handler))
        .with_state(capture);
    let server_url = spawn_backend(app).await;
    let client = ApiClient::new(server_url);

    let receipt = client.register_donor(&sample_donor()).await.expect("register");
    assert_eq!(receipt.donor_id.0, 12);

    let payload = payload_rx.await.expect("payload");
    assert_eq!(payload["first_name"], "Maya");
    assert_eq!(payload["date_of_birth"], "1990-05-17");
    assert_eq!(payload["email"], Value::Null);
}

#[tokio::test]
async fn grouped_reference_load_succeeds_with_all_three() {
    let app = Router::new()
        .route(
            "/staff",
            get(|| async {
                Json(json!([{
                    "staff_id": 1,
                    "first_name": "Jo",
                    "last_name": "Reyes",
                    "employee_number": "EMP001",
                    "role_id": 2,
                    "role_name": "Phlebotomist",
                }]))
            }),
        )
        .route(
            "/roles",
            get(|| async { Json(json!([{"role_id": 2, "role_name": "Phlebotomist"}])) }),
        )
        .route(
            "/tasks",
            get(|| async { Json(json!([{"task_id": 9, "task_name": "Inventory check"}])) }),
        );
    let server_url = spawn_backend(app).await;
    let client = ApiClient::new(server_url);

    let data = client.load_reference_data().await.expect("reference data");
    assert_eq!(data.staff.len(), 1);
    assert_eq!(data.roles.len(), 1);
    assert_eq!(data.tasks.len(), 1);
}

#[tokio::test]
async fn grouped_reference_load_is_all_or_nothing() {
    let app = Router::new()
        .route("/staff", get(|| async { Json(json!([])) }))
        .route("/roles", get(|| async { Json(json!([])) }))
        .route(
            "/tasks",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Database connection failed"})),
                )
            }),
        );
    let server_url = spawn_backend(app).await;
    let client = ApiClient::new(server_url);

    let err = client
        .load_reference_data()
        .await
        .expect_err("whole group must fail");
    assert_eq!(err.to_string(), "Database connection failed");
}

#[tokio::test]
async fn donation_receipt_carries_new_unit_id() {
    let app = Router::new().route(
        "/donations",
        post(|| async {
            (
                StatusCode::CREATED,
                Json(json!({
                    "message": "Donation and Blood Unit created successfully!",
                    "donation_id": 5,
                    "unit_id": 17,
                })),
            )
        }),
    );
    let server_url = spawn_backend(app).await;
    let client = ApiClient::new(server_url);

    let receipt = client
        .submit_donation(&NewDonation {
            donor_id: shared::domain::DonorId(3),
            screening_id: shared::domain::ScreeningId(42),
            staff_id: StaffId(1),
            blood_group: "O+".to_string(),
        })
        .await
        .expect("donation");
    assert_eq!(receipt.unit_id, UnitId(17));
    assert_eq!(receipt.unit_id.to_string(), "U0017");
}

#[tokio::test]
async fn status_update_omits_org_id_unless_issued() {
    async fn handler(
        Path(unit_id): Path<i64>,
        State(capture): State<Capture>,
        Json(payload): Json<Value>,
    ) -> Json<Value> {
        capture
            .record(json!({"unit_id": unit_id, "body": payload}))
            .await;
        Json(json!({"message": "Unit status updated to Discarded"}))
    }
    let (capture, payload_rx) = Capture::channel();
    let app = Router::new()
        .route("/inventory/:unit_id", put(handler))
        .with_state(capture);
    let server_url = spawn_backend(app).await;
    let client = ApiClient::new(server_url);

    let ack = client
        .update_unit_status(
            UnitId(8),
            &StatusChange {
                status: "Discarded".to_string(),
                org_id: None,
            },
        )
        .await
        .expect("update");
    assert_eq!(ack.message, "Unit status updated to Discarded");

    let payload = payload_rx.await.expect("payload");
    assert_eq!(payload["unit_id"], 8);
    assert_eq!(payload["body"], json!({"status": "Discarded"}));
}

#[tokio::test]
async fn remove_task_issues_delete_to_nested_path() {
    async fn handler(Path((staff_id, task_id)): Path<(i64, i64)>) -> Json<Value> {
        assert_eq!((staff_id, task_id), (4, 9));
        Json(json!({"message": "Task removed"}))
    }
    let app = Router::new().route("/staff/:staff_id/tasks/:task_id", delete(handler));
    let server_url = spawn_backend(app).await;
    let client = ApiClient::new(server_url);

    let ack = client
        .remove_task(StaffId(4), TaskId(9))
        .await
        .expect("remove");
    assert_eq!(ack.message, "Task removed");
}

#[tokio::test]
async fn role_update_puts_new_role_id() {
    async fn handler(
        Path(staff_id): Path<i64>,
        State(capture): State<Capture>,
        Json(payload): Json<Value>,
    ) -> Json<Value> {
        capture
            .record(json!({"staff_id": staff_id, "body": payload}))
            .await;
        Json(json!({"message": "Staff role updated successfully"}))
    }
    let (capture, payload_rx) = Capture::channel();
    let app = Router::new()
        .route("/staff/:staff_id", put(handler))
        .with_state(capture);
    let server_url = spawn_backend(app).await;
    let client = ApiClient::new(server_url);

    client
        .update_staff_role(StaffId(4), RoleId(2))
        .await
        .expect("role update");
    let payload = payload_rx.await.expect("payload");
    assert_eq!(payload["staff_id"], 4);
    assert_eq!(payload["body"], json!({"role_id": 2}));
}

fn sample_donor() -> NewDonor {
    NewDonor {
        first_name: "Maya".to_string(),
        last_name: "Okafor".to_string(),
        date_of_birth: "1990-05-17".parse().expect("date"),
        gender: "F".to_string(),
        blood_group: "A+".to_string(),
        phone_number: "555-0142".to_string(),
        email: None,
    }
}
