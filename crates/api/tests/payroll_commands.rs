//! Integration tests for payroll and work type handlers

mod support;

use axum::http::StatusCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use support::{setup_test_app, TestApp};

fn amount(value: &Value) -> Decimal {
    value.as_str().expect("money is serialized as a string").parse().unwrap()
}

async fn create_draft(app: &TestApp, employee: &str) -> String {
    let (status, body) = app
        .post(
            "/api/payroll/sheets",
            json!({
                "employeeId": employee,
                "period": { "start": "2024-06-01", "end": "2024-07-01" },
                "comment": "June"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["status"], "draft");
    assert_eq!(amount(&body["totalAmount"]), Decimal::ZERO);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_list_sheets_and_filter_by_employee() {
    let app = setup_test_app();

    let (status, body) = app.get("/api/payroll/sheets").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = app.get("/api/payroll/sheets?employeeId=emp-1").await;
    let sheets = body.as_array().unwrap();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0]["id"], "ps-emp-1-prev");
}

#[tokio::test]
async fn test_seeded_sheet_total() {
    let app = setup_test_app();
    let (status, body) = app.get("/api/payroll/sheets/ps-emp-1-prev").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "approved");
    assert_eq!(amount(&body["totalAmount"]), dec!(6500));
    for item in body["items"].as_array().unwrap() {
        assert_eq!(
            amount(&item["total"]),
            amount(&item["quantity"]) * amount(&item["pricePerUnit"])
        );
    }
}

#[tokio::test]
async fn test_build_sheet_and_walk_lifecycle() {
    let app = setup_test_app();
    let id = create_draft(&app, "emp-2").await;
    let items = format!("/api/payroll/sheets/{id}/items");

    let (status, _) = app.post(&items, json!({ "workTypeId": "wt-reply", "quantity": 10 })).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = app.post(&items, json!({ "workTypeId": "wt-call", "quantity": "8" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&body["totalAmount"]), dec!(6500));

    let status_uri = format!("/api/payroll/sheets/{id}/status");
    let (status, body) = app.post(&status_uri, json!({ "status": "paid" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["type"], "invalid_transition");

    let (status, body) = app.post(&status_uri, json!({ "status": "approved" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "approved");

    let (status, body) = app.post(&items, json!({ "workTypeId": "wt-call", "quantity": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "validation");

    let (status, body) = app.post(&status_uri, json!({ "status": "paid" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "paid");

    let (status, _) = app.post(&status_uri, json!({ "status": "draft" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_remove_item_recomputes_total() {
    let app = setup_test_app();
    let (_, sheet) = app.get("/api/payroll/sheets/ps-emp-4-cur").await;
    assert_eq!(amount(&sheet["totalAmount"]), dec!(12800));

    let onsite = sheet["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["workTypeId"] == "wt-onsite")
        .unwrap();
    let uri = format!("/api/payroll/sheets/ps-emp-4-cur/items/{}", onsite["id"].as_str().unwrap());

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&body["totalAmount"]), dec!(7800));

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
}

#[tokio::test]
async fn test_repricing_keeps_existing_lines() {
    let app = setup_test_app();
    let id = create_draft(&app, "emp-3").await;
    let items = format!("/api/payroll/sheets/{id}/items");
    app.post(&items, json!({ "workTypeId": "wt-reply", "quantity": 10 })).await;

    let (status, body) = app.put("/api/work-types/wt-reply/price", json!({ "pricePerUnit": "300" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&body["pricePerUnit"]), dec!(300));

    let (_, body) = app.post(&items, json!({ "workTypeId": "wt-reply", "quantity": 1 })).await;
    let prices: Vec<Decimal> =
        body["items"].as_array().unwrap().iter().map(|i| amount(&i["pricePerUnit"])).collect();
    assert_eq!(prices, vec![dec!(250), dec!(300)]);
    assert_eq!(amount(&body["totalAmount"]), dec!(2800));

    let (_, previous) = app.get("/api/payroll/sheets/ps-emp-1-prev").await;
    assert_eq!(amount(&previous["totalAmount"]), dec!(6500));
}

#[tokio::test]
async fn test_invalid_payroll_input() {
    let app = setup_test_app();

    let (status, _) = app
        .post(
            "/api/payroll/sheets",
            json!({ "employeeId": "emp-404", "period": { "start": "2024-06-01", "end": "2024-07-01" } }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .post(
            "/api/payroll/sheets",
            json!({ "employeeId": "emp-2", "period": { "start": "2024-07-01", "end": "2024-06-01" } }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "validation");

    let (status, body) = app
        .post("/api/payroll/sheets/ps-emp-4-cur/items", json!({ "workTypeId": "wt-call", "quantity": 0 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "validation");

    let (status, _) = app
        .post("/api/payroll/sheets/ps-emp-4-cur/items", json!({ "workTypeId": "wt-none", "quantity": 1 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.put("/api/work-types/wt-call/price", json!({ "pricePerUnit": "-1" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_work_types_are_listed_with_prices() {
    let app = setup_test_app();
    let (status, body) = app.get("/api/work-types").await;

    assert_eq!(status, StatusCode::OK);
    let work_types = body.as_array().unwrap();
    assert_eq!(work_types.len(), 4);
    let reply = work_types.iter().find(|w| w["id"] == "wt-reply").unwrap();
    assert_eq!(amount(&reply["pricePerUnit"]), dec!(250));
}
