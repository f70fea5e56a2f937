mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use uuid::Uuid;

fn client_for(ctx: &TestContext) -> TestClient {
    TestClient::new(ctx.db.clone(), ctx.tokens.clone(), ctx.config.clone())
}

#[tokio::test]
async fn test_telemetry_submit_and_list() {
    println!("\n\n[+] Running test: test_telemetry_submit_and_list");
    let ctx = TestContext::new().await;
    let client = client_for(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (_user_id, user_token) = client.create_test_user().await;
    let device_id = client.create_test_device().await;
    println!("[+] Test client, app, user and device initialized.");

    for (metric, value) in [("cpu", "41"), ("cpu", "44"), ("rssi", "-61")] {
        println!("[>] Submitting telemetry {}={}", metric, value);
        let req = test::TestRequest::post()
            .uri(&format!("/monitoring/devices/{}/telemetry", device_id))
            .insert_header(("Authorization", format!("Bearer {}", user_token)))
            .set_json(serde_json::json!({ "metric": metric, "value": value }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        println!("[<] Received response with status: {}", resp.status());
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    println!("[>] Listing all telemetry for the device.");
    let req = test::TestRequest::get()
        .uri(&format!("/monitoring/devices/{}/telemetry", device_id))
        .insert_header(("Authorization", format!("Bearer {}", user_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let all: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    println!("[>] Listing telemetry filtered to metric=cpu.");
    let req = test::TestRequest::get()
        .uri(&format!(
            "/monitoring/devices/{}/telemetry?metric=cpu",
            device_id
        ))
        .insert_header(("Authorization", format!("Bearer {}", user_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cpu: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Filtered body: {}", cpu);
    assert_eq!(cpu.as_array().unwrap().len(), 2);

    println!("[>] Listing with limit=1 (should return the newest point).");
    let req = test::TestRequest::get()
        .uri(&format!(
            "/monitoring/devices/{}/telemetry?limit=1",
            device_id
        ))
        .insert_header(("Authorization", format!("Bearer {}", user_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let newest: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(newest.as_array().unwrap().len(), 1);
    assert_eq!(newest[0]["metric"], "rssi");
    println!("[/] Test passed: Submit, filter and limit behave.");
}

#[tokio::test]
async fn test_telemetry_unknown_device() {
    println!("\n\n[+] Running test: test_telemetry_unknown_device");
    let ctx = TestContext::new().await;
    let client = client_for(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (_user_id, user_token) = client.create_test_user().await;
    println!("[+] Test client, app and user initialized.");

    println!("[>] Submitting telemetry for a device id that does not exist.");
    let req = test::TestRequest::post()
        .uri(&format!(
            "/monitoring/devices/{}/telemetry",
            Uuid::new_v4()
        ))
        .insert_header(("Authorization", format!("Bearer {}", user_token)))
        .set_json(serde_json::json!({ "metric": "cpu", "value": "41" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: Unknown devices are a 404 for telemetry routes.");
}
