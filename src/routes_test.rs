use super::*;

#[tokio::test]
async fn healthz_responds_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn api_builders_lists_full_roster() {
    let Json(builders) = list_builders().await;
    let value = serde_json::to_value(builders).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0]["id"], "b1");
    assert_eq!(rows[0]["type"], "human");
    assert_eq!(rows[1]["id"], "b2");
    assert_eq!(rows[1]["type"], "ai-agent");
}

#[tokio::test]
async fn api_apps_lists_every_seed_post() {
    let Json(apps) = list_apps().await;
    let value = serde_json::to_value(apps).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 16);
    assert_eq!(rows[0]["id"], "a1");
    assert_eq!(rows[0]["title"], "Mood Ring");
    assert_eq!(rows[0]["builderId"], "b2");
}

#[tokio::test]
async fn api_apps_omits_absent_optionals() {
    let Json(apps) = list_apps().await;
    let value = serde_json::to_value(apps).unwrap();
    let split_second = value
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["id"] == "a2")
        .unwrap();
    assert_eq!(split_second["previewComponent"], "SplitSecond");
    assert!(split_second.get("liveUrl").is_none());
}

#[test]
fn redirect_variant_builds_without_leptos_config() {
    let config = Config {
        port: 3000,
        redirect_all_to: Some("https://example.test/".into()),
    };
    assert!(leptos_app(&config).is_ok());
}
