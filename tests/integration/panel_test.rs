//! Panel inbound requests through the full client pipeline

use super::panel_client;
use request_pipeline::panel::{Inbound, InboundApi};
use request_pipeline::RequestError;

#[test]
fn test_add_inbound_is_form_encoded() {
    let mut inbound = Inbound::new("vmess", 10086);
    inbound.remark = "hk 01".to_string();
    inbound.settings = r#"{"clients":[]}"#.to_string();

    let request = InboundApi::default().add(&inbound).unwrap();
    let prepared = panel_client().prepare(request).unwrap();

    let body = prepared.body_text().unwrap();
    assert!(body.contains("port=10086"));
    assert!(body.contains("protocol=vmess"));
    assert!(body.contains("remark=hk%2001"));
    assert!(body.contains("settings=%7B%22clients%22%3A%5B%5D%7D"));
    assert!(body.contains("enable=true"));
    assert_eq!(
        prepared.content_type(),
        Some("application/x-www-form-urlencoded; charset=UTF-8")
    );
}

#[test]
fn test_add_batch_is_json_encoded() {
    let inbounds = vec![Inbound::new("vless", 443), Inbound::new("trojan", 8443)];

    let request = InboundApi::default().add_batch(&inbounds).unwrap();
    let prepared = panel_client().prepare(request).unwrap();

    let body: serde_json::Value = serde_json::from_str(prepared.body_text().unwrap()).unwrap();
    let decoded: Vec<Inbound> = serde_json::from_value(body["inbounds"].clone()).unwrap();
    assert_eq!(decoded, inbounds);
    assert_eq!(prepared.content_type(), Some("application/json"));
}

#[test]
fn test_add_batch_rejects_empty() {
    let result = InboundApi::default().add_batch(&[]);
    assert!(matches!(result, Err(RequestError::Validation(_))));
}

#[test]
fn test_list_and_delete_have_no_body() {
    let client = panel_client();
    let api = InboundApi::default();

    let list = client.prepare(api.list()).unwrap();
    assert_eq!(list.data, None);
    assert_eq!(list.url, "http://127.0.0.1:54321/xui/inbound/list");

    let delete = client.prepare(api.delete(12)).unwrap();
    assert_eq!(delete.data, None);
    assert!(delete.url.ends_with("/inbound/del/12"));
}

#[test]
fn test_update_inbound() {
    let inbound = Inbound::new("socks", 1080);
    let request = InboundApi::default().update(4, &inbound).unwrap();
    let prepared = panel_client().prepare(request).unwrap();

    assert!(prepared.url.ends_with("/inbound/update/4"));
    let body = prepared.body_text().unwrap();
    assert!(body.starts_with("up=0&down=0&total=0&remark=&enable=true"));
    assert!(!body.contains("id="));
}
