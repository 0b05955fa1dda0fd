mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn list_all_properties_includes_created_record() -> Result<()> {
    let Some(server) = common::ensure_server().await? else { return Ok(()) };
    let client = reqwest::Client::new();
    let db = common::pool().await?;

    let account = common::unique("acc");
    common::seed_account(&db, &account).await?;
    let key = common::unique("key");

    let res = client
        .post(format!(
            "{}/playerAccountProperties/{}/addProperty",
            server.base_url, account
        ))
        .json(&json!({ "key": key, "value": "v1", "active": true }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!(
            "{}/playerAccountProperties/properties",
            server.base_url
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()[reqwest::header::CONTENT_TYPE]
        .to_str()?
        .starts_with("application/json"));

    let text = res.text().await?;
    // Bodies are pretty-printed with 2-space indentation
    assert!(text.contains("\n  "), "expected pretty body: {}", text);

    let body: Value = serde_json::from_str(&text)?;
    let list = body.as_array().expect("array body");
    assert!(
        list.iter()
            .any(|p| p["key"] == key.as_str() && p["account"]["id"] == account.as_str()),
        "created property missing from global list"
    );

    Ok(())
}

#[tokio::test]
async fn properties_by_key_is_exact_and_case_sensitive() -> Result<()> {
    let Some(server) = common::ensure_server().await? else { return Ok(()) };
    let client = reqwest::Client::new();
    let db = common::pool().await?;

    let account_a = common::unique("acc");
    let account_b = common::unique("acc");
    common::seed_account(&db, &account_a).await?;
    common::seed_account(&db, &account_b).await?;
    let key = common::unique("Speed");

    for account in [&account_a, &account_b] {
        let res = client
            .post(format!(
                "{}/playerAccountProperties/{}/addProperty",
                server.base_url, account
            ))
            .json(&json!({ "key": key, "value": "10", "active": false }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    // Exact key matches across all accounts
    let res = client
        .get(format!(
            "{}/playerAccountProperties/propertiesByKey/{}",
            server.base_url, key
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let list = res.json::<Value>().await?;
    let list = list.as_array().expect("array body").clone();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|p| p["key"] == key.as_str()));

    // Case differs: no partial or case-insensitive match, empty payload
    let res = client
        .get(format!(
            "{}/playerAccountProperties/propertiesByKey/{}",
            server.base_url,
            key.to_lowercase()
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "[]");

    Ok(())
}

#[tokio::test]
async fn properties_by_value_missing_returns_empty_payload() -> Result<()> {
    let Some(server) = common::ensure_server().await? else { return Ok(()) };
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/playerAccountProperties/propertiesByValue/{}",
            server.base_url,
            common::unique("no-such-value")
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await?, "[]");

    Ok(())
}
