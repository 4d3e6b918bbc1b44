//! Catalog → form edits → request → snippets, end to end.

use pretty_assertions::assert_eq;
use serde_json::json;

use tryit_catalog::{Catalog, Error, ProjectConfig};
use tryit_schema::{on_field_change, validate_for_submit, ValueState, REQUIRED_MESSAGE};
use tryit_snippet::{generate, HttpMethod};

const CATALOG: &str = indoc::indoc! {r#"
    endpoints:
      - id: create-alert
        title: Create a price alert
        method: POST
        path: /alerts
        fields:
          - name: symbol
            kind: string
            required: true
          - name: purchaseValue
            kind: number
            required: true
          - name: note
            kind: string
          - name: scheduled
            kind: select
            options: ['', scheduled]
          - name: scheduledType
            kind: select
            options: [everyday, weekdays]
            requiredCondition:
              dependsOnField: scheduled
              activatingValues: [scheduled]
          - name: source
            kind: string
            hidden: true
            default: docs
        responses:
          - status: 201
            description: Alert created
            example: { "id": "a1" }
      - id: delete-alert
        title: Delete an alert
        method: DELETE
        path: /alerts/{alertId}
        fields:
          - name: alertId
            kind: string
            required: true
          - name: force
            kind: boolean
            default: false
"#};

fn config() -> ProjectConfig {
    serde_yaml_ng::from_str(indoc::indoc! {"
        base_url: https://api.example.com/v1/
        headers:
          X-Api-Key: <API_KEY>
        bearer_token: <TOKEN>
        languages: [curl, python]
    "})
    .expect("config should parse")
}

#[test]
fn post_form_to_curl() {
    let catalog = Catalog::from_yaml(CATALOG).expect("catalog should load");
    let endpoint = catalog.endpoint("create-alert").unwrap();
    let schema = endpoint.schema();

    let mut state = ValueState::bind(schema);
    for (name, raw) in [
        ("symbol", "ACME"),
        ("purchaseValue", "12.5"),
        ("note", ""),
        ("scheduled", "scheduled"),
        ("scheduledType", "weekdays"),
    ] {
        state = on_field_change(schema, &state, name, raw).unwrap().state;
    }

    let request = endpoint.snippet_request(&config(), &state.values).unwrap();
    assert_eq!(request.method(), HttpMethod::Post);
    assert_eq!(request.url(), "https://api.example.com/v1/alerts");
    assert_eq!(
        request.body(),
        Some(indoc::indoc! {r#"
            {
              "symbol": "ACME",
              "purchaseValue": 12.5,
              "scheduled": "scheduled",
              "scheduledType": "weekdays"
            }"#}),
    );

    let curl = generate("curl", &request);
    let expected = indoc::indoc! {r#"
        #!/bin/sh

        curl --request POST \
          --url 'https://api.example.com/v1/alerts' \
          --header 'X-Api-Key: <API_KEY>' \
          --header 'Authorization: Bearer <TOKEN>' \
          --header 'Content-Type: application/json' \
          --data-raw '{
          "symbol": "ACME",
          "purchaseValue": 12.5,
          "scheduled": "scheduled",
          "scheduledType": "weekdays"
        }' \
          --write-out '\n%{http_code}\n'
    "#};
    assert_eq!(curl, expected);
}

#[test]
fn submit_gate_reports_untouched_required_fields() {
    let catalog = Catalog::from_yaml(CATALOG).unwrap();
    let schema = catalog.endpoint("create-alert").unwrap().schema();
    let state = on_field_change(schema, &ValueState::bind(schema), "symbol", "ACME")
        .unwrap()
        .state;
    assert!(state.is_submittable());

    let checked = validate_for_submit(schema, &state);
    assert_eq!(checked.error("purchaseValue"), Some(REQUIRED_MESSAGE));
    assert!(!checked.is_submittable());
}

#[test]
fn delete_uses_path_and_query() {
    let catalog = Catalog::from_yaml(CATALOG).unwrap();
    let endpoint = catalog.endpoint("delete-alert").unwrap();
    let schema = endpoint.schema();

    let state = ValueState::bind(schema);
    assert_eq!(state.value("force"), Some(&json!(false)));
    let state = on_field_change(schema, &state, "alertId", "a 1").unwrap().state;

    let snippets = endpoint.snippets(&config(), &state.values).unwrap();
    assert_eq!(snippets.len(), 2);
    assert_eq!(snippets[0].label, "cURL");
    assert_eq!(snippets[1].label, "Python");
    let url = "https://api.example.com/v1/alerts/a%201?force=false";
    for snippet in &snippets {
        assert!(snippet.code.contains(url), "{}:\n{}", snippet.label, snippet.code);
        assert!(!snippet.code.contains("Content-Type"), "{}", snippet.label);
    }
}

#[test]
fn delete_without_id_fails() {
    let catalog = Catalog::from_yaml(CATALOG).unwrap();
    let endpoint = catalog.endpoint("delete-alert").unwrap();
    let state = ValueState::bind(endpoint.schema());
    let err = endpoint.snippet_request(&config(), &state.values).unwrap_err();
    assert!(matches!(err, Error::MissingPathParam { ref param, .. } if param == "alertId"));
    assert_eq!(
        err.to_string(),
        "endpoint 'delete-alert': path parameter 'alertId' has no value"
    );
}

#[test]
fn hidden_default_never_sent() {
    let catalog = Catalog::from_yaml(CATALOG).unwrap();
    let endpoint = catalog.endpoint("create-alert").unwrap();
    let state = ValueState::bind(endpoint.schema());
    let request = endpoint
        .snippet_request(&ProjectConfig::default(), &state.values)
        .unwrap();
    assert_eq!(request.body(), Some("{}"));
    assert!(!generate("python", &request).contains("docs"));
}
