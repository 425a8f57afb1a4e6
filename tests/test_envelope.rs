//! Unit tests for API envelope decoding and wire-model serialization.

use medici_analytics::error::AnalyticsError;
use medici_analytics::models::{
    ApiEnvelope, ApiPayload, PriceQuote, Recommendation, TimeSeriesPoint,
};
use medici_analytics::profit::compute_profit;

// ---------------------------------------------------------------------------
// Envelope decoding
// ---------------------------------------------------------------------------

#[test]
fn successful_envelope_unwraps_data() {
    let json = r#"{ "success": true, "data": [ { "x": 1.0, "y": 100.0 } ] }"#;
    let envelope: ApiEnvelope<Vec<TimeSeriesPoint>> = serde_json::from_str(json).unwrap();
    let points = envelope.into_result().unwrap();
    assert_eq!(points, vec![TimeSeriesPoint::new(1.0, 100.0)]);
}

#[test]
fn failed_envelope_surfaces_the_error_message() {
    let json = r#"{ "success": false, "error": "rate limited" }"#;
    let envelope: ApiEnvelope<Vec<TimeSeriesPoint>> = serde_json::from_str(json).unwrap();
    match envelope.into_result() {
        Err(AnalyticsError::Api(msg)) => assert!(msg.contains("rate limited")),
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn failed_envelope_without_message_still_errors() {
    let json = r#"{ "success": false }"#;
    let envelope: ApiEnvelope<Vec<TimeSeriesPoint>> = serde_json::from_str(json).unwrap();
    assert!(envelope.into_result().is_err());
}

#[test]
fn success_without_data_is_an_api_error() {
    let json = r#"{ "success": true }"#;
    let envelope: ApiEnvelope<Vec<TimeSeriesPoint>> = serde_json::from_str(json).unwrap();
    assert!(matches!(envelope.into_result(), Err(AnalyticsError::Api(_))));
}

// ---------------------------------------------------------------------------
// Bare-or-envelope payloads
// ---------------------------------------------------------------------------

#[test]
fn payload_decodes_bare_objects() {
    let json = r#"[ { "x": 0.0, "y": 1.0 }, { "x": 1.0, "y": 2.0 } ]"#;
    let payload: ApiPayload<Vec<TimeSeriesPoint>> = serde_json::from_str(json).unwrap();
    assert_eq!(payload.into_result().unwrap().len(), 2);
}

#[test]
fn payload_prefers_the_envelope_shape() {
    let json = r#"{ "success": false, "error": "boom" }"#;
    let payload: ApiPayload<serde_json::Value> = serde_json::from_str(json).unwrap();
    assert!(payload.into_result().is_err());
}

// ---------------------------------------------------------------------------
// Wire casing
// ---------------------------------------------------------------------------

#[test]
fn quote_uses_camel_case_on_the_wire() {
    let json = r#"{ "buyPrice": 100.0, "sellPrice": 150.0, "nights": 3, "commissionPercent": 10.0 }"#;
    let quote: PriceQuote = serde_json::from_str(json).unwrap();
    assert_eq!(quote.buy_price, 100.0);

    let out = serde_json::to_value(&quote).unwrap();
    assert!(out.get("sellPrice").is_some());
}

#[test]
fn profit_result_serializes_camel_case_fields() {
    let result = compute_profit(&PriceQuote {
        buy_price: 100.0,
        sell_price: 150.0,
        nights: 3,
        commission_percent: 10.0,
    });
    let out = serde_json::to_value(&result).unwrap();
    assert!(out.get("netProfit").is_some());
    assert!(out.get("profitPerNight").is_some());
    assert_eq!(out["recommendation"], "excellent");
}

#[test]
fn recommendation_serializes_snake_case() {
    let json = serde_json::to_string(&Recommendation::EnterPrices).unwrap();
    assert_eq!(json, "\"enter_prices\"");
}
