use crate::{CarbonMetric, EcoRating};

#[test]
fn test_carbon_metric_deserializes_api_payload() {
    let json = r#"{
        "id": 3,
        "co2Grams": 0.42,
        "energyKwh": 0.00051,
        "pageWeight": 2097152,
        "cleanerThanPercentage": 78.5,
        "measuredAt": "2024-06-10T08:30:00"
    }"#;

    let metric: CarbonMetric = serde_json::from_str(json).unwrap();

    assert_eq!(metric.id, 3);
    assert_eq!(metric.page_weight, 2_097_152);
    assert!((metric.page_weight_mb() - 2.0).abs() < f64::EPSILON);
    assert!((metric.energy_wh() - 0.51).abs() < 1e-9);
    assert_eq!(metric.eco_rating(), EcoRating::B);
}
