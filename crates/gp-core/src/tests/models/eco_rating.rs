use crate::EcoRating;

use std::str::FromStr;

#[test]
fn test_from_co2_band_edges() {
    assert_eq!(EcoRating::from_co2(0.0), EcoRating::APlus);
    assert_eq!(EcoRating::from_co2(0.0999), EcoRating::APlus);
    assert_eq!(EcoRating::from_co2(0.1), EcoRating::A);
    assert_eq!(EcoRating::from_co2(0.3), EcoRating::B);
    assert_eq!(EcoRating::from_co2(0.5), EcoRating::C);
    assert_eq!(EcoRating::from_co2(0.8), EcoRating::D);
    assert_eq!(EcoRating::from_co2(1.2), EcoRating::E);
    assert_eq!(EcoRating::from_co2(2.0), EcoRating::F);
    assert_eq!(EcoRating::from_co2(50.0), EcoRating::F);
}

#[test]
fn test_from_co2_out_of_band_is_f() {
    assert_eq!(EcoRating::from_co2(-0.1), EcoRating::F);
    assert_eq!(EcoRating::from_co2(f64::NAN), EcoRating::F);
}

#[test]
fn test_eco_rating_display_name() {
    assert_eq!(EcoRating::APlus.display_name(), "A+");
    assert_eq!(EcoRating::APlus.as_str(), "A_PLUS");
    assert_eq!(EcoRating::C.to_string(), "C");
}

#[test]
fn test_eco_rating_from_str() {
    assert_eq!(EcoRating::from_str("A_PLUS").unwrap(), EcoRating::APlus);
    assert_eq!(EcoRating::from_str("a+").unwrap(), EcoRating::APlus);
    assert_eq!(EcoRating::from_str("b").unwrap(), EcoRating::B);
    assert!(EcoRating::from_str("G").is_err());
}

#[test]
fn test_eco_rating_serde_uses_wire_names() {
    let json = serde_json::to_string(&EcoRating::APlus).unwrap();
    assert_eq!(json, r#""A_PLUS""#);

    let parsed: EcoRating = serde_json::from_str(r#""E""#).unwrap();
    assert_eq!(parsed, EcoRating::E);
}
