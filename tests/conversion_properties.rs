//! Behavioral properties of the conversion engine, checked through the public API

use rstest::rstest;
use thermogate::{
    ConversionError, Temperature, TemperatureUnit, classify, convert, format_temperature,
};

const CODES: [&str; 4] = ["C", "F", "K", "R"];

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[rstest]
fn round_trip_returns_original(
    #[values(-273.0, -100.0, -40.0, 0.0, 20.0, 36.6, 100.0, 1000.0)] celsius: f64,
) {
    for from in CODES {
        let value = convert(celsius, "C", from).unwrap();
        for to in CODES {
            let there = convert(value, from, to).unwrap();
            let back = convert(there, to, from).unwrap();
            assert_close(back, value);
        }
    }
}

#[rstest]
#[case(0.0, "C", "F", 32.0)]
#[case(100.0, "C", "F", 212.0)]
#[case(-40.0, "C", "F", -40.0)]
#[case(0.0, "C", "K", 273.15)]
#[case(-273.15, "C", "K", 0.0)]
#[case(100.0, "C", "R", 80.0)]
#[case(0.0, "C", "R", 0.0)]
fn reference_conversions_are_exact(
    #[case] value: f64,
    #[case] from: &str,
    #[case] to: &str,
    #[case] expected: f64,
) {
    assert_eq!(convert(value, from, to).unwrap(), expected);
}

#[rstest]
#[case(25.0)]
#[case(-273.15)]
#[case(-500.0)]
#[case(f64::MIN)]
fn celsius_identity_is_unchecked(#[case] value: f64) {
    assert_eq!(convert(value, "C", "C").unwrap(), value);
}

#[test]
fn same_value_below_absolute_zero_fails_once_units_differ() {
    assert!(matches!(
        convert(-500.0, "C", "K"),
        Err(ConversionError::BelowAbsoluteZero {
            scale: TemperatureUnit::Celsius,
            ..
        })
    ));
}

#[test]
fn reaumur_floor_trips_the_celsius_check() {
    // -218.52 * 5/4 rounds to just below -273.15
    let celsius = convert(-218.52, "R", "C").unwrap();
    assert_close(celsius, -273.15);
    assert!(celsius < -273.15);

    for target in ["K", "F"] {
        match convert(-218.52, "R", target) {
            Err(ConversionError::BelowAbsoluteZero { scale, value }) => {
                assert_eq!(scale, TemperatureUnit::Celsius);
                assert_close(value, -273.15);
            }
            other => panic!("expected BelowAbsoluteZero for R -> {target}, got {other:?}"),
        }
    }
}

#[test]
fn kelvin_and_fahrenheit_floors_convert() {
    assert_close(convert(0.0, "K", "F").unwrap(), -459.67);
    assert_close(convert(-459.67, "F", "K").unwrap(), 0.0);
}

#[rstest]
fn chained_conversion_returns_home(#[values(20.0, 0.0, 100.0, -40.0)] original: f64) {
    let f = convert(original, "C", "F").unwrap();
    let k = convert(f, "F", "K").unwrap();
    let back = convert(k, "K", "C").unwrap();
    assert_close(back, original);
}

#[test]
fn classification_examples() {
    assert_eq!(classify(-100.0).unwrap().label(), "extremely cold");
    assert_eq!(classify(25.0).unwrap().label(), "warm");
    assert!(matches!(
        classify(-300.0),
        Err(ConversionError::BelowAbsoluteZero { .. })
    ));
}

#[test]
fn formatting_examples() {
    assert_eq!(format_temperature(25.5, "C", 2).unwrap(), "25.50°C");
    assert_eq!(format_temperature(298.15, "K", 2).unwrap(), "298.15K");
}

#[rstest]
fn unknown_unit_is_rejected(#[values(-1000.0, 0.0, 42.0)] value: f64) {
    assert_eq!(
        convert(value, "X", "C").unwrap_err(),
        ConversionError::InvalidUnit {
            unit: "X".to_string()
        }
    );
}

#[test]
fn typed_temperature_matches_code_api() {
    let body = Temperature::new(98.6, TemperatureUnit::Fahrenheit);
    let celsius = body.convert_to(TemperatureUnit::Celsius).unwrap();
    assert_close(celsius.value, convert(98.6, "F", "C").unwrap());
    assert_eq!(celsius.unit, TemperatureUnit::Celsius);
}
