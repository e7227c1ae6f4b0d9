//! End-to-end checks through the public API, starting from raw strings the
//! way a front end would.

use chrono::NaiveDate;
use utilkit_core::calculations::bmi::{self, BmiCategory, BmiInput, UnitSystem};
use utilkit_core::calculations::dates;
use utilkit_core::codec::{decode, encode, CodecKind};
use utilkit_core::parse::parse_date;
use utilkit_core::{bases, units, EngineError, ParseError};

#[test]
fn length_conversion_from_text() {
    let cm = units::convert_raw("length", "m", "cm", "1").unwrap();
    assert_eq!(cm, 100.0);
    assert_eq!(units::format_conversion("length", cm), "100");
}

#[test]
fn temperature_round_trip_is_close() {
    for (from, to) in [("celsius", "kelvin"), ("fahrenheit", "celsius"), ("kelvin", "fahrenheit")] {
        let v = 37.5;
        let there = units::convert("temperature", from, to, v).unwrap();
        let back = units::convert("temperature", to, from, there).unwrap();
        assert!((back - v).abs() < 1e-9);
    }
}

#[test]
fn base_conversion_round_trip() {
    assert_eq!(bases::to_base(255, 16).unwrap(), "FF");
    assert_eq!(bases::from_base("ff", 16).unwrap(), 255);

    let view = bases::convert_number("11111111", 2).unwrap();
    assert_eq!(view.value, 255);
    assert_eq!(view.hex_formatted, "0xFF");
}

#[test]
fn error_codes_reach_the_caller() {
    let err: EngineError = bases::from_base("12", 2).unwrap_err().into();
    assert_eq!(err.error_code(), "INVALID_DIGIT");

    let err = units::convert_raw("length", "m", "furlong", "1").unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_UNIT");

    let err: EngineError = decode(CodecKind::Uri, "%E").unwrap_err().into();
    assert_eq!(err.error_code(), "MALFORMED");

    assert_eq!(
        units::convert_raw("length", "m", "cm", " ").unwrap_err(),
        EngineError::Parse(ParseError::Empty)
    );
}

#[test]
fn base64_single_letter() {
    assert_eq!(encode(CodecKind::Base64, "A"), "QQ==");
    assert_eq!(decode(CodecKind::Base64, "QQ==").unwrap(), "A");
}

#[test]
fn every_codec_round_trips_ascii() {
    let text = "Tom & Jerry <3 \"cheese\" at 50% off / today?";
    for kind in CodecKind::ALL {
        assert_eq!(decode(kind, &encode(kind, text)).unwrap(), text, "{}", kind);
    }
}

#[test]
fn bmi_from_text() {
    let input = BmiInput::parse("170", "70", UnitSystem::Metric).unwrap();
    let result = bmi::calculate(&input).unwrap();
    assert_eq!(result.bmi_display(), "24.2");
    assert_eq!(result.category, BmiCategory::Normal);
}

#[test]
fn age_is_decremented_before_birthday() {
    let today = parse_date("2025-04-10").unwrap();
    let birth = parse_date("2000-05-11").unwrap();
    let result = dates::age(birth, today).unwrap();
    assert_eq!(result.exact_age, 24);
    assert_eq!(result.next_birthday.date, NaiveDate::from_ymd_opt(2025, 5, 11).unwrap());
    assert_eq!(result.next_birthday.days_left, 31);
}
