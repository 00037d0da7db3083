//! 값 입력 검증 회귀 테스트. 원본 폼의 "소수점 제거 후 전부 숫자" 검사를
//! 그대로 유지하는지 확인한다.

use co2sys_toolbox::carbonate::validation::{validate, RawEntries, ValidationError};

fn entries(fields: [&str; 10]) -> RawEntries {
    RawEntries::from_array(fields)
}

#[test]
fn one_empty_field_reports_fields_missing() {
    let raw = entries(["1500", "", "35", "25", "10", "2", "1", "0.1", "0.1", "0.1"]);
    assert_eq!(validate(&raw), Err(ValidationError::FieldsMissing));
}

#[test]
fn whitespace_only_field_reports_fields_missing() {
    let raw = entries(["1500", "   ", "35", "25", "10", "2", "1", "0.1", "0.1", "0.1"]);
    assert_eq!(validate(&raw), Err(ValidationError::FieldsMissing));
}

#[test]
fn letters_in_a_field_report_non_numeric() {
    let raw = entries(["15a0", "2000", "35", "25", "10", "2", "1", "0.1", "0.1", "0.1"]);
    assert_eq!(validate(&raw), Err(ValidationError::NonNumeric));
}

#[test]
fn missing_check_runs_before_numeric_check() {
    // 빈 필드와 잘못된 숫자가 같이 있으면 "누락" 쪽이 먼저 보고된다.
    let raw = entries(["15a0", "", "35", "25", "10", "2", "1", "0.1", "0.1", "0.1"]);
    assert_eq!(validate(&raw), Err(ValidationError::FieldsMissing));
}

#[test]
fn negative_numbers_are_rejected_by_the_crude_check() {
    let raw = entries(["-1500", "2000", "35", "25", "10", "2", "1", "0.1", "0.1", "0.1"]);
    assert_eq!(validate(&raw), Err(ValidationError::NonNumeric));
}

#[test]
fn scientific_notation_is_rejected_by_the_crude_check() {
    let raw = entries(["1.5e3", "2000", "35", "25", "10", "2", "1", "0.1", "0.1", "0.1"]);
    assert_eq!(validate(&raw), Err(ValidationError::NonNumeric));
}

#[test]
fn bare_decimal_point_is_rejected() {
    let raw = entries([".", "2000", "35", "25", "10", "2", "1", "0.1", "0.1", "0.1"]);
    assert_eq!(validate(&raw), Err(ValidationError::NonNumeric));
}

#[test]
fn several_decimal_points_are_rejected() {
    // 숫자만 남는 문자열이라도 f64로 읽을 수 없으면 같은 오류로 보고한다.
    let raw = entries(["1.5.0", "2000", "35", "25", "10", "2", "1", "0.1", "0.1", "0.1"]);
    assert_eq!(validate(&raw), Err(ValidationError::NonNumeric));
}

#[test]
fn valid_fields_parse_into_frozen_inputs() {
    let raw = entries([
        "1500", "2000", "35", "25", "10", "2", "1", "0.1", "0.1", "0.1",
    ]);
    let parsed = validate(&raw).expect("valid inputs");
    assert_eq!(parsed.par1, 1500.0);
    assert_eq!(parsed.par2, 2000.0);
    assert_eq!(parsed.salinity, 35.0);
    assert_eq!(parsed.temperature, 25.0);
    assert_eq!(parsed.pressure, 10.0);
    assert_eq!(parsed.par1_uncertainty, 2.0);
    assert_eq!(parsed.par2_uncertainty, 1.0);
    assert_eq!(parsed.salinity_uncertainty, 0.1);
    assert_eq!(parsed.temperature_uncertainty, 0.1);
    assert_eq!(parsed.pressure_uncertainty, 0.1);
}

#[test]
fn decimal_values_are_accepted() {
    let raw = entries([
        "1500.5", "2000.25", "35.0", "25.1", "10.0", "2.0", "1.0", "0.1", "0.1", "0.1",
    ]);
    let parsed = validate(&raw).expect("decimal inputs");
    assert_eq!(parsed.par1, 1500.5);
    assert_eq!(parsed.par2, 2000.25);
}
