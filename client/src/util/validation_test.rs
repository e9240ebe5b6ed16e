use std::collections::HashMap;

use super::*;

struct MapForm(HashMap<&'static str, &'static str>);

impl FormFields for MapForm {
    fn value(&self, field: &str) -> Cow<'_, str> {
        Cow::Borrowed(self.0.get(field).copied().unwrap_or(""))
    }
}

fn booking_form(name: &'static str, phone: &'static str, date: &'static str, office: &'static str) -> MapForm {
    MapForm(HashMap::from([
        (FIELD_NAME, name),
        (FIELD_PHONE_NUMBER, phone),
        (FIELD_STARTED_AT, date),
        (FIELD_OFFICE_SPACE_ID, office),
    ]))
}

// =============================================================
// Rules
// =============================================================

#[test]
fn required_rejects_blank_and_whitespace() {
    assert!(!Rule::Required.accepts(""));
    assert!(!Rule::Required.accepts("   "));
    assert!(Rule::Required.accepts("Budi"));
}

#[test]
fn calendar_date_accepts_real_dates_only() {
    assert!(Rule::CalendarDate.accepts("2026-11-02"));
    assert!(Rule::CalendarDate.accepts("2028-02-29"));
    assert!(!Rule::CalendarDate.accepts("2026-02-30"));
    assert!(!Rule::CalendarDate.accepts("02/11/2026"));
    assert!(!Rule::CalendarDate.accepts("tomorrow"));
}

#[test]
fn phone_number_accepts_common_formats() {
    assert!(Rule::PhoneNumber.accepts("081234567890"));
    assert!(Rule::PhoneNumber.accepts("+62 812-3456-7890"));
    assert!(!Rule::PhoneNumber.accepts("call me"));
    assert!(!Rule::PhoneNumber.accepts("+"));
    assert!(!Rule::PhoneNumber.accepts("0812abc"));
}

// =============================================================
// Booking schema
// =============================================================

#[test]
fn booking_schema_accepts_complete_form() {
    let form = booking_form("Budi", "081234567890", "2026-11-02", "7");
    assert_eq!(validate(BOOKING_SCHEMA, &form), Ok(()));
}

#[test]
fn booking_schema_reports_each_missing_field_with_its_message() {
    let cases = [
        (booking_form("", "0812", "2026-11-02", "7"), FIELD_NAME, "*Name is required"),
        (booking_form("Budi", "", "2026-11-02", "7"), FIELD_PHONE_NUMBER, "*Phone number is required"),
        (booking_form("Budi", "0812", "", "7"), FIELD_STARTED_AT, "*Date is required"),
        (booking_form("Budi", "0812", "2026-11-02", ""), FIELD_OFFICE_SPACE_ID, "*Office is not available"),
    ];
    for (form, field, message) in cases {
        let errors = validate(BOOKING_SCHEMA, &form).unwrap_err();
        assert_eq!(errors.len(), 1, "field {field}");
        assert_eq!(errors.message_for(field), Some(message));
    }
}

#[test]
fn booking_schema_reports_all_missing_fields_together() {
    let form = booking_form("", "", "", "");
    let errors = validate(BOOKING_SCHEMA, &form).unwrap_err();
    assert_eq!(errors.len(), 4);
    let fields: Vec<_> = errors.iter().map(|issue| issue.field).collect();
    assert_eq!(fields, vec![FIELD_NAME, FIELD_PHONE_NUMBER, FIELD_STARTED_AT, FIELD_OFFICE_SPACE_ID]);
}

#[test]
fn booking_schema_reports_only_first_failing_rule_per_field() {
    let form = booking_form("Budi", "0812", "not-a-date", "7");
    let errors = validate(BOOKING_SCHEMA, &form).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message_for(FIELD_STARTED_AT), Some("*Date must be a valid date"));

    let form = booking_form("Budi", "phone", "2026-11-02", "7");
    let errors = validate(BOOKING_SCHEMA, &form).unwrap_err();
    assert_eq!(errors.message_for(FIELD_PHONE_NUMBER), Some("*Phone number is invalid"));
}

// =============================================================
// Check-booking schema
// =============================================================

#[test]
fn check_schema_requires_code_and_phone() {
    let form = MapForm(HashMap::new());
    let errors = validate(CHECK_BOOKING_SCHEMA, &form).unwrap_err();
    assert_eq!(errors.message_for(FIELD_BOOKING_TRX_ID), Some("Code booking is required"));
    assert_eq!(errors.message_for(FIELD_PHONE_NUMBER), Some("Phone Number is required"));
}

#[test]
fn check_schema_accepts_filled_form() {
    let form = MapForm(HashMap::from([(FIELD_BOOKING_TRX_ID, "OH1234"), (FIELD_PHONE_NUMBER, "0812")]));
    assert_eq!(validate(CHECK_BOOKING_SCHEMA, &form), Ok(()));
}

#[test]
fn message_for_unflagged_field_is_none() {
    let form = booking_form("", "0812", "2026-11-02", "7");
    let errors = validate(BOOKING_SCHEMA, &form).unwrap_err();
    assert_eq!(errors.message_for(FIELD_PHONE_NUMBER), None);
}
