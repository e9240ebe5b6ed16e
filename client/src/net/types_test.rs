use super::*;

// =============================================================
// Helpers
// =============================================================

fn office_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "slug": "angga-park",
        "name": "Angga Park",
        "thumbnail": "thumbnails/angga-park.png",
        "price": 5_000_000,
        "duration": 20,
        "about": "Quiet space near the station.",
        "address": "Jl. Sudirman 1",
        "city": { "name": "Jakarta" },
        "benefits": [{ "name": "Free Wi-Fi" }, { "name": "Coffee" }],
        "photos": [{ "id": 1, "photo": "photos/a.png" }, { "photo": "photos/b.png" }]
    })
}

// =============================================================
// Office
// =============================================================

#[test]
fn office_deserializes_full_shape() {
    let office: Office = serde_json::from_value(office_json()).unwrap();
    assert_eq!(office.id, 7);
    assert_eq!(office.slug, "angga-park");
    assert_eq!(office.price, 5_000_000);
    assert_eq!(office.duration, 20);
    assert_eq!(office.city.name, "Jakarta");
    assert_eq!(office.benefits.len(), 2);
    assert_eq!(office.photos[0].id, Some(1));
    assert_eq!(office.photos[1].id, None);
    assert_eq!(office.photos[1].photo, "photos/b.png");
}

#[test]
fn office_accepts_decimal_strings_for_numbers() {
    let mut json = office_json();
    json["price"] = serde_json::json!("5000000.00");
    json["duration"] = serde_json::json!("20");
    json["id"] = serde_json::json!(7.0);
    let office: Office = serde_json::from_value(json).unwrap();
    assert_eq!(office.price, 5_000_000);
    assert_eq!(office.duration, 20);
    assert_eq!(office.id, 7);
}

#[test]
fn office_rejects_fractional_price() {
    let mut json = office_json();
    json["price"] = serde_json::json!(10.5);
    assert!(serde_json::from_value::<Office>(json).is_err());
}

#[test]
fn office_defaults_missing_lists_and_text() {
    let json = serde_json::json!({
        "id": 1,
        "slug": "s",
        "name": "n",
        "thumbnail": "t.png",
        "price": 1000,
        "duration": 1,
        "city": { "name": "Bandung" }
    });
    let office: Office = serde_json::from_value(json).unwrap();
    assert!(office.benefits.is_empty());
    assert!(office.photos.is_empty());
    assert_eq!(office.about, "");
    assert_eq!(office.address, "");
}

// =============================================================
// City
// =============================================================

#[test]
fn city_reads_camel_case_office_list() {
    let json = serde_json::json!({
        "id": 3,
        "name": "Jakarta",
        "slug": "jakarta",
        "photo": "cities/jakarta.png",
        "officeSpaces": [office_json()]
    });
    let city: City = serde_json::from_value(json).unwrap();
    assert_eq!(city.office_spaces.len(), 1);
    assert_eq!(city.office_spaces[0].slug, "angga-park");
}

#[test]
fn city_accepts_snake_case_office_list() {
    let json = serde_json::json!({
        "name": "Jakarta",
        "slug": "jakarta",
        "office_spaces": [office_json()]
    });
    let city: City = serde_json::from_value(json).unwrap();
    assert_eq!(city.id, None);
    assert_eq!(city.office_spaces.len(), 1);
}

// =============================================================
// Bookings
// =============================================================

#[test]
fn booking_request_serializes_contract_fields() {
    let request = BookingRequest {
        name: "Budi".to_owned(),
        phone_number: "0812".to_owned(),
        started_at: "2026-11-02".to_owned(),
        office_space_id: 7,
        total_amount: 4_999_123,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Budi",
            "phone_number": "0812",
            "started_at": "2026-11-02",
            "office_space_id": 7,
            "total_amount": 4_999_123
        })
    );
}

#[test]
fn booking_tolerates_sparse_response() {
    let json = serde_json::json!({
        "booking_trx_id": "OH1234",
        "name": "Budi",
        "phone_number": "0812",
        "started_at": "2026-11-02",
        "id": 99,
        "is_paid": false
    });
    let booking: Booking = serde_json::from_value(json).unwrap();
    assert_eq!(booking.booking_trx_id, "OH1234");
    assert_eq!(booking.total_amount, None);
    assert_eq!(booking.office_space_id, None);
}

#[test]
fn booking_keeps_trx_id_when_echoed_fields_change_shape() {
    let json = serde_json::json!({
        "booking_trx_id": "OH1234",
        "name": null,
        "phone_number": 81_234_567,
        "total_amount": "4999877"
    });
    let booking: Booking = serde_json::from_value(json).unwrap();
    assert_eq!(booking.booking_trx_id, "OH1234");
    assert_eq!(booking.name, "");
    assert_eq!(booking.phone_number, "81234567");
    assert_eq!(booking.started_at, "");
    assert_eq!(booking.total_amount, Some(4_999_877));
}

#[test]
fn booking_details_accepts_numeric_paid_flag() {
    let json = serde_json::json!({
        "booking_trx_id": "OH1234",
        "name": "Budi",
        "phone_number": "0812",
        "started_at": "2026-11-02",
        "ended_at": "2026-11-22",
        "is_paid": 1,
        "duration": "20",
        "total_amount": "4999123",
        "office": office_json()
    });
    let details: BookingDetails = serde_json::from_value(json).unwrap();
    assert!(details.is_paid);
    assert_eq!(details.duration, 20);
    assert_eq!(details.total_amount, 4_999_123);
    assert_eq!(details.office.name, "Angga Park");
}

#[test]
fn booking_details_rejects_other_paid_numbers() {
    let json = serde_json::json!({
        "booking_trx_id": "OH1234",
        "name": "Budi",
        "phone_number": "0812",
        "started_at": "2026-11-02",
        "is_paid": 2,
        "duration": 20,
        "total_amount": 1,
        "office": office_json()
    });
    assert!(serde_json::from_value::<BookingDetails>(json).is_err());
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_null_data_is_none() {
    let envelope: Envelope<Office> = serde_json::from_str(r#"{"data":null}"#).unwrap();
    assert!(envelope.data.is_none());
}

#[test]
fn envelope_missing_data_is_none() {
    let envelope: Envelope<Office> = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
    assert!(envelope.data.is_none());
}
