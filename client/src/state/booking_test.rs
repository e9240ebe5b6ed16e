use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::net::types::CityRef;

fn office(id: i64, price: i64) -> Office {
    Office {
        id,
        slug: "angga-park".to_owned(),
        name: "Angga Park".to_owned(),
        thumbnail: "thumbnails/angga-park.png".to_owned(),
        price,
        duration: 20,
        about: String::new(),
        address: String::new(),
        city: CityRef { name: "Jakarta".to_owned() },
        benefits: Vec::new(),
        photos: Vec::new(),
    }
}

fn filled_form() -> BookingForm {
    let mut form = BookingForm::default();
    form.set_field(FIELD_NAME, " Budi Santoso ".to_owned());
    form.set_field(FIELD_PHONE_NUMBER, "081234567890".to_owned());
    form.set_field(FIELD_STARTED_AT, "2026-11-02".to_owned());
    form
}

// =============================================================
// BookingQuote
// =============================================================

#[test]
fn quote_subtracts_unique_code_from_price() {
    let quote = BookingQuote::new(5_000_000, 123);
    assert_eq!(quote.subtotal, 5_000_000);
    assert_eq!(quote.unique_code, 123);
    assert_eq!(quote.grand_total, 4_999_877);
}

#[test]
fn generated_codes_are_three_digits_and_total_matches() {
    for seed in 0..500 {
        let mut rng = StdRng::seed_from_u64(seed);
        let quote = BookingQuote::generate(2_500_000, &mut rng);
        assert!((100..=999).contains(&quote.unique_code), "seed {seed}: {}", quote.unique_code);
        assert_eq!(quote.grand_total, 2_500_000 - i64::from(quote.unique_code));
    }
}

#[test]
fn generate_is_deterministic_for_a_seed() {
    let a = BookingQuote::generate(1_000_000, &mut StdRng::seed_from_u64(42));
    let b = BookingQuote::generate(1_000_000, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

// =============================================================
// BookingForm
// =============================================================

#[test]
fn set_field_ignores_unknown_and_protected_fields() {
    let mut form = BookingForm::default();
    form.set_field("office_space_id", "99".to_owned());
    form.set_field("total_amount", "1".to_owned());
    form.set_field("nickname", "x".to_owned());
    assert_eq!(form, BookingForm::default());
}

#[test]
fn attach_binds_office_and_grand_total_without_clearing_input() {
    let mut form = filled_form();
    let quote = BookingQuote::new(5_000_000, 500);
    form.attach(&office(7, 5_000_000), &quote);
    assert_eq!(form.office_space_id, Some(7));
    assert_eq!(form.total_amount, 4_999_500);
    assert_eq!(form.phone_number, "081234567890");
}

#[test]
fn prepare_builds_trimmed_request() {
    let mut form = filled_form();
    form.attach(&office(7, 5_000_000), &BookingQuote::new(5_000_000, 500));
    let request = form.prepare().unwrap();
    assert_eq!(
        request,
        BookingRequest {
            name: "Budi Santoso".to_owned(),
            phone_number: "081234567890".to_owned(),
            started_at: "2026-11-02".to_owned(),
            office_space_id: 7,
            total_amount: 4_999_500,
        }
    );
}

#[test]
fn prepare_refuses_form_without_office() {
    let errors = filled_form().prepare().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message_for(FIELD_OFFICE_SPACE_ID), Some("*Office is not available"));
}

#[test]
fn prepare_names_the_missing_field() {
    let mut form = filled_form();
    form.attach(&office(7, 5_000_000), &BookingQuote::new(5_000_000, 500));
    form.set_field(FIELD_STARTED_AT, String::new());
    let errors = form.prepare().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message_for(FIELD_STARTED_AT), Some("*Date is required"));
}

// =============================================================
// BookingConfirmation
// =============================================================

#[test]
fn confirmation_exposes_transaction_id() {
    let confirmation = BookingConfirmation {
        office: office(7, 5_000_000),
        booking: Booking {
            booking_trx_id: "OH1234".to_owned(),
            name: "Budi".to_owned(),
            phone_number: "0812".to_owned(),
            started_at: "2026-11-02".to_owned(),
            total_amount: Some(4_999_500),
            office_space_id: Some(7),
        },
    };
    assert_eq!(confirmation.trx_id(), "OH1234");
    assert_eq!(SUCCESS_ROUTE, "/success-booking");
}
