//! Booking form, order quote, and confirmation handoff.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BookOfficePage` owns a `BookingForm` and a `BookingQuote` for the office
//! it loaded. A successful submission produces a `BookingConfirmation`,
//! which is published through context before navigating to
//! [`SUCCESS_ROUTE`]; the confirmation and check-booking pages read it back.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use std::borrow::Cow;

use rand::Rng;

use crate::net::types::{Booking, BookingRequest, Office};
use crate::util::validation::{
    BOOKING_SCHEMA, FIELD_NAME, FIELD_OFFICE_SPACE_ID, FIELD_PHONE_NUMBER, FIELD_STARTED_AT, FieldErrors,
    FormFields, validate,
};

pub const SUCCESS_ROUTE: &str = "/success-booking";

pub const UNIQUE_CODE_MIN: u16 = 100;
pub const UNIQUE_CODE_MAX: u16 = 999;

/// Order summary shown next to the booking form.
///
/// The unique code is a random three-digit amount subtracted from the price
/// so each transfer can be matched to its invoice by amount alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookingQuote {
    pub subtotal: i64,
    pub unique_code: u16,
    pub grand_total: i64,
}

impl BookingQuote {
    pub fn new(price: i64, unique_code: u16) -> Self {
        Self { subtotal: price, unique_code, grand_total: price - i64::from(unique_code) }
    }

    /// Quote `price` with a fresh code drawn from `rng`.
    pub fn generate<R: Rng + ?Sized>(price: i64, rng: &mut R) -> Self {
        Self::new(price, rng.gen_range(UNIQUE_CODE_MIN..=UNIQUE_CODE_MAX))
    }
}

/// Editable state of the booking form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub phone_number: String,
    pub started_at: String,
    /// Set once the office has loaded; submission is refused without it.
    pub office_space_id: Option<i64>,
    pub total_amount: i64,
}

impl BookingForm {
    /// Bind the form to a loaded office and its quote, keeping typed input.
    pub fn attach(&mut self, office: &Office, quote: &BookingQuote) {
        self.office_space_id = Some(office.id);
        self.total_amount = quote.grand_total;
    }

    /// Update a text field by its input name. Unknown names are ignored.
    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            FIELD_NAME => self.name = value,
            FIELD_PHONE_NUMBER => self.phone_number = value,
            FIELD_STARTED_AT => self.started_at = value,
            _ => {}
        }
    }

    /// Validate and build the request body.
    ///
    /// # Errors
    ///
    /// Returns the per-field issues when any rule of the booking schema fails;
    /// no request is built in that case.
    pub fn prepare(&self) -> Result<BookingRequest, FieldErrors> {
        validate(BOOKING_SCHEMA, self)?;
        Ok(BookingRequest {
            name: self.name.trim().to_owned(),
            phone_number: self.phone_number.trim().to_owned(),
            started_at: self.started_at.trim().to_owned(),
            // Presence checked by the schema.
            office_space_id: self.office_space_id.unwrap_or_default(),
            total_amount: self.total_amount,
        })
    }
}

impl FormFields for BookingForm {
    fn value(&self, field: &str) -> Cow<'_, str> {
        match field {
            FIELD_NAME => Cow::Borrowed(&self.name),
            FIELD_PHONE_NUMBER => Cow::Borrowed(&self.phone_number),
            FIELD_STARTED_AT => Cow::Borrowed(&self.started_at),
            FIELD_OFFICE_SPACE_ID => self
                .office_space_id
                .map_or(Cow::Borrowed(""), |id| Cow::Owned(id.to_string())),
            _ => Cow::Borrowed(""),
        }
    }
}

/// What the confirmation page needs: the booked office and the created record.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingConfirmation {
    pub office: Office,
    pub booking: Booking,
}

impl BookingConfirmation {
    pub fn trx_id(&self) -> &str {
        &self.booking.booking_trx_id
    }
}
