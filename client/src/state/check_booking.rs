//! Check-booking form state.

#[cfg(test)]
#[path = "check_booking_test.rs"]
mod check_booking_test;

use std::borrow::Cow;

use super::booking::BookingConfirmation;
use super::fetch::FetchState;
use crate::net::types::{BookingDetails, CheckBookingRequest};
use crate::util::validation::{
    CHECK_BOOKING_SCHEMA, FIELD_BOOKING_TRX_ID, FIELD_PHONE_NUMBER, FieldErrors, FormFields, validate,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckBookingForm {
    pub phone_number: String,
    pub booking_trx_id: String,
}

impl CheckBookingForm {
    /// Start from the booking just made in this session, if any.
    pub fn prefilled(confirmation: Option<&BookingConfirmation>) -> Self {
        confirmation.map_or_else(Self::default, |c| Self {
            phone_number: c.booking.phone_number.clone(),
            booking_trx_id: c.booking.booking_trx_id.clone(),
        })
    }

    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            FIELD_PHONE_NUMBER => self.phone_number = value,
            FIELD_BOOKING_TRX_ID => self.booking_trx_id = value,
            _ => {}
        }
    }

    /// # Errors
    ///
    /// Returns the per-field issues when the code or phone number is missing
    /// or malformed.
    pub fn prepare(&self) -> Result<CheckBookingRequest, FieldErrors> {
        validate(CHECK_BOOKING_SCHEMA, self)?;
        Ok(CheckBookingRequest {
            phone_number: self.phone_number.trim().to_owned(),
            booking_trx_id: self.booking_trx_id.trim().to_owned(),
        })
    }

    /// Validate and reset the previous lookup result. Valid input leaves the
    /// lookup `Loading`; invalid input clears it so no earlier details or
    /// error stay on screen next to the field errors.
    ///
    /// # Errors
    ///
    /// Same as [`Self::prepare`].
    pub fn start_lookup(
        &self,
        lookup: &mut Option<FetchState<BookingDetails>>,
    ) -> Result<CheckBookingRequest, FieldErrors> {
        let prepared = self.prepare();
        *lookup = prepared.is_ok().then_some(FetchState::Loading);
        prepared
    }
}

impl FormFields for CheckBookingForm {
    fn value(&self, field: &str) -> Cow<'_, str> {
        match field {
            FIELD_PHONE_NUMBER => Cow::Borrowed(&self.phone_number),
            FIELD_BOOKING_TRX_ID => Cow::Borrowed(&self.booking_trx_id),
            _ => Cow::Borrowed(""),
        }
    }
}
