//! Booking reference generation.

use rand::Rng;

/// Length of a user-facing booking reference.
pub const REFERENCE_LENGTH: usize = 8;

/// Characters a booking reference may contain. Uppercase-only so the
/// reference survives being read over the phone or typed back in.
const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a random booking reference, e.g. `F8A9C1D2`.
///
/// Drawn from the thread-local CSPRNG. Uniqueness is not guaranteed here:
/// the `bookings.booking_reference` unique index is the arbiter, and the
/// booking coordinator retries with a fresh reference on a collision.
pub fn generate_booking_reference() -> String {
    let mut rng = rand::rng();
    (0..REFERENCE_LENGTH)
        .map(|_| REFERENCE_CHARSET[rng.random_range(0..REFERENCE_CHARSET.len())] as char)
        .collect()
}
