//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. `BookingRepo::create` is the
//! booking transaction coordinator.

pub mod booking_repo;
pub mod experience_repo;

pub use booking_repo::BookingRepo;
pub use experience_repo::ExperienceRepo;
