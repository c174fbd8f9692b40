use std::time::SystemTime;
use time::{
    OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

pub mod common;
pub mod game;
pub mod health;
pub mod score;
pub mod user;
pub mod validation;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Render the calendar date of a timestamp for score listings.
fn format_date(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&DATE_FORMAT)
        .unwrap_or_else(|_| "invalid-date".into())
}
