//! Text formatting for the bookings table, stats cards and detail dialog.

use chrono::{DateTime, Utc};
use skydesk_shared::Booking;

use crate::stats::BookingStats;

pub const EMPTY_TABLE_TEXT: &str = "No bookings found";

/// What the table body shows, in order of precedence.
#[derive(Debug, PartialEq)]
pub enum TableBody<'a> {
    Loading,
    Failed(String),
    Empty,
    Rows(Vec<&'a Booking>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsCard {
    pub title: &'static str,
    pub value: usize,
}

pub fn stats_cards(stats: &BookingStats) -> [StatsCard; 4] {
    [
        StatsCard { title: "Total Bookings", value: stats.total },
        StatsCard { title: "Pending Bookings", value: stats.pending },
        StatsCard { title: "Confirmed Bookings", value: stats.confirmed },
        StatsCard { title: "Cancelled Bookings", value: stats.cancelled },
    ]
}

/// `Jan 5, 2024, 03:07 PM`, always in UTC.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y, %I:%M %p").to_string()
}

pub fn format_created_at(booking: &Booking) -> String {
    booking
        .created_at
        .as_ref()
        .map(format_timestamp)
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${:.2}", p),
        None => "-".to_string(),
    }
}

pub fn format_route(booking: &Booking) -> String {
    format!(
        "{} → {}",
        booking.from.as_deref().unwrap_or("?"),
        booking.to.as_deref().unwrap_or("?")
    )
}

pub fn format_phone(booking: &Booking) -> String {
    let number = booking.phone_number.as_deref().unwrap_or_default();
    match booking.country_code.as_deref().filter(|c| !c.is_empty()) {
        Some(code) => format!("+{} {}", code.trim_start_matches('+'), number),
        None => number.to_string(),
    }
}

pub fn format_passengers(booking: &Booking) -> String {
    let mut text = format!("Adults: {}", booking.adults.unwrap_or(0));
    if let Some(children) = booking.children.filter(|n| *n > 0) {
        text.push_str(&format!(", Children: {}", children));
    }
    if let Some(infants) = booking.infants.filter(|n| *n > 0) {
        text.push_str(&format!(", Infants: {}", infants));
    }
    text
}

pub fn format_bags(booking: &Booking) -> String {
    format!(
        "Checked: {}, Cabin: {}",
        booking.checked_bags.unwrap_or(0),
        booking.cabin_bags.unwrap_or(0)
    )
}

pub const TABLE_HEADERS: [&str; 5] = ["Booking ID", "Customer", "Flight", "Date", "Status"];

/// Cells of one table row, matching `TABLE_HEADERS`.
pub fn table_row(booking: &Booking) -> [String; 5] {
    [
        booking.id.clone(),
        booking.full_name.clone().unwrap_or_default(),
        format_route(booking),
        format_created_at(booking),
        booking.payment_status.to_string(),
    ]
}

pub struct DetailSection {
    pub title: &'static str,
    pub fields: Vec<(&'static str, String)>,
}

/// The four blocks of the booking-detail dialog.
pub fn detail_sections(booking: &Booking) -> Vec<DetailSection> {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    vec![
        DetailSection {
            title: "Customer Information",
            fields: vec![
                ("Full Name", text(&booking.full_name)),
                ("Email", text(&booking.email)),
                ("Phone Number", format_phone(booking)),
            ],
        },
        DetailSection {
            title: "Flight Information",
            fields: vec![
                ("Route", format_route(booking)),
                ("Travel Class", text(&booking.travel_class)),
                ("Duration", text(&booking.duration)),
            ],
        },
        DetailSection {
            title: "Booking Details",
            fields: vec![
                ("Order ID", text(&booking.order_id)),
                ("Booking Date", format_created_at(booking)),
                ("Status", booking.payment_status.to_string()),
            ],
        },
        DetailSection {
            title: "Travel Details",
            fields: vec![
                ("Passengers", format_passengers(booking)),
                ("Bags", format_bags(booking)),
                ("Price", format_price(booking.price)),
            ],
        },
    ]
}
