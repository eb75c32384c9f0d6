// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Message templates and external messaging links.
//!
//! Operators forward request summaries to base contacts over external
//! channels. This crate renders the plain-text summary for each request
//! variant, builds the WhatsApp deep link that pre-fills it, and defines
//! the clipboard seam the console copies through. Everything here is
//! one-way and fire-and-forget: nothing reads a response beyond the
//! success of the copy itself.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use muster_domain::{Request, RequestDetail, Soldier};
use time::Date;
use time::macros::format_description;
use url::Url;

/// Errors that can occur while preparing an outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagingError {
    /// The soldier's phone number contains no digits to address.
    EmptyPhone,
    /// The deep link could not be assembled.
    InvalidLink(String),
    /// The copy side effect failed.
    CopyFailed(String),
}

impl std::fmt::Display for MessagingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPhone => write!(f, "Phone number contains no digits"),
            Self::InvalidLink(msg) => write!(f, "Failed to build messaging link: {msg}"),
            Self::CopyFailed(msg) => write!(f, "Failed to copy message: {msg}"),
        }
    }
}

impl std::error::Error for MessagingError {}

/// The seam for the copy-to-clipboard side effect.
///
/// The console ships an implementation that hands the text to the
/// terminal; tests use a recording double. Copying is one-way: success or
/// failure of the copy itself is the only feedback.
pub trait Clipboard {
    /// Copies the given text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text could not be copied.
    fn copy(&mut self, text: &str) -> Result<(), MessagingError>;
}

/// Formats a date as `dd/mm/yyyy` for the printed summaries.
fn format_date(date: Date) -> String {
    let description = format_description!("[day]/[month]/[year]");
    date.format(&description)
        .map_or_else(|_| date.to_string(), |formatted| formatted)
}

/// Renders a boolean the way the summaries phrase it.
const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Renders the identity block shared by the single-soldier summaries.
fn soldier_block(soldier: &Soldier) -> String {
    format!(
        "Soldier: {}\nMilitary id: {}\nRank: {}\nDepartment: {}\nRole: {}",
        soldier.full_name, soldier.military_id, soldier.rank, soldier.department, soldier.role
    )
}

/// Renders the longer identity block the exchange summary uses per
/// participant.
fn participant_block(soldier: &Soldier) -> String {
    format!(
        "Name: {}\nMilitary id: {}\nRank: {}\nDepartment: {}\nRole: {}\nPhone: {}",
        soldier.full_name,
        soldier.military_id,
        soldier.rank,
        soldier.department,
        soldier.role,
        soldier.phone
    )
}

/// Renders a one-screen summary of a soldier record.
#[must_use]
pub fn soldier_summary(soldier: &Soldier) -> String {
    format!(
        "{}\nNational id: {}\nService type: {}\nCenter: {}\nBranch: {}\nSecurity clearance: {}\nAllergies: {}\n\nContact phone: {}",
        soldier_block(soldier),
        soldier.national_id,
        soldier.service_type,
        soldier.center,
        soldier.branch,
        soldier.security_clearance,
        soldier.allergies,
        soldier.phone
    )
}

/// Renders the plain-text summary of a request, per variant.
///
/// These are the texts operators paste into external channels, so the
/// wording is stable: headers name the variant, stay summaries carry the
/// computed stay length, and each summary ends with the contact phone of
/// the soldier it concerns.
#[must_use]
pub fn request_summary(request: &Request) -> String {
    match &request.detail {
        RequestDetail::DayVisit {
            soldier,
            arrival_date,
            base,
            requires_base_approval,
            has_visited_base,
        } => format!(
            "Single-day visit request\n\n{}\n\nRequest details:\nArrival date: {}\nBase: {}\nBase approval required: {}\nHas been at the base before: {}\n\nContact phone: {}",
            soldier_block(soldier),
            format_date(*arrival_date),
            base,
            yes_no(*requires_base_approval),
            yes_no(*has_visited_base),
            soldier.phone
        ),
        RequestDetail::Stay {
            soldier,
            arrival_date,
            departure_date,
            base,
            requires_base_approval,
            has_visited_base,
        } => format!(
            "Overnight stay request\n\n{}\n\nRequest details:\nArrival date: {}\nDeparture date: {}\nStay length: {} days\nBase: {}\nBase approval required: {}\nHas been at the base before: {}\n\nContact phone: {}",
            soldier_block(soldier),
            format_date(*arrival_date),
            format_date(*departure_date),
            muster_domain::stay_duration_days(*arrival_date, *departure_date),
            base,
            yes_no(*requires_base_approval),
            yes_no(*has_visited_base),
            soldier.phone
        ),
        RequestDetail::Exchange {
            incoming,
            outgoing,
            arrival_date,
            departure_date,
            exit_date,
            base,
        } => format!(
            "Soldier exchange request\n\nIncoming soldier:\n{}\n\nOutgoing soldier:\n{}\n\nTimetable:\nIncoming soldier arrives: {}\nIncoming soldier departs: {}\nOutgoing soldier exits: {}\nBase: {}",
            participant_block(incoming),
            participant_block(outgoing),
            format_date(*arrival_date),
            format_date(*departure_date),
            format_date(*exit_date),
            base
        ),
        RequestDetail::Departure {
            soldier,
            exit_date,
            base,
        } => format!(
            "Base departure request\n\n{}\n\nRequest details:\nBase: {}\nExit date: {}\n\nContact phone: {}",
            soldier_block(soldier),
            base,
            format_date(*exit_date),
            soldier.phone
        ),
    }
}

/// Builds a WhatsApp deep link with the message pre-filled.
///
/// Non-digit characters are stripped from the phone number; the message is
/// carried percent-encoded in the `text` query parameter.
///
/// # Arguments
///
/// * `phone` - The soldier's phone number, in any local formatting
/// * `message` - The message to pre-fill
///
/// # Errors
///
/// Returns an error if the phone number contains no digits or the link
/// cannot be assembled.
pub fn whatsapp_link(phone: &str, message: &str) -> Result<Url, MessagingError> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(MessagingError::EmptyPhone);
    }

    let mut link: Url = Url::parse(&format!("https://wa.me/{digits}"))
        .map_err(|e| MessagingError::InvalidLink(e.to_string()))?;
    link.query_pairs_mut().append_pair("text", message);
    Ok(link)
}
