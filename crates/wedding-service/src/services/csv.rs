//! CSV rendering of RSVP responses for the dashboard export

use std::fmt::Write as _;

use wedding_core::entities::RsvpResponse;

const HEADERS: [&str; 9] = [
    "Primary Guest",
    "Additional Guests",
    "Email",
    "Phone",
    "Total Guests",
    "Status",
    "Wants Aso Ebi",
    "Notes",
    "Date",
];

/// Render `rsvps` in the given order, one quoted row per response
pub fn render_rsvp_csv(rsvps: &[RsvpResponse]) -> String {
    let mut out = String::new();
    push_row(&mut out, HEADERS.iter().map(|h| (*h).to_string()));

    for rsvp in rsvps {
        out.push('\n');
        push_row(&mut out, rsvp_cells(rsvp));
    }

    out
}

fn rsvp_cells(rsvp: &RsvpResponse) -> [String; 9] {
    let additional = if rsvp.additional_guests.is_empty() {
        "None".to_string()
    } else {
        rsvp.additional_guests
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    [
        rsvp.guest_name.clone(),
        additional,
        or_placeholder(rsvp.email.as_deref(), "Not provided"),
        or_placeholder(rsvp.phone.as_deref(), "Not provided"),
        rsvp.number_of_guests.to_string(),
        if rsvp.is_attending { "Attending" } else { "Not Attending" }.to_string(),
        if rsvp.wants_aso_ebi { "Yes" } else { "No" }.to_string(),
        // Commas in notes become semicolons.
        or_placeholder(rsvp.notes.as_deref(), "No notes").replace(',', ";"),
        rsvp.created_at.format("%b %-d, %Y").to_string(),
    ]
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

fn push_row(out: &mut String, cells: impl IntoIterator<Item = String>) {
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "\"{}\"", cell.replace('"', "\"\""));
    }
}
