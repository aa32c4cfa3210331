//! Announcement message formatting.

use crate::place::Place;

/// Title for a new-place announcement.
pub fn announcement_title(place: &Place) -> String {
    format!("New Place Added: {}", place.name)
}

/// Body for a new-place announcement.
///
/// Blank-line separated sections, in order: where the place is (street
/// address when known, coordinates otherwise), an optional category line,
/// an optional description, and a link back to the viewer page for the
/// experience.
pub fn announcement_body(place: &Place, experience_id: &str, app_base_url: &str) -> String {
    let mut sections: Vec<String> = Vec::new();

    match &place.address {
        Some(address) => sections.push(format!("Address: {}", address)),
        None => sections.push(format!(
            "Location: {:.4}, {:.4}",
            place.latitude, place.longitude
        )),
    }

    if let Some(category) = &place.category {
        sections.push(format!("Category: {}", category));
    }

    if let Some(description) = &place.description {
        sections.push(description.clone());
    }

    sections.push(format!(
        "View this place: {}/experiences/{}",
        app_base_url, experience_id
    ));

    sections.join("\n\n")
}
