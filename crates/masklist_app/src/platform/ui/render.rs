use masklist_core::{AppViewModel, FetchStatus, Location, PharmacyRecord};

use super::constants::{
    EMPTY_FEED_TEXT, LOADING_TEXT, MAP_PLACE_URL, NO_MATCH_TEXT, SEARCH_HINT, SOURCE_CREDIT, TITLE,
};

/// Lines to print for the current view.
pub fn render(view: &AppViewModel) -> Vec<String> {
    match view.status {
        FetchStatus::Loading => vec![LOADING_TEXT.to_string()],
        FetchStatus::Failed => vec![view
            .failure_reason
            .clone()
            .unwrap_or_else(|| masklist_core::FEED_FAILURE_REASON.to_string())],
        FetchStatus::Empty => vec![EMPTY_FEED_TEXT.to_string()],
        FetchStatus::Ready => render_ready(view),
    }
}

fn render_ready(view: &AppViewModel) -> Vec<String> {
    let query = view.query.as_deref().unwrap_or_default();
    let mut lines = vec![
        TITLE.to_string(),
        SEARCH_HINT.to_string(),
        format!(
            "Address: {query:?} ({} of {} pharmacies)",
            view.rows.len(),
            view.total_records
        ),
    ];
    if view.rows.is_empty() {
        lines.push(NO_MATCH_TEXT.to_string());
    }
    for record in &view.rows {
        lines.extend(render_record(record));
    }
    lines.push(SOURCE_CREDIT.to_string());
    lines
}

fn render_record(record: &PharmacyRecord) -> Vec<String> {
    vec![
        String::new(),
        format!("  {}", record.name),
        format!(
            "    masks: adult {}  child {}",
            record.mask_adult, record.mask_child
        ),
        format!("    address: {}", record.address),
        format!("    phone: {}", record.phone),
        format!("    updated: {}", record.updated_at),
        format!("    map: {}", map_link(&record.location)),
    ]
}

/// Place link with latitude first, as the map service expects.
pub fn map_link(location: &Location) -> String {
    format!("{MAP_PLACE_URL}{},{}", location.latitude, location.longitude)
}
