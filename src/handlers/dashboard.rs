use super::LinkRow;
use crate::App;

/// Every stored link, newest first, ready for display.
pub fn dashboard(app: &App) -> Vec<LinkRow> {
    let now = app.links.now();
    app.links
        .records()
        .iter()
        .map(|link| LinkRow::from_record(app, link, now))
        .collect()
}
