use super::{level_for, Flash, LinkRow, Outcome};
use crate::{telemetry::Level, App};

/// "Visit" button: count the click and open the original URL.
pub fn visit(app: &mut App, code: &str) -> Outcome {
    match app.links.redirect(code) {
        Ok(link) => {
            app.report(
                Level::Info,
                "handler",
                &format!("Redirected '{}' (click {})", link.code, link.clicks),
            );
            let now = app.links.now();
            Outcome {
                flash: Flash::Success(format!("Opening {}", link.original_url)),
                link: Some(LinkRow::from_record(app, &link, now)),
            }
        }
        Err(e) => {
            app.report(level_for(e), "handler", &format!("Redirect of '{code}' failed: {e}"));
            Outcome::failed(e)
        }
    }
}
