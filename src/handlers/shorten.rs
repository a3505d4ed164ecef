use super::{level_for, Flash, LinkRow, Outcome};
use crate::{models::CreateLinkInput, telemetry::Level, validate::MAX_CUSTOM_CODE_LEN, App};

/// The shorten form as the user is filling it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenForm {
    pub url: String,
    pub custom_code: String,
    pub validity: i64,
}

impl ShortenForm {
    pub fn new(default_validity: i64) -> Self {
        Self {
            url: String::new(),
            custom_code: String::new(),
            validity: default_validity,
        }
    }

    /// Typing into the code field drops whitespace and stops at the maximum
    /// length, like the input box does.
    pub fn set_custom_code(&mut self, raw: &str) {
        self.custom_code = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .take(MAX_CUSTOM_CODE_LEN)
            .collect();
    }

    pub fn reset(&mut self, default_validity: i64) {
        *self = Self::new(default_validity);
    }

    fn to_input(&self) -> CreateLinkInput {
        CreateLinkInput {
            original_url: self.url.clone(),
            custom_code: Some(self.custom_code.clone()),
            validity_days: self.validity,
        }
    }
}

/// Submit the form. The form is cleared only when a link was created.
pub fn shorten(app: &mut App, form: &mut ShortenForm) -> Outcome {
    match app.links.create(form.to_input()) {
        Ok(link) => {
            app.report(
                Level::Info,
                "handler",
                &format!("Created short link '{}' for {}", link.code, link.original_url),
            );
            form.reset(app.config.default_validity_days);
            let now = app.links.now();
            Outcome {
                flash: Flash::Success("URL shortened successfully!".into()),
                link: Some(LinkRow::from_record(app, &link, now)),
            }
        }
        Err(e) => {
            tracing::debug!("Shorten rejected: {}", e);
            app.report(level_for(e), "handler", &format!("Shorten failed: {e}"));
            Outcome::failed(e)
        }
    }
}
