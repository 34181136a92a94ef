//! Server-side HTML for the mentor profile page.
//!
//! Every function here is pure: it takes already fetched data and returns
//! markup. User-provided text is escaped on the way in.

mod profile;
mod schedule;

use axum::http::StatusCode;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::services::{LoadedProfile, ProfilePage};

pub const FALLBACK_AVATAR: &str = "/imgCard.png";
pub const BIOGRAPHY_PLACEHOLDER: &str = "Mentor";
pub const DESCRIPTION_PLACEHOLDER: &str = "Escreva suas principais experiências profissionais";
pub const EMAIL_PLACEHOLDER: &str = "exemplo@gmail.com";
pub const GITHUB_PLACEHOLDER: &str = "exemplo.com.br";
pub const LOCATION_PLACEHOLDER: &str = "País/Estado";
pub const EXPERIENCE_PLACEHOLDER: &str = "experiência que você possui";
pub const FULLY_BOOKED_NOTICE: &str = "O mentor ja está com a agenda lotada para a semana!";
pub const PENDING_NOTICE: &str = "Carregando agenda...";
pub const UNAVAILABLE_NOTICE: &str = "Não foi possível carregar a agenda do mentor.";
pub const MENTOR_CTA_PROMPT: &str =
    "Vá até Configurações e altere seu perfil para agendar mentorias.";
pub const SCHEDULE_CTA_LABEL: &str = "Agendar mentoria";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Whether the visitor asked for the scheduling modal.
    pub modal_open: bool,
    pub refresh_secs: u64,
}

pub fn render_page(page: &ProfilePage, options: RenderOptions) -> String {
    match page {
        ProfilePage::Loading => render_loading(options.refresh_secs),
        ProfilePage::Loaded(profile) => render_loaded(profile, options),
    }
}

fn render_loading(refresh_secs: u64) -> String {
    let head = format!(r#"<meta http-equiv="refresh" content="{}">"#, refresh_secs);
    let body = concat!(
        r#"<main class="pb-12">"#,
        r#"<div class="h-screen flex justify-center items-center">"#,
        r#"<div class="spinner" role="status" aria-label="Carregando"></div>"#,
        "</div></main>",
    );
    document("Carregando...", &head, body)
}

fn render_loaded(profile: &LoadedProfile, options: RenderOptions) -> String {
    let mentor = &profile.mentor;
    let modal_open = options.modal_open && !profile.viewer.is_mentor;

    let mut body = String::from(r#"<main class="pb-12">"#);
    body.push_str(&profile::header(mentor));

    body.push_str(r#"<div class="container flex justify-between flex-wrap pt-8 gap-8">"#);
    body.push_str(r#"<div class="max-w-xl">"#);
    body.push_str(&profile::about(mentor));
    body.push_str(&profile::experience(mentor));
    body.push_str(&profile::contact(mentor));
    body.push_str("</div>");

    body.push_str("<section>");
    body.push_str(r#"<h2 class="text-3xl font-bold mb-12">Agenda de mentorias</h2>"#);
    body.push_str(&schedule::availability(&profile.availability));
    if modal_open {
        body.push_str(&schedule::modal(&profile.mentor_id, &profile.availability));
    }
    body.push_str(&schedule::call_to_action(&profile.mentor_id, profile.viewer));
    body.push_str("</section>");

    body.push_str("</div></main>");

    let title = match mentor.full_name() {
        name if name.is_empty() => "Mentor".to_string(),
        name => name,
    };
    document(&title, "", &body)
}

pub fn render_error(status: StatusCode, message: &str) -> String {
    let body = format!(
        r#"<main class="pb-12"><div class="container pt-8"><h1 class="text-3xl font-bold">{}</h1><p>{}</p></div></main>"#,
        status.as_u16(),
        encode_text(message),
    );
    document(message, "", &body)
}

fn document(title: &str, head: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="pt-BR"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1">{}<title>{}</title></head><body>{}</body></html>"#,
        head,
        encode_text(title),
        body,
    )
}

fn text(value: &str) -> std::borrow::Cow<'_, str> {
    encode_text(value)
}

fn attr(value: &str) -> std::borrow::Cow<'_, str> {
    encode_double_quoted_attribute(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mentor, Viewer};
    use crate::services::AvailabilityView;

    fn loaded(mentor: Mentor, availability: AvailabilityView, viewer: Viewer) -> ProfilePage {
        ProfilePage::Loaded(LoadedProfile {
            mentor_id: "m-1".to_string(),
            mentor,
            availability,
            viewer,
        })
    }

    #[test]
    fn loading_page_only_has_spinner() {
        let html = render_page(&ProfilePage::Loading, RenderOptions { modal_open: false, refresh_secs: 3 });
        assert!(html.contains("spinner"));
        assert!(html.contains(r#"content="3""#));
        assert!(!html.contains("Sobre mim"));
        assert!(!html.contains("Agenda de mentorias"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mentor = Mentor {
            biography: Some("<script>alert(1)</script>".to_string()),
            ..Default::default()
        };
        let html = render_page(
            &loaded(mentor, AvailabilityView::Empty, Viewer::anonymous()),
            RenderOptions::default(),
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn mentor_viewer_never_gets_modal() {
        let page = loaded(Mentor::default(), AvailabilityView::Empty, Viewer { is_mentor: true });
        let html = render_page(&page, RenderOptions { modal_open: true, refresh_secs: 2 });
        assert!(!html.contains("<dialog"));
    }

    #[test]
    fn error_page_shows_status_and_message() {
        let html = render_error(StatusCode::NOT_FOUND, "Mentor não encontrado");
        assert!(html.contains("404"));
        assert!(html.contains("Mentor não encontrado"));
    }
}
