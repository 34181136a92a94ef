use crate::models::Mentor;
use crate::models::mentor::present;

use super::{
    BIOGRAPHY_PLACEHOLDER, DESCRIPTION_PLACEHOLDER, EMAIL_PLACEHOLDER, EXPERIENCE_PLACEHOLDER,
    FALLBACK_AVATAR, GITHUB_PLACEHOLDER, LOCATION_PLACEHOLDER, attr, text,
};

pub(super) fn header(mentor: &Mentor) -> String {
    let avatar = present(&mentor.photo_url).unwrap_or(FALLBACK_AVATAR);
    let job = present(&mentor.job_title).unwrap_or("");

    let skills: String = mentor
        .skills()
        .iter()
        .map(|skill| format!(r#"<li class="chip">{}</li>"#, text(skill)))
        .collect();

    format!(
        concat!(
            r#"<div class="py-6 bg-header-dashboard min-h-[200px] bg-no-repeat bg-cover">"#,
            r#"<div class="flex justify-center sm:justify-start container">"#,
            r#"<div class="card-profile">"#,
            r#"<img class="avatar" src="{}" alt="Foto do mentor">"#,
            r#"<p class="job">{}</p>"#,
            r#"<h1 class="name">{}</h1>"#,
            r#"<ul class="skills">{}</ul>"#,
            "</div></div></div>",
        ),
        attr(avatar),
        text(job),
        text(&mentor.full_name()),
        skills,
    )
}

pub(super) fn about(mentor: &Mentor) -> String {
    section(
        "<section>",
        "Sobre mim",
        present(&mentor.biography),
        BIOGRAPHY_PLACEHOLDER,
    )
}

pub(super) fn experience(mentor: &Mentor) -> String {
    section(
        r#"<section class="mt-12 pb-12 border-secondary-01 border-b border-solid">"#,
        "Experiência profissional",
        present(&mentor.description),
        DESCRIPTION_PLACEHOLDER,
    )
}

fn section(open_tag: &str, heading: &str, content: Option<&str>, placeholder: &str) -> String {
    let paragraph = match content {
        Some(content) => format!(r#"<p class="text-base text-secondary-05">{}</p>"#, text(content)),
        None => placeholder_paragraph(placeholder),
    };
    format!(
        r#"{}<h2 class="text-2xl font-bold leading-normal mb-4">{}</h2>{}</section>"#,
        open_tag, heading, paragraph
    )
}

pub(super) fn contact(mentor: &Mentor) -> String {
    let fields = [
        (present(&mentor.email).map(str::to_string), EMAIL_PLACEHOLDER),
        (present(&mentor.github).map(str::to_string), GITHUB_PLACEHOLDER),
        (mentor.location(), LOCATION_PLACEHOLDER),
        (mentor.experience(), EXPERIENCE_PLACEHOLDER),
    ];

    let mut html = String::from(r#"<section class="pt-12 flex flex-col sm:flex-row flex-wrap gap-y-8">"#);
    for (value, placeholder) in fields {
        match value {
            Some(value) => html.push_str(&format!(r#"<p class="font-bold basis-1/2">{}</p>"#, text(&value))),
            None => html.push_str(&placeholder_paragraph(placeholder)),
        }
    }
    html.push_str("</section>");
    html
}

fn placeholder_paragraph(placeholder: &str) -> String {
    format!(r#"<p class="text-gray-05 text-base placeholder">{}</p>"#, text(placeholder))
}
