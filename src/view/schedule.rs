use crate::models::Viewer;
use crate::services::{AvailabilityView, WeekSchedule};

use super::{
    FULLY_BOOKED_NOTICE, MENTOR_CTA_PROMPT, PENDING_NOTICE, SCHEDULE_CTA_LABEL, UNAVAILABLE_NOTICE,
    attr, text,
};

const WEEK_CARD_DESCRIPTION: &str = "Horários disponíveis para mentoria nesta semana.";

pub(super) fn availability(view: &AvailabilityView) -> String {
    match view {
        AvailabilityView::Populated(schedule) => week_cards(schedule),
        AvailabilityView::Empty => notice(FULLY_BOOKED_NOTICE),
        AvailabilityView::Pending => notice(PENDING_NOTICE),
        AvailabilityView::Unavailable => notice(UNAVAILABLE_NOTICE),
    }
}

fn week_cards(schedule: &WeekSchedule) -> String {
    let cards: String = schedule
        .iter()
        .map(|(day, bucket)| {
            let chips: String = bucket
                .slots
                .iter()
                .map(|slot| format!(r#"<li class="chip chip-cards">{}</li>"#, text(slot)))
                .collect();
            format!(
                r#"<article class="week-card" data-week-day="{}"><h3>{}</h3><p>{}</p><ul class="chips">{}</ul></article>"#,
                day,
                text(&bucket.week_day),
                WEEK_CARD_DESCRIPTION,
                chips,
            )
        })
        .collect();

    format!(r#"<div class="flex flex-col gap-4">{}</div>"#, cards)
}

fn notice(message: &str) -> String {
    format!(
        r#"<div class="max-w-xs p-6 border border-gray-03 rounded-lg"><p>{}</p></div>"#,
        text(message)
    )
}

pub(super) fn call_to_action(mentor_id: &str, viewer: Viewer) -> String {
    if viewer.is_mentor {
        format!(
            r#"<div class="max-w-xs mt-4"><button class="btn btn-small" type="button" disabled>{}</button></div>"#,
            MENTOR_CTA_PROMPT
        )
    } else {
        format!(
            r#"<a class="btn btn-regular btn-primary mt-12" role="button" href="{}?schedule=open">{}</a>"#,
            attr(&profile_path(mentor_id)),
            SCHEDULE_CTA_LABEL
        )
    }
}

pub(super) fn modal(mentor_id: &str, view: &AvailabilityView) -> String {
    format!(
        concat!(
            r#"<dialog class="schedule-modal" open aria-labelledby="schedule-modal-title">"#,
            r#"<h2 id="schedule-modal-title">{}</h2>"#,
            "{}",
            r#"<a class="btn btn-small" href="{}">Fechar</a>"#,
            "</dialog>",
        ),
        SCHEDULE_CTA_LABEL,
        availability(view),
        attr(&profile_path(mentor_id)),
    )
}

/// Link back to the profile. The id is encoded as a single path segment.
fn profile_path(mentor_id: &str) -> String {
    format!("/mentors/{}", urlencoding::encode(mentor_id))
}
