//! About page

use axum::{extract::State, response::Html};
use std::sync::Arc;

use super::{escape_html, fallback_img, layout, Page};
use crate::application::services::{index_label, HOVER_HIDE_DELAY};
use crate::domain::entities::{Profile, Tool};
use crate::domain::services::FallbackImage;
use crate::infrastructure::state::AppState;

pub async fn about_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let content = &state.content_service;
    let profile = content.profile();
    let body = format!(
        "{}\n{}\n{}",
        render_identity(profile),
        render_arsenal(content.tools()),
        render_contacts(profile)
    );
    Html(layout(&format!("About / {}", profile.name), Page::About, &body))
}

/// Portrait, name and biography
///
/// The portrait keeps its hover highlight for the disclosure delay after
/// the pointer leaves.
fn render_identity(profile: &Profile) -> String {
    let bio: String = profile
        .bio
        .iter()
        .map(|paragraph| format!("<p>{}</p>", escape_html(paragraph)))
        .collect();

    format!(
        r#"<section class="identity">
<div class="portrait" style="--linger:{linger}ms">{portrait}</div>
<h1>{name}</h1>
<p>{role}</p>
<blockquote>{quote}</blockquote>
{bio}
</section>"#,
        linger = HOVER_HIDE_DELAY.as_millis(),
        portrait = fallback_img(&FallbackImage::new(&profile.portrait), &profile.name),
        name = escape_html(&profile.name),
        role = escape_html(&profile.role),
        quote = escape_html(&profile.quote),
        bio = bio,
    )
}

fn render_arsenal(tools: &[Tool]) -> String {
    let items: String = tools
        .iter()
        .enumerate()
        .map(|(position, tool)| {
            format!(
                r#"<li><span>{index}</span><strong>{name}</strong><em>{category}</em><div class="level"><span style="width:{level}%"></span></div><span>{level}%</span></li>"#,
                index = index_label(position),
                name = escape_html(&tool.name),
                category = escape_html(&tool.category),
                level = tool.display_level(),
            )
        })
        .collect();

    format!(
        r#"<section class="arsenal"><h2>The Arsenal</h2><ul class="tools">{}</ul></section>"#,
        items
    )
}

fn render_contacts(profile: &Profile) -> String {
    let links: String = profile
        .contacts
        .iter()
        .map(|link| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                escape_html(&link.href),
                escape_html(&link.label)
            )
        })
        .collect();

    format!(
        r#"<section class="contact"><h2>Contact</h2><ul>{}</ul><p>{}</p></section>"#,
        links,
        escape_html(&profile.location)
    )
}
