//! Home page: hero card, project grid and detail overlay

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{escape_html, fallback_img, layout, Page};
use crate::application::services::index_label;
use crate::domain::entities::{Profile, Project};
use crate::domain::services::{FallbackImage, FlipCard, ProjectDetailView};
use crate::domain::value_objects::{Section, Viewport};
use crate::infrastructure::http::content_routes::parse_category;
use crate::infrastructure::state::AppState;

/// Sections offered as grid filters
const WORK_SECTIONS: [Section; 6] = [
    Section::Branding,
    Section::Motion,
    Section::Illustration,
    Section::Typography,
    Section::Web,
    Section::Experimental,
];

const EMPTY_GRID: &str = "Entry Pending...";

const HERO_SCRIPT: &str = r#"
(function(){
var card=document.getElementById('hero-card');if(!card)return;
var gloss=document.getElementById('hero-gloss');
var busy=false;
function flipped(){return card.dataset.flipped==='1';}
function apply(t){card.style.transform=t.transform;gloss.style.background=t.gloss;card.dataset.flipped=t.flipped?'1':'0';}
window.addEventListener('pointermove',function(e){
if(busy)return;busy=true;
var q='x='+e.clientX+'&y='+e.clientY+'&width='+window.innerWidth+'&height='+window.innerHeight+'&flipped='+flipped();
fetch('/api/hero/transform?'+q).then(function(r){return r.json();}).then(apply).finally(function(){busy=false;});
});
card.addEventListener('click',function(e){
var origin=e.target.closest('a,button')?'control':'card';
fetch('/api/hero/flip',{method:'POST',headers:{'Content-Type':'application/json'},body:JSON.stringify({flipped:flipped(),origin:origin})})
.then(function(r){return r.json();}).then(apply);
});
})();
"#;

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// Slug of the project shown in the detail overlay
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

pub async fn home_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let category = parse_category(query.category.as_deref())?;
    let content = &state.content_service;

    let overlay = query
        .project
        .as_deref()
        .and_then(|slug| content.project_detail(slug))
        .map(|view| render_overlay(&view, category))
        .unwrap_or_default();

    let body = format!(
        "{hero}\n{works}\n{overlay}\n{footer}\n<script>{script}</script>",
        hero = render_hero(content.profile()),
        works = render_works(&content.projects(category), category),
        overlay = overlay,
        footer = render_footer(content.profile()),
        script = HERO_SCRIPT,
    );
    Ok(Html(layout(&content.profile().name, Page::Home, &body)))
}

fn home_href(category: Option<Section>, project: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(section) = category {
        params.push(format!("category={}", section.as_str()));
    }
    if let Some(slug) = project {
        params.push(format!("project={}", slug));
    }
    if params.is_empty() {
        Page::Home.path().to_string()
    } else {
        format!("{}?{}", Page::Home.path(), params.join("&amp;"))
    }
}

/// The flip card, rendered in its rest pose
fn render_hero(profile: &Profile) -> String {
    let card = FlipCard::new();
    let viewport = Viewport::unknown();
    let pose = card.transform(viewport.center(), viewport);

    let contacts: String = profile
        .contacts
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}">{}</a> "#,
                escape_html(&link.href),
                escape_html(&link.label)
            )
        })
        .collect();

    format!(
        r#"<section class="hero">
<div id="hero-card" class="card" data-flipped="0" style="transform:{transform}">
<div class="face front">{portrait}<div id="hero-gloss" class="gloss" style="background:{gloss}"></div>
<span class="monogram">{initials}</span>
<div style="position:absolute;bottom:1.5rem;left:1.5rem"><h1>{name}</h1><p>{role}</p></div></div>
<div class="face back"><p>{headline}</p><p>{contacts}</p><a href="{about}">More about me</a></div>
</div>
</section>"#,
        transform = pose.css_transform(),
        gloss = pose.css_gloss(),
        portrait = fallback_img(&FallbackImage::new(&profile.portrait), &profile.name),
        initials = escape_html(&profile.initials),
        name = escape_html(&profile.name),
        role = escape_html(&profile.role),
        headline = escape_html(&profile.headline),
        contacts = contacts,
        about = Page::About.path(),
    )
}

fn render_works(projects: &[&Project], category: Option<Section>) -> String {
    let mut filters = format!(
        r#"<a href="{}"{}>All</a>"#,
        home_href(None, None),
        active_class(category.is_none())
    );
    for section in WORK_SECTIONS {
        filters.push_str(&format!(
            r#"<a href="{}"{}>{}</a>"#,
            home_href(Some(section), None),
            active_class(category == Some(section)),
            section.label()
        ));
    }

    let grid = if projects.is_empty() {
        format!(r#"<p class="pending">{}</p>"#, EMPTY_GRID)
    } else {
        let tiles: String = projects
            .iter()
            .enumerate()
            .map(|(position, project)| render_tile(position, project, category))
            .collect();
        format!(r#"<div class="grid">{}</div>"#, tiles)
    };

    format!(
        r#"<section id="work"><h2>Selected Works</h2><nav class="filters">{}</nav>{}</section>"#,
        filters, grid
    )
}

fn active_class(active: bool) -> &'static str {
    if active {
        r#" class="active""#
    } else {
        ""
    }
}

fn render_tile(position: usize, project: &Project, category: Option<Section>) -> String {
    format!(
        r#"<a class="tile" href="{href}"><span>{index}</span>{image}<h3>{title}</h3><p>{label} / {tagline}</p></a>"#,
        href = home_href(category, Some(&project.slug())),
        index = index_label(position),
        image = fallback_img(&FallbackImage::new(&project.image), &project.title),
        title = escape_html(&project.title),
        label = project.category.label(),
        tagline = escape_html(&project.tagline),
    )
}

fn render_overlay(view: &ProjectDetailView, category: Option<Section>) -> String {
    let gallery: String = view
        .gallery
        .iter()
        .map(|image| fallback_img(image, &view.title))
        .collect();

    let variations: String = view
        .variations
        .iter()
        .map(|variation| {
            let layout = variation.layout_type.unwrap_or_default();
            let images: String = variation
                .images
                .iter()
                .map(|src| fallback_img(&FallbackImage::new(src), &variation.title))
                .collect();
            format!(
                r#"<section class="variation {layout}"><h3>{title}</h3><p>{description}</p><div class="gallery">{images}</div></section>"#,
                layout = layout.as_str(),
                title = escape_html(&variation.title),
                description = escape_html(&variation.description),
                images = images,
            )
        })
        .collect();

    let tech: String = view
        .tech
        .iter()
        .map(|item| format!("<span>{}</span>", escape_html(item)))
        .collect();

    let link = view
        .link
        .as_deref()
        .map(|href| {
            format!(
                r#"<p><a href="{}" target="_blank" rel="noopener">Visit project</a></p>"#,
                escape_html(href)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="overlay" role="dialog" aria-modal="true" aria-label="{title}">
<a class="close" href="{close}" aria-label="Close">&times;</a>
<span class="badge">{initial}</span> <span>{label}</span>
<h2>{title}</h2>
<p>{tagline}</p>
{hero}
<h3>{headline}</h3>
<p>{narrative}</p>
<div class="gallery">{gallery}</div>
{variations}
<div class="tech">{tech}</div>
{link}
</div>"#,
        title = escape_html(&view.title),
        close = home_href(category, None),
        initial = escape_html(&view.initial),
        label = escape_html(&view.category_label),
        tagline = escape_html(&view.tagline),
        hero = fallback_img(&view.hero_image, &view.title),
        headline = escape_html(&view.headline),
        narrative = escape_html(&view.narrative),
        gallery = gallery,
        variations = variations,
        tech = tech,
        link = link,
    )
}

fn render_footer(profile: &Profile) -> String {
    format!(
        "<footer>{} / {}</footer>",
        escape_html(&profile.name),
        escape_html(&profile.location)
    )
}
