//! Server-rendered pages
//!
//! Pages are plain HTML strings. Every page shares the same shell: a
//! navigation bar, the stylesheet, and a script that turns off browser
//! scroll restoration so each navigation starts at the top.

mod about;
mod home;

use axum::{http::StatusCode, response::Html};

use crate::domain::services::FallbackImage;

pub use about::about_page;
pub use home::home_page;

/// The two navigable views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Home => "Work",
            Self::About => "About",
        }
    }
}

const STYLES: &str = r#"
*{box-sizing:border-box;margin:0;padding:0}
body{background:#0a0a0a;color:#f4f4f0;font-family:system-ui,sans-serif;line-height:1.5}
a{color:inherit}
nav.top{display:flex;justify-content:space-between;padding:1.5rem 2rem;text-transform:uppercase;letter-spacing:.2em;font-size:.75rem}
nav.top a{text-decoration:none;margin-left:1.5rem;opacity:.6}
nav.top a.active{opacity:1;border-bottom:2px solid #ccff00}
main{padding:2rem}
img{display:block;max-width:100%;object-fit:cover}
.hero{display:flex;justify-content:center;perspective:1200px;padding:4rem 0}
.card{position:relative;width:min(90vw,420px);aspect-ratio:3/4;transform-style:preserve-3d;transition:transform .6s cubic-bezier(.2,.8,.2,1);cursor:pointer}
.face{position:absolute;inset:0;backface-visibility:hidden;border-radius:1.5rem;overflow:hidden;background:#161616}
.face.back{transform:rotateY(180deg);padding:2rem;display:flex;flex-direction:column;justify-content:space-between}
.gloss{position:absolute;inset:0;pointer-events:none;mix-blend-mode:overlay}
.monogram{position:absolute;top:1rem;left:1rem;font-weight:900;font-size:2rem}
.filters a{margin-right:1rem;text-decoration:none;opacity:.6;font-size:.8rem}
.filters a.active{opacity:1}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(280px,1fr));gap:2rem;margin-top:2rem}
.tile{text-decoration:none}
.tile img{aspect-ratio:4/3;width:100%;border-radius:1rem}
.pending{padding:4rem 0;text-align:center;opacity:.5;text-transform:uppercase;letter-spacing:.3em}
.overlay{position:fixed;inset:0;background:rgba(10,10,10,.96);overflow-y:auto;padding:3rem 2rem}
.overlay .close{position:fixed;top:1.5rem;right:2rem;text-decoration:none;font-size:1.5rem}
.badge{display:inline-flex;width:2.5rem;height:2.5rem;align-items:center;justify-content:center;border-radius:50%;background:#ccff00;color:#0a0a0a;font-weight:900}
.gallery{display:grid;gap:1rem;margin:2rem 0}
.variation.a3-a4 .gallery{grid-template-columns:1.41fr 1fr}
.tech span{display:inline-block;border:1px solid #444;border-radius:999px;padding:.2rem .8rem;margin:.2rem}
.portrait img{filter:grayscale(1);transition:filter .5s;transition-delay:var(--linger)}
.portrait:hover img{filter:none;transition-delay:0s}
.tools li{list-style:none;display:flex;justify-content:space-between;gap:1rem;padding:.5rem 0;border-bottom:1px solid #222}
.level{height:4px;background:#222;flex:1;align-self:center}
.level span{display:block;height:100%;background:#ccff00}
footer{padding:3rem 2rem;opacity:.5;font-size:.75rem}
.ghost{position:fixed;right:1.5rem;bottom:1.5rem;width:min(90vw,360px);background:#161616;border:1px solid #333;border-radius:1rem;padding:1rem}
.ghost summary{cursor:pointer;text-transform:uppercase;letter-spacing:.2em;font-size:.75rem}
.ghost .log{max-height:50vh;overflow-y:auto;margin:1rem 0;font-size:.85rem}
.ghost .log p{margin:.4rem 0}
.ghost .log p.user{text-align:right;opacity:.7}
.ghost input{width:100%;background:#0a0a0a;color:inherit;border:1px solid #333;border-radius:.5rem;padding:.5rem}
"#;

const GHOST_PANEL: &str = r#"<details id="ghost" class="ghost"><summary>Ask the Ghost</summary><div class="log" aria-live="polite"></div><form><input name="message" autocomplete="off" placeholder="Type a message..."></form></details>"#;

const GHOST_SCRIPT: &str = r#"
(function(){
var panel=document.getElementById('ghost');if(!panel)return;
var log=panel.querySelector('.log'),form=panel.querySelector('form'),input=form.querySelector('input');
var session=null;
function line(role,text){var p=document.createElement('p');p.className=role;p.textContent=text;log.appendChild(p);}
function render(t){log.innerHTML='';t.messages.forEach(function(m){line(m.role,m.text);});if(t.loading){line('ghost loading','...');}log.scrollTop=log.scrollHeight;}
function open(){
if(session)return Promise.resolve(session);
return fetch('/api/ghost/sessions',{method:'POST'}).then(function(r){return r.json();}).then(function(t){session=t.id;render(t);return session;});
}
panel.addEventListener('toggle',function(){
if(panel.open){open();return;}
if(session){fetch('/api/ghost/sessions/'+session,{method:'DELETE'});session=null;log.innerHTML='';}
});
form.addEventListener('submit',function(e){
e.preventDefault();var text=input.value.trim();if(!text)return;input.value='';
open().then(function(id){
line('user',text);
return fetch('/api/ghost/sessions/'+id+'/messages',{method:'POST',headers:{'Content-Type':'application/json'},body:JSON.stringify({message:text})});
}).then(function(r){if(r.status===404){session=null;return null;}return r.ok?r.json():null;})
.then(function(o){if(o&&!o.superseded)render(o.transcript);});
});
})();
"#;

const SCROLL_RESET: &str = "if('scrollRestoration' in history){history.scrollRestoration='manual';}window.scrollTo(0,0);";

/// Wrap page content in the shared shell
pub fn layout(title: &str, active: Page, body: &str) -> String {
    let nav: String = [Page::Home, Page::About]
        .iter()
        .map(|page| {
            let class = if *page == active { " class=\"active\"" } else { "" };
            format!(
                "<a href=\"{}\"{}>{}</a>",
                page.path(),
                class,
                page.label()
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{styles}</style>
<script>{scroll}</script>
</head>
<body>
<nav class="top"><span>Portfolio</span><div>{nav}</div></nav>
<main>
{body}
</main>
{ghost}
<script>{ghost_script}</script>
</body>
</html>"#,
        title = escape_html(title),
        styles = STYLES,
        scroll = SCROLL_RESET,
        nav = nav,
        body = body,
        ghost = GHOST_PANEL,
        ghost_script = GHOST_SCRIPT,
    )
}

/// Render an image that swaps to its placeholder once if loading fails
///
/// The handler clears itself before swapping, so a failing placeholder
/// cannot trigger a second swap.
pub fn fallback_img(image: &FallbackImage, alt: &str) -> String {
    format!(
        r#"<img src="{src}" alt="{alt}" loading="lazy" data-fallback="{fallback}" onerror="this.onerror=null;this.src=this.dataset.fallback;">"#,
        src = escape_html(image.src()),
        alt = escape_html(alt),
        fallback = escape_html(image.placeholder()),
    )
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Page for any path no route matches
pub async fn not_found_page() -> (StatusCode, Html<String>) {
    let body = format!(
        r#"<section class="pending"><h1>404</h1><p>Nothing lives here.</p><p><a href="{}">Back to the work</a></p></section>"#,
        Page::Home.path()
    );
    (
        StatusCode::NOT_FOUND,
        Html(layout("Not Found", Page::Home, &body)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_fallback_img_carries_placeholder() {
        let html = fallback_img(&FallbackImage::new("https://img.example/a.jpg?w=1&q=2"), "A");
        assert!(html.contains(r#"src="https://img.example/a.jpg?w=1&amp;q=2""#));
        assert!(html.contains("data-fallback=\"https://images.unsplash.com/photo-1580489944761"));
        assert!(html.contains("this.onerror=null"));
    }

    #[test]
    fn test_layout_marks_active_page_and_resets_scroll() {
        let html = layout("About", Page::About, "<p>hi</p>");
        assert!(html.contains(r#"<a href="/about" class="active">About</a>"#));
        assert!(html.contains(r#"<a href="/">Work</a>"#));
        assert!(html.contains("history.scrollRestoration='manual'"));
        assert!(html.contains("<p>hi</p>"));
    }
}
