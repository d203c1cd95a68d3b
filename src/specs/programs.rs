// src/specs/programs.rs
// A channel's programming page: one `div.accordion` per programme.
//
//   <div class="accordion [accordion--live]" id="123">
//     <div class="accordionTitle__time">..</div>
//     <div class="accordionTitle__logo"><img src=".."></div>
//     <div class="accordionTitle__name">..</div>
//     (live only) <picture><img src=".."></picture> or <div class="poster__background" style='..url("..")'>
//                 <p class="accordion-panel__synopsis">, <div class="genre-badge"><span>..</span></div>,
//                 <svg class="parental-rating"><title>Classificação: 12 anos</title></svg>
//   </div>

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::catalog::ChannelMatch;
use crate::config::consts::SITE_PREFIX;
use crate::core::html::{compile, first_text, text_content};
use crate::error::{ChannelError, Result};

const LIVE_CLASS: &str = "accordion--live";
const LIVE_TIME_MARK: &str = "TV";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub time: Option<String>,
    /// Start time of the next programme; `None` for the last one.
    pub end_time: Option<String>,
    pub logo: Option<String>,
    pub live: bool,
    /// Only filled in for the programme on air.
    #[serde(flatten)]
    pub details: Option<LiveDetails>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveDetails {
    pub preview: Option<String>,
    pub synopsis: Option<String>,
    pub genre: Option<String>,
    pub parental_rating: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSchedule {
    pub name: String,
    pub code: String,
    pub category: String,
    pub live_now: Option<Program>,
    pub programs: Vec<Program>,
}

struct Selectors {
    accordion: Selector,
    name: Selector,
    time: Selector,
    logo: Selector,
    img: Selector,
    picture: Selector,
    poster_background: Selector,
    synopsis: Selector,
    genre_badge: Selector,
    span: Selector,
    parental_rating: Selector,
    title: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            accordion: compile("div.accordion")?,
            name: compile("div.accordionTitle__name")?,
            time: compile("div.accordionTitle__time")?,
            logo: compile("div.accordionTitle__logo")?,
            img: compile("img")?,
            picture: compile("picture")?,
            poster_background: compile("div.poster__background")?,
            synopsis: compile("p.accordion-panel__synopsis")?,
            genre_badge: compile("div.genre-badge")?,
            span: compile("span")?,
            parental_rating: compile("svg.parental-rating")?,
            title: compile("title")?,
        })
    }
}

/// Absolute address of a catalog url (`/globorio/programacao`).
pub fn page_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return s!(url);
    }
    join!(SITE_PREFIX.trim_end_matches('/'), "/", url.trim_start_matches('/'))
}

/// Every programme on the page, in page order, with end times chained.
pub fn parse_programs(html: &str) -> Result<Vec<Program>> {
    let doc = Html::parse_document(html);
    let sel = Selectors::new()?;

    let mut programs: Vec<Program> = Vec::new();
    for block in doc.select(&sel.accordion) {
        let live = block.value().classes().any(|c| c == LIVE_CLASS);

        let mut time = first_text(block, &sel.time);
        // Live rows read like "Agora na TV 09:00"
        if live {
            if let Some(t) = time.as_deref().filter(|t| t.contains(LIVE_TIME_MARK)) {
                time = t.split(LIVE_TIME_MARK).nth(1).map(|rest| s!(rest.trim()));
            }
        }

        if let Some(prev) = programs.last_mut() {
            prev.end_time = time.clone();
        }

        let details = if live { Some(live_details(block, &sel)) } else { None };

        programs.push(Program {
            id: block.value().attr("id").and_then(|v| v.trim().parse().ok()),
            name: first_text(block, &sel.name),
            time,
            end_time: None,
            logo: block
                .select(&sel.logo)
                .next()
                .and_then(|d| img_src(d, &sel.img)),
            live,
            details,
        });
    }

    log::debug!("{} programmes parsed", programs.len());
    Ok(programs)
}

fn live_details(block: ElementRef<'_>, sel: &Selectors) -> LiveDetails {
    let preview = block
        .select(&sel.picture)
        .next()
        .and_then(|p| img_src(p, &sel.img))
        .or_else(|| {
            block
                .select(&sel.poster_background)
                .next()
                .and_then(|d| d.value().attr("style"))
                .and_then(|style| style.split('"').nth(1))
                .map(String::from)
        });

    let genre = block
        .select(&sel.genre_badge)
        .next()
        .and_then(|g| g.select(&sel.span).last())
        .map(|span| s!(text_content(span).trim()));

    let parental_rating = block
        .select(&sel.parental_rating)
        .next()
        .and_then(|svg| svg.select(&sel.title).next())
        .and_then(|t| parse_rating(&text_content(t)));

    LiveDetails {
        preview,
        synopsis: first_text(block, &sel.synopsis),
        genre,
        parental_rating,
    }
}

fn img_src(container: ElementRef<'_>, img: &Selector) -> Option<String> {
    container
        .select(img)
        .next()
        .and_then(|i| i.value().attr("src"))
        .map(String::from)
}

/// `"Classificação indicativa: 12 anos"` → `12`. `"Livre"` and friends → `None`.
pub fn parse_rating(title: &str) -> Option<u32> {
    title.split(": ").nth(1)?.split(' ').next()?.trim().parse().ok()
}

/// Wrap parsed programmes with the channel they belong to.
pub fn schedule(channel: &ChannelMatch, programs: Vec<Program>) -> Result<ChannelSchedule> {
    if programs.is_empty() {
        return Err(ChannelError::EmptySchedule(channel.code.clone()));
    }
    let live_now = programs.iter().find(|p| p.live).cloned();
    Ok(ChannelSchedule {
        name: channel.name.clone(),
        code: channel.code.clone(),
        category: channel.category.clone(),
        live_now,
        programs,
    })
}
