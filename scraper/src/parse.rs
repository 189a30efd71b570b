//! Listing extraction from a BDJobs search results page.
//!
//! Every result card is a `div.featured-job`. Fields that are missing from a
//! card are filled with the `N/A` placeholder instead of dropping the card.

use common::{Listing, NOT_AVAILABLE};
use regex::Regex;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::{Result, ScrapeError};

const CARD: &str = "div.featured-job";
const TITLE: &str = "div.title a";
const COMPANY: &str = "div.company";
const LOCATION: &str = "div.loccal:not(.exp) p";
const EXPERIENCE: &str = "div.exp.loccal p";
const DEADLINE: &str = "p.dt strong";
const EDUCATION: &str = "div.education li";
const LINK: &str = "div.title a[href]";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| ScrapeError::Selector(css.to_string()))
}

/// Compiled selectors, built once and reused for every page.
pub struct ListingParser {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    experience: Selector,
    deadline: Selector,
    education: Selector,
    link: Selector,
    whitespace: Regex,
    link_base: Url,
}

impl ListingParser {
    pub fn new(link_base: &str) -> Result<Self> {
        let link_base = Url::parse(link_base).map_err(|e| ScrapeError::InvalidUrl {
            url: link_base.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            card: selector(CARD)?,
            title: selector(TITLE)?,
            company: selector(COMPANY)?,
            location: selector(LOCATION)?,
            experience: selector(EXPERIENCE)?,
            deadline: selector(DEADLINE)?,
            education: selector(EDUCATION)?,
            link: selector(LINK)?,
            whitespace: Regex::new(r"\s+")?,
            link_base,
        })
    }

    /// Extracts every listing card on the page, in document order.
    pub fn parse_page(&self, html: &str) -> Vec<Listing> {
        let document = Html::parse_document(html);
        let mut listings = Vec::new();

        for card in document.select(&self.card) {
            match self.parse_card(card) {
                Some(listing) => listings.push(listing),
                None => warn!(
                    markup = %card.html(),
                    "listing card has no recognizable fields, skipping"
                ),
            }
        }

        debug!(count = listings.len(), "parsed listings from page");
        listings
    }

    /// `None` only when the card yields no field at all.
    fn parse_card(&self, card: ElementRef<'_>) -> Option<Listing> {
        let title = self.text_of(card, &self.title);
        let company = self.text_of(card, &self.company);
        let location = self.text_of(card, &self.location);
        let experience = self.text_of(card, &self.experience);
        let deadline = self.text_of(card, &self.deadline);
        let education = self.text_of(card, &self.education);
        let job_link = self.link_of(card);

        let found = [
            &title,
            &company,
            &location,
            &experience,
            &deadline,
            &education,
            &job_link,
        ];
        if found.iter().all(|field| field.is_none()) {
            return None;
        }

        let missing: Vec<&str> = Listing::COLUMNS
            .iter()
            .zip(found)
            .filter(|(_, field)| field.is_none())
            .map(|(column, _)| *column)
            .collect();
        if !missing.is_empty() {
            warn!(
                ?missing,
                markup = %card.html(),
                "incomplete listing, missing fields set to N/A"
            );
        }

        let or_placeholder =
            |field: Option<String>| field.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        Some(Listing {
            title: or_placeholder(title),
            company: or_placeholder(company),
            location: or_placeholder(location),
            experience: or_placeholder(experience),
            deadline: or_placeholder(deadline),
            education: or_placeholder(education),
            job_link: or_placeholder(job_link),
        })
    }

    fn text_of(&self, card: ElementRef<'_>, selector: &Selector) -> Option<String> {
        card.select(selector)
            .next()
            .map(|el| self.clean_text(el))
            .filter(|text| !text.is_empty())
    }

    fn clean_text(&self, el: ElementRef<'_>) -> String {
        let raw = el.text().collect::<String>();
        self.whitespace.replace_all(raw.trim(), " ").into_owned()
    }

    fn link_of(&self, card: ElementRef<'_>) -> Option<String> {
        let href = card
            .select(&self.link)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())?;

        match self.link_base.join(href) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                warn!(href, error = %e, "unresolvable job link");
                None
            }
        }
    }
}
