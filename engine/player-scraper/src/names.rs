//! Player display names derived from profile URLs.
//!
//! The site does not label its box score tables with the player's name, so the
//! name is recovered from the profile slug: `.../player/paige-bueckers-3f9a`
//! becomes `Paige Bueckers`. Only the first two hyphen-separated tokens are
//! used, which means names with a middle token or particle come out wrong
//! (`van-der-berg-x1` gives `Van Der`). Swap this function out if that matters.

use crate::error::{Result, ScrapeError};

/// Derive `"First Last"` from the last path segment of a player URL.
pub fn parse_player_name(url: &str) -> Result<String> {
    let slug = url.rsplit('/').next().unwrap_or_default();
    let mut tokens = slug.split('-');

    match (tokens.next(), tokens.next()) {
        (Some(first), Some(last)) => Ok(format!("{} {}", title_case(first), title_case(last))),
        _ => Err(ScrapeError::InvalidPlayerSlug(url.to_string())),
    }
}

/// Upper-case the first letter of every run of cased characters and lower-case
/// the rest, so `o'neil` becomes `O'Neil` and `JOHN` becomes `John`.
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_cased = false;

    for ch in word.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased && !prev_cased {
            out.extend(ch.to_uppercase());
        } else if cased {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        prev_cased = cased;
    }

    out
}
