extern crate regex;
use self::regex::Regex;

use crate::types::genre::get_genre;

/// Split "3" or "3/12" style TRCK / TPOS values.
pub fn get_number_pair(input: &str) -> (Option<u32>, Option<u32>) {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\s*(\d+)(?:\s*/\s*(\d+))?\s*$").unwrap();
    }

    match RE.captures(input) {
        None => (None, None),
        Some(c) => (
            c.get(1).and_then(|s| s.as_str().parse().ok()),
            c.get(2).and_then(|s| s.as_str().parse().ok()),
        ),
    }
}

/// Resolve "(17)", "17", "(RX)" and "(17)Refinement" style TCON values.
pub fn get_genre_name(input: &str) -> String {
    lazy_static! {
        static ref REFERENCE: Regex = Regex::new(r"^\((\d{1,3}|RX|CR)\)(.*)$").unwrap();
        static ref NUMERIC: Regex = Regex::new(r"^\d{1,3}$").unwrap();
    }

    let code = match REFERENCE.captures(input) {
        Some(c) => {
            let refinement = c.get(2).map_or("", |s| s.as_str());
            if !refinement.is_empty() {
                return refinement.to_string();
            }
            c.get(1).map_or("", |s| s.as_str())
        }
        None if NUMERIC.is_match(input) => input,
        None => return input.to_string(),
    };

    match code {
        "RX" => "Remix".to_string(),
        "CR" => "Cover".to_string(),
        n => match n.parse::<u8>().ok().and_then(get_genre) {
            Some(g) => g.to_string(),
            None => input.to_string(),
        },
    }
}
