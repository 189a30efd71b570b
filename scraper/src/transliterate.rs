//! Bengali → ITRANS romanization.
//!
//! Only text whose dominant script is Bengali is rewritten. Everything else,
//! including Latin text and other Indic scripts, is returned untouched.

use std::borrow::Cow;

use common::Listing;
use whatlang::Script;

const VIRAMA: char = '\u{09CD}';
const NUKTA: char = '\u{09BC}';
const AU_LENGTH_MARK: char = '\u{09D7}';
const SIGN_E: char = '\u{09C7}';
const SIGN_AA: char = '\u{09BE}';
const ZWNJ: char = '\u{200C}';
const ZWJ: char = '\u{200D}';

fn consonant(c: char) -> Option<&'static str> {
    let roman = match c {
        'ক' => "k",
        'খ' => "kh",
        'গ' => "g",
        'ঘ' => "gh",
        'ঙ' => "~N",
        'চ' => "ch",
        'ছ' => "Ch",
        'জ' => "j",
        'ঝ' => "jh",
        'ঞ' => "~n",
        'ট' => "T",
        'ঠ' => "Th",
        'ড' => "D",
        'ঢ' => "Dh",
        'ণ' => "N",
        'ত' => "t",
        'থ' => "th",
        'দ' => "d",
        'ধ' => "dh",
        'ন' => "n",
        'প' => "p",
        'ফ' => "ph",
        'ব' => "b",
        'ভ' => "bh",
        'ম' => "m",
        'য' => "y",
        'র' => "r",
        'ল' => "l",
        'শ' => "sh",
        'ষ' => "Sh",
        'স' => "s",
        'হ' => "h",
        '\u{09DC}' => ".D",
        '\u{09DD}' => ".Dh",
        '\u{09DF}' => "Y",
        _ => return None,
    };
    Some(roman)
}

/// Consonant + combining nukta, for text that arrives decomposed.
fn nukta_form(c: char) -> Option<&'static str> {
    match c {
        'ড' => Some(".D"),
        'ঢ' => Some(".Dh"),
        'য' => Some("Y"),
        _ => None,
    }
}

fn independent_vowel(c: char) -> Option<&'static str> {
    let roman = match c {
        'অ' => "a",
        'আ' => "A",
        'ই' => "i",
        'ঈ' => "I",
        'উ' => "u",
        'ঊ' => "U",
        'ঋ' => "RRi",
        '\u{09E0}' => "RRI",
        'ঌ' => "LLi",
        '\u{09E1}' => "LLI",
        'এ' => "e",
        'ঐ' => "ai",
        'ও' => "o",
        'ঔ' => "au",
        _ => return None,
    };
    Some(roman)
}

fn vowel_sign(c: char) -> Option<&'static str> {
    let roman = match c {
        '\u{09BE}' => "A",
        '\u{09BF}' => "i",
        '\u{09C0}' => "I",
        '\u{09C1}' => "u",
        '\u{09C2}' => "U",
        '\u{09C3}' => "RRi",
        '\u{09C4}' => "RRI",
        '\u{09E2}' => "LLi",
        '\u{09E3}' => "LLI",
        '\u{09C7}' => "e",
        '\u{09C8}' => "ai",
        '\u{09CB}' => "o",
        '\u{09CC}' => "au",
        _ => return None,
    };
    Some(roman)
}

fn symbol(c: char) -> Option<&'static str> {
    let roman = match c {
        '\u{0981}' => ".N",
        '\u{0982}' => "M",
        '\u{0983}' => "H",
        '\u{09BD}' => ".a",
        // khanda ta never carries a vowel
        '\u{09CE}' => "t",
        '\u{0964}' => "|",
        '\u{0965}' => "||",
        '০' => "0",
        '১' => "1",
        '২' => "2",
        '৩' => "3",
        '৪' => "4",
        '৫' => "5",
        '৬' => "6",
        '৭' => "7",
        '৮' => "8",
        '৯' => "9",
        _ => return None,
    };
    Some(roman)
}

/// True when Bengali is the dominant script of `text`.
pub fn is_bengali(text: &str) -> bool {
    whatlang::detect_script(text) == Some(Script::Bengali)
}

/// Romanizes Bengali characters to ITRANS; other characters are copied as-is.
pub fn bengali_to_itrans(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut chars = text.chars().peekable();
    // Set after a consonant until a vowel sign or virama decides its vowel.
    let mut inherent_a = false;

    while let Some(c) = chars.next() {
        if let Some(sign) = vowel_sign(c) {
            // ো and ৌ may arrive as ে + া / ে + ৗ
            let sign = match (c, chars.peek()) {
                (SIGN_E, Some(&SIGN_AA)) => {
                    chars.next();
                    "o"
                }
                (SIGN_E, Some(&AU_LENGTH_MARK)) => {
                    chars.next();
                    "au"
                }
                _ => sign,
            };
            out.push_str(sign);
            inherent_a = false;
            continue;
        }

        match c {
            VIRAMA => {
                inherent_a = false;
                continue;
            }
            NUKTA | AU_LENGTH_MARK | ZWNJ | ZWJ => continue,
            _ => {}
        }

        if inherent_a {
            out.push('a');
            inherent_a = false;
        }

        if let Some(base) = consonant(c) {
            let roman = match chars.peek() {
                Some(&NUKTA) => {
                    chars.next();
                    nukta_form(c).unwrap_or(base)
                }
                _ => base,
            };
            out.push_str(roman);
            inherent_a = true;
        } else if let Some(roman) = independent_vowel(c).or_else(|| symbol(c)) {
            out.push_str(roman);
        } else {
            out.push(c);
        }
    }

    if inherent_a {
        out.push('a');
    }
    out
}

pub fn transliterate_if_bengali(text: &str) -> Cow<'_, str> {
    if is_bengali(text) {
        Cow::Owned(bengali_to_itrans(text))
    } else {
        Cow::Borrowed(text)
    }
}

/// Romanizes every text field. The job link is a URL and is left alone.
pub fn romanize_listing(listing: Listing) -> Listing {
    let romanize = |field: String| match transliterate_if_bengali(&field) {
        Cow::Borrowed(_) => field,
        Cow::Owned(romanized) => romanized,
    };

    Listing {
        title: romanize(listing.title),
        company: romanize(listing.company),
        location: romanize(listing.location),
        experience: romanize(listing.experience),
        deadline: romanize(listing.deadline),
        education: romanize(listing.education),
        job_link: listing.job_link,
    }
}
