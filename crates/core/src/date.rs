//! Verbose, locale-aware rendering of post dates.
//!
//! Posts display their date in the long style: full weekday, full month
//! name, numeric day and year (`Tuesday, March 5, 2024` in `en-US`).

use crate::error::FormatError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Locales with a known verbose date pattern.
///
/// The set is closed: any other tag is resolved to `en-US` by
/// [`Locale::resolve`], with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// `en-US`: `Tuesday, March 5, 2024`
    EnUs,
    /// `en-GB`: `Tuesday 5 March 2024`
    EnGb,
    /// `de-DE`: `Dienstag, 5. März 2024`
    De,
    /// `fr-FR`: `mardi 5 mars 2024`
    Fr,
    /// `es-ES`: `martes, 5 de marzo de 2024`
    Es,
    /// `nl-NL`: `dinsdag 5 maart 2024`
    Nl,
    /// `ja-JP`: `2024年3月5日火曜日`
    Ja,
}

const EN_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const DE_WEEKDAYS: [&str; 7] = [
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
    "Sonntag",
];
const DE_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];
const FR_WEEKDAYS: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];
const FR_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];
const ES_WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];
const ES_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];
const NL_WEEKDAYS: [&str; 7] = [
    "maandag",
    "dinsdag",
    "woensdag",
    "donderdag",
    "vrijdag",
    "zaterdag",
    "zondag",
];
const NL_MONTHS: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];
const JA_WEEKDAYS: [&str; 7] = [
    "月曜日",
    "火曜日",
    "水曜日",
    "木曜日",
    "金曜日",
    "土曜日",
    "日曜日",
];

impl Locale {
    /// Parses a BCP 47 tag such as `en-US`, `de` or `fr_FR`.
    ///
    /// A bare language picks that language's default region. Returns `None`
    /// for languages without a pattern.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let mut parts = normalized.split('-');
        let language = parts.next().unwrap_or_default();
        let region = parts.next();

        match (language, region) {
            ("en", Some("gb" | "uk" | "ie" | "au" | "nz")) => Some(Locale::EnGb),
            ("en", _) => Some(Locale::EnUs),
            ("de", _) => Some(Locale::De),
            ("fr", _) => Some(Locale::Fr),
            ("es", _) => Some(Locale::Es),
            ("nl", _) => Some(Locale::Nl),
            ("ja", _) => Some(Locale::Ja),
            _ => None,
        }
    }

    /// Like [`Locale::from_tag`], falling back to `en-US` for unknown tags.
    pub fn resolve(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_else(|| {
            log::warn!("No date pattern for locale '{}', using en-US", tag);
            Locale::EnUs
        })
    }

    /// Formats `date` in this locale's verbose style.
    pub fn format_long(self, date: NaiveDate) -> String {
        let weekday = date.weekday().num_days_from_monday() as usize;
        let month = date.month0() as usize;
        let day = date.day();
        let year = date.year();

        match self {
            Locale::EnUs => format!(
                "{}, {} {}, {}",
                EN_WEEKDAYS[weekday], EN_MONTHS[month], day, year
            ),
            Locale::EnGb => format!(
                "{} {} {} {}",
                EN_WEEKDAYS[weekday], day, EN_MONTHS[month], year
            ),
            Locale::De => format!(
                "{}, {}. {} {}",
                DE_WEEKDAYS[weekday], day, DE_MONTHS[month], year
            ),
            Locale::Fr => format!(
                "{} {} {} {}",
                FR_WEEKDAYS[weekday], day, FR_MONTHS[month], year
            ),
            Locale::Es => format!(
                "{}, {} de {} de {}",
                ES_WEEKDAYS[weekday], day, ES_MONTHS[month], year
            ),
            Locale::Nl => format!(
                "{} {} {} {}",
                NL_WEEKDAYS[weekday], day, NL_MONTHS[month], year
            ),
            Locale::Ja => format!(
                "{}年{}月{}日{}",
                year,
                month + 1,
                day,
                JA_WEEKDAYS[weekday]
            ),
        }
    }
}

/// Parses the calendar date of a post.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`
/// timestamps. Timestamps keep the calendar day as written, with no
/// time zone conversion.
pub fn parse_post_date(input: &str) -> Result<NaiveDate, FormatError> {
    let trimmed = input.trim();

    let date_only_err = match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => return Ok(date),
        Err(err) => err,
    };
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(datetime.date());
        }
    }

    Err(FormatError::invalid_date(input, date_only_err.to_string()))
}

/// Parses `input` and formats it for `locale` in the verbose post style.
///
/// # Examples
///
/// ```
/// use folio_core::date::format_post_date;
///
/// assert_eq!(format_post_date("2024-03-05", "en-US").unwrap(), "Tuesday, March 5, 2024");
/// assert!(format_post_date("not-a-date", "en-US").is_err());
/// ```
pub fn format_post_date(input: &str, locale: &str) -> Result<String, FormatError> {
    let date = parse_post_date(input)?;
    Ok(Locale::resolve(locale).format_long(date))
}
