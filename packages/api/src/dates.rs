use chrono::{DateTime, Datelike, Utc};

use crate::lang::Lang;

const MONTHS_UZ: [&str; 12] = [
    "yanvar", "fevral", "mart", "aprel", "may", "iyun", "iyul", "avgust", "sentabr", "oktabr",
    "noyabr", "dekabr",
];

// Genitive, as used next to a day number.
const MONTHS_RU: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

const MONTHS_RU_NOMINATIVE: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
    "октябрь", "ноябрь", "декабрь",
];

fn month_index(dt: &DateTime<Utc>) -> usize {
    dt.month0() as usize
}

/// Article and issue dates, e.g. `5-mart, 2024` / `5 марта 2024`.
pub fn format_long_date(dt: &DateTime<Utc>, lang: Lang) -> String {
    let m = month_index(dt);
    match lang {
        Lang::Uz => format!("{}-{}, {}", dt.day(), MONTHS_UZ[m], dt.year()),
        Lang::Ru => format!("{} {} {}", dt.day(), MONTHS_RU[m], dt.year()),
    }
}

/// Archive card label, e.g. `Mart 2024` / `Март 2024`.
pub fn format_month_year(dt: &DateTime<Utc>, lang: Lang) -> String {
    let m = month_index(dt);
    let month = match lang {
        Lang::Uz => MONTHS_UZ[m],
        Lang::Ru => MONTHS_RU_NOMINATIVE[m],
    };
    format!("{} {}", capitalize(month), dt.year())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
