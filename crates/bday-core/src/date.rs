//! Birthday extraction from free text.
//!
//! Users either type their birthday or mention it somewhere in their profile
//! bio. [`normalize`] finds the first date-shaped token and reads it as a
//! calendar date; [`canonical`] renders the result as `YYYY-MM-DD`, which is
//! also the storage format.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

// ─── Shapes ──────────────────────────────────────────────────────────────────

/// Date shapes in priority order: `DD-MM-YYYY`, `YYYY-MM-DD`, `DD-MM-YY`,
/// each accepting `-` or `/` as separator. ASCII digits only.
static SHAPES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
  [
    r"[0-9]{2}[/-][0-9]{2}[/-][0-9]{4}",
    r"[0-9]{4}[/-][0-9]{2}[/-][0-9]{2}",
    r"[0-9]{2}[/-][0-9]{2}[/-][0-9]{2}",
  ]
  .map(|pattern| Regex::new(pattern).expect("date shape pattern is valid"))
});

// ─── Layouts ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Order {
  DayFirst,
  YearFirst,
}

/// A concrete textual layout a matched token may be written in.
#[derive(Debug, Clone, Copy)]
struct Layout {
  order:       Order,
  sep:         char,
  year_digits: usize,
}

const LAYOUTS: [Layout; 6] = [
  Layout { order: Order::DayFirst,  sep: '-', year_digits: 4 },
  Layout { order: Order::DayFirst,  sep: '/', year_digits: 4 },
  Layout { order: Order::YearFirst, sep: '-', year_digits: 4 },
  Layout { order: Order::YearFirst, sep: '/', year_digits: 4 },
  Layout { order: Order::DayFirst,  sep: '-', year_digits: 2 },
  Layout { order: Order::DayFirst,  sep: '/', year_digits: 2 },
];

impl Layout {
  fn parse(self, token: &str) -> Option<NaiveDate> {
    let mut parts = token.split(self.sep);
    let (first, second, third) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
      return None;
    }

    let (year, month, day) = match self.order {
      Order::DayFirst => (third, second, first),
      Order::YearFirst => (first, second, third),
    };

    let year = digits(year, self.year_digits)? as i32;
    let year = if self.year_digits == 2 { expand_short_year(year) } else { year };

    NaiveDate::from_ymd_opt(year, digits(month, 2)?, digits(day, 2)?)
  }
}

/// Parse exactly `len` ASCII digits.
fn digits(s: &str, len: usize) -> Option<u32> {
  if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  s.parse().ok()
}

/// Two-digit years: `69..=99` are the 1900s, `00..=68` the 2000s.
fn expand_short_year(yy: i32) -> i32 {
  if yy >= 69 { 1900 + yy } else { 2000 + yy }
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Find a birthday in `text`.
///
/// The first shape (in priority order) that occurs anywhere in `text`
/// decides; only its leftmost occurrence is read. Returns `None` when no
/// shape occurs or when that occurrence is not a real calendar date.
pub fn normalize(text: &str) -> Option<NaiveDate> {
  let token = SHAPES.iter().find_map(|shape| shape.find(text))?;
  LAYOUTS.iter().find_map(|layout| layout.parse(token.as_str()))
}

/// Render a date as `YYYY-MM-DD`.
pub fn canonical(date: NaiveDate) -> String { date.format("%Y-%m-%d").to_string() }
