use chrono::{Datelike, NaiveDate};

/// Inclusive date window used to filter the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }

    /// `true` when `date` parses as YYYY-MM-DD and falls inside the window.
    pub fn contains_str(&self, date: &str) -> bool {
        parse_date(date).is_some_and(|d| self.contains(d))
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a period filter.
///
/// Supported: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, ranges `start:end` of those,
/// and `all` (→ `None`, no filtering).
pub fn parse_period(p: &str) -> Result<Option<Period>, String> {
    let p = p.trim();
    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if let Some((start, end)) = p.split_once(':') {
        let s = generate_from_period(start)?;
        let e = generate_from_period(end)?;
        if s.start > e.end {
            return Err(format!("{} (start after end)", p));
        }
        return Ok(Some(Period {
            start: s.start,
            end: e.end,
        }));
    }

    generate_from_period(p).map(Some)
}

pub fn generate_from_period(p: &str) -> Result<Period, String> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok(Period { start: d, end: d });
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&(p.trim().to_string() + "-01"), "%Y-%m-%d") {
        return month_period(dm.year(), dm.month()).ok_or_else(|| p.to_string());
    }

    // YYYY
    if let Ok(year) = p.trim().parse::<i32>() {
        let start = NaiveDate::from_ymd_opt(year, 1, 1);
        let end = NaiveDate::from_ymd_opt(year, 12, 31);
        if let (Some(start), Some(end)) = (start, end) {
            return Ok(Period { start, end });
        }
    }

    Err(p.to_string())
}

fn month_period(year: i32, month: u32) -> Option<Period> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(Period {
        start,
        end: next.pred_opt()?,
    })
}
