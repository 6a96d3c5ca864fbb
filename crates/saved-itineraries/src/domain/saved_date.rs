//! Coarse "saved N days ago" labels for list cards.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

const DAYS_PER_WEEK: i64 = 7;
const DAYS_PER_MONTH: i64 = 30;

/// Elapsed time since a save, bucketed to whole days, weeks or months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedDateBucket {
    /// Less than one full day, or a timestamp in the future.
    Today,
    /// Exactly one full day.
    Yesterday,
    /// Two to six days.
    Days(i64),
    /// Seven to twenty-nine days, in whole weeks.
    Weeks(i64),
    /// Thirty days or more, in 30-day months.
    Months(i64),
}

impl SavedDateBucket {
    /// Classify the elapsed wall-clock time between `saved_at` and `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use saved_itineraries::domain::SavedDateBucket;
    ///
    /// let now = Utc::now();
    /// let bucket = SavedDateBucket::between(now - Duration::days(10), now);
    /// assert_eq!(bucket, SavedDateBucket::Weeks(1));
    /// ```
    #[must_use]
    pub fn between(saved_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let days = (now - saved_at).num_days();
        match days {
            i64::MIN..=0 => Self::Today,
            1 => Self::Yesterday,
            2..=6 => Self::Days(days),
            7..=29 => Self::Weeks(days.div_euclid(DAYS_PER_WEEK)),
            _ => Self::Months(days.div_euclid(DAYS_PER_MONTH)),
        }
    }

    /// Render the bucket in `locale`.
    #[must_use]
    pub fn label(self, locale: Locale) -> String {
        match (locale, self) {
            (Locale::French, Self::Today) => "Aujourd'hui".to_owned(),
            (Locale::French, Self::Yesterday) => "Hier".to_owned(),
            (Locale::French, Self::Days(n)) => format!("Il y a {n} jours"),
            (Locale::French, Self::Weeks(1)) => "Il y a 1 semaine".to_owned(),
            (Locale::French, Self::Weeks(n)) => format!("Il y a {n} semaines"),
            (Locale::French, Self::Months(n)) => format!("Il y a {n} mois"),
            (Locale::English, Self::Today) => "Today".to_owned(),
            (Locale::English, Self::Yesterday) => "Yesterday".to_owned(),
            (Locale::English, Self::Days(n)) => format!("{n} days ago"),
            (Locale::English, Self::Weeks(1)) => "1 week ago".to_owned(),
            (Locale::English, Self::Weeks(n)) => format!("{n} weeks ago"),
            (Locale::English, Self::Months(1)) => "1 month ago".to_owned(),
            (Locale::English, Self::Months(n)) => format!("{n} months ago"),
        }
    }
}

/// Languages the relative date labels are available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// French copy, the app's primary language.
    #[default]
    French,
    /// English copy.
    English,
}

impl Locale {
    /// Short language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a locale code is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale '{code}', expected 'fr' or 'en'")]
pub struct UnsupportedLocaleError {
    /// Code that failed to parse.
    pub code: String,
}

impl FromStr for Locale {
    type Err = UnsupportedLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let language = lowered.split(['-', '_']).next().unwrap_or_default();
        match language {
            "fr" => Ok(Self::French),
            "en" => Ok(Self::English),
            _ => Err(UnsupportedLocaleError { code: s.to_owned() }),
        }
    }
}

/// Describe how long ago an itinerary was saved.
///
/// Pure function of its inputs; callers pass the clock reading as `now`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use saved_itineraries::domain::{Locale, format_saved_date};
///
/// let now = Utc::now();
/// let label = format_saved_date(now - Duration::days(3), now, Locale::French);
/// assert_eq!(label, "Il y a 3 jours");
/// ```
#[must_use]
pub fn format_saved_date(saved_at: DateTime<Utc>, now: DateTime<Utc>, locale: Locale) -> String {
    SavedDateBucket::between(saved_at, now).label(locale)
}
