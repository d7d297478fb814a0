use chrono::{DateTime, Duration, Local, LocalResult, NaiveDateTime, Offset, TimeZone};
use thiserror::Error;

/// Launch instant, read in the visitor's local time zone.
pub const LAUNCH_AT: &str = "2026-02-22T00:00:00";

pub const CONTACT_ADD_PATH: &str = "/api/contact/contact-add";

pub const LOGO_SRC: &str = "/logo.png";
pub const DESKTOP_VIDEO_SRC: &str = "/videos/hero-desktop.mp4";
pub const MOBILE_VIDEO_SRC: &str = "/videos/hero-mobile.mp4";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/";

/// The contact service lives on its own origin in every build.
pub fn get_backend_url() -> &'static str {
    "http://localhost:5000"
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid launch date {value:?}: {source}")]
    InvalidLaunchDate {
        value: String,
        source: chrono::ParseError,
    },
}

/// Everything the landing page needs to know about the launch it advertises.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub target: DateTime<Local>,
    pub contact_endpoint: String,
    pub logo_src: String,
    pub desktop_video_src: String,
    pub mobile_video_src: String,
    pub social_url: String,
    /// Scroll-linked fade of the hero video, built with the `parallax` feature.
    pub parallax: bool,
}

impl SiteConfig {
    pub fn launch() -> Result<Self, ConfigError> {
        Ok(Self {
            target: parse_local_instant(LAUNCH_AT)?,
            contact_endpoint: format!("{}{}", get_backend_url(), CONTACT_ADD_PATH),
            logo_src: LOGO_SRC.to_string(),
            desktop_video_src: DESKTOP_VIDEO_SRC.to_string(),
            mobile_video_src: MOBILE_VIDEO_SRC.to_string(),
            social_url: INSTAGRAM_URL.to_string(),
            parallax: cfg!(feature = "parallax"),
        })
    }
}

/// Reads a zone-less `YYYY-MM-DDTHH:MM:SS` timestamp as local wall-clock time.
pub fn parse_local_instant(value: &str) -> Result<DateTime<Local>, ConfigError> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").map_err(|source| {
        ConfigError::InvalidLaunchDate {
            value: value.to_string(),
            source,
        }
    })?;

    Ok(resolve_local(&Local, &naive))
}

/// Maps a wall-clock reading to an instant the way browsers do: a repeated
/// hour resolves to its first occurrence, and a skipped hour is read with the
/// offset in force before the jump, which lands the same distance past it.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: &NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let before = tz.offset_from_utc_datetime(&(*naive - Duration::days(1))).fix();
            tz.from_utc_datetime(&(*naive - Duration::seconds(i64::from(before.local_minus_utc()))))
        }
    }
}
