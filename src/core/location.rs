//! # Locations
//!
//! The typed form of the app's URL. Two routes exist:
//!
//! ```text
//! /?category=<c>&tag=<t>     listing  (home is plain "/")
//! /faq/<id>?category=<c>     detail   (category is back-context only)
//! ```
//!
//! Parameter values are carried raw: validation into a `Category` happens in
//! the reducer, so a shared link with a bogus category still parses.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use url::Url;
use url::form_urlencoded;

const DETAIL_PREFIX: &str = "faq";

/// Characters escaped inside an id path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Used only to resolve relative input; never shown.
const PARSE_BASE: &str = "http://localhost/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Listing {
        category: Option<String>,
        tag: Option<String>,
    },
    Detail {
        id: String,
        category: Option<String>,
    },
    NotFound {
        path: String,
    },
}

impl Location {
    /// The canonical home location, `/`.
    pub fn home() -> Self {
        Location::Listing {
            category: None,
            tag: None,
        }
    }

    pub fn listing(category: &str, tag: Option<&str>) -> Self {
        Location::Listing {
            category: Some(category.to_string()),
            tag: tag.map(str::to_string),
        }
    }

    pub fn detail(id: &str, category: Option<&str>) -> Self {
        Location::Detail {
            id: id.to_string(),
            category: category.map(str::to_string),
        }
    }

    /// Parses a relative path (`/faq/3?category=a`) or an absolute URL.
    ///
    /// Total: anything that is not a known route becomes `NotFound`.
    pub fn parse(input: &str) -> Self {
        let parsed = Url::parse(PARSE_BASE).and_then(|base| base.join(input.trim()));
        let url = match parsed {
            Ok(url) => url,
            Err(_) => {
                return Location::NotFound {
                    path: input.to_string(),
                };
            }
        };

        let segments: Vec<String> = url
            .path_segments()
            .map(|segs| {
                segs.filter(|s| !s.is_empty())
                    .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        let category = query_param(&url, "category");
        match segments.as_slice() {
            [] => Location::Listing {
                category,
                tag: query_param(&url, "tag"),
            },
            [prefix, id] if prefix == DETAIL_PREFIX => Location::Detail {
                id: id.clone(),
                category,
            },
            _ => Location::NotFound {
                path: url.path().to_string(),
            },
        }
    }

    /// Absolute, shareable URL under `base` (only the origin of `base` is kept).
    pub fn to_url(&self, base: &Url) -> String {
        match base.join(&self.to_string()) {
            Ok(url) => url.to_string(),
            Err(_) => self.to_string(),
        }
    }
}

/// First non-empty value of `key`, form-decoded.
fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

fn write_query(f: &mut fmt::Formatter<'_>, pairs: &[(&str, &Option<String>)]) -> fmt::Result {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        if let Some(value) = value {
            serializer.append_pair(key, value);
        }
    }
    let query = serializer.finish();
    if query.is_empty() {
        Ok(())
    } else {
        write!(f, "?{query}")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Listing { category, tag } => {
                f.write_str("/")?;
                write_query(f, &[("category", category), ("tag", tag)])
            }
            Location::Detail { id, category } => {
                write!(f, "/{}/{}", DETAIL_PREFIX, utf8_percent_encode(id, SEGMENT))?;
                write_query(f, &[("category", category)])
            }
            Location::NotFound { path } => f.write_str(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_is_slash() {
        assert_eq!(Location::home().to_string(), "/");
        assert_eq!(Location::parse("/"), Location::home());
        assert_eq!(Location::parse(""), Location::home());
    }

    #[test]
    fn test_listing_with_params() {
        let loc = Location::listing("piano", Some("tuning"));
        assert_eq!(loc.to_string(), "/?category=piano&tag=tuning");
        assert_eq!(Location::parse(&loc.to_string()), loc);
    }

    #[test]
    fn test_listing_encodes_special_characters() {
        let loc = Location::listing("how & why", Some("a/b"));
        let text = loc.to_string();
        assert!(!text.contains(' '));
        assert_eq!(Location::parse(&text), loc);
    }

    #[test]
    fn test_empty_params_are_absent() {
        assert_eq!(Location::parse("/?category=&tag="), Location::home());
    }

    #[test]
    fn test_unrelated_params_ignored() {
        assert_eq!(
            Location::parse("/?utm_source=x&category=piano"),
            Location::listing("piano", None)
        );
    }

    #[test]
    fn test_detail_round_trip() {
        let loc = Location::detail("7", Some("contact"));
        assert_eq!(loc.to_string(), "/faq/7?category=contact");
        assert_eq!(Location::parse("/faq/7?category=contact"), loc);
        assert_eq!(Location::parse("/faq/7"), Location::detail("7", None));
    }

    #[test]
    fn test_detail_id_is_percent_encoded() {
        let loc = Location::detail("a b/c", None);
        assert_eq!(loc.to_string(), "/faq/a%20b%2Fc");
        assert_eq!(Location::parse(&loc.to_string()), loc);
    }

    #[test]
    fn test_absolute_url_input() {
        assert_eq!(
            Location::parse("https://example.com/?category=guitar"),
            Location::listing("guitar", None)
        );
    }

    #[test]
    fn test_unknown_route() {
        assert!(matches!(Location::parse("/pricing"), Location::NotFound { ref path } if path == "/pricing"));
        assert!(matches!(Location::parse("/faq"), Location::NotFound { .. }));
    }

    #[test]
    fn test_to_url_uses_base_origin() {
        let base = Url::parse("https://help.example.com/ignored/path").unwrap();
        assert_eq!(
            Location::listing("piano", None).to_url(&base),
            "https://help.example.com/?category=piano"
        );
    }
}
