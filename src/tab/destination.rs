//! Navigation destinations.
//!
//! A [`Destination`] is what callers hand to [`TabRouter::push`] and
//! [`TabRouter::replace`]: a bare path, a [`Tab`], or a parsed href. Every
//! form is normalized into a [`Tab`] before it reaches the reducer.
//!
//! [`TabRouter::push`]: crate::TabRouter::push
//! [`TabRouter::replace`]: crate::TabRouter::replace

// ============================================================================
// Imports
// ============================================================================

use url::Url;

use crate::error::Result;

use super::core::{ParamValue, Params, Tab};

// ============================================================================
// Constants
// ============================================================================

/// Base used to resolve relative hrefs. Only the path, query and fragment
/// of the result are kept.
const PARSE_BASE: &str = "http://tab-router.invalid/";

fn resolve_href(href: &str) -> Result<Url> {
    Ok(Url::parse(PARSE_BASE)?.join(href)?)
}

// ============================================================================
// Destination
// ============================================================================

/// A normalized navigation target.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Destination {
    /// Route path.
    pub path: String,
    /// Route parameters.
    pub params: Params,
    /// Optional element id to scroll to after navigating.
    pub fragment: Option<String>,
}

impl Destination {
    /// Creates a destination for a bare path.
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Params::new(),
            fragment: None,
        }
    }

    /// Adds a single parameter.
    #[inline]
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Replaces all parameters.
    #[inline]
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Sets the fragment target.
    #[inline]
    #[must_use]
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Parses an href of the form `path?query#fragment`.
    ///
    /// Query values are percent-decoded; values with a canonical numeric
    /// form become [`ParamValue::Number`]. An empty input yields `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`](crate::Error::Url) if the href cannot be
    /// resolved.
    pub fn parse(href: &str) -> Result<Self> {
        let url = resolve_href(href)?;

        let path = urlencoding::decode(url.path())
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| url.path().to_string());

        let params = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), ParamValue::parse(&value)))
            .collect();

        let fragment = url
            .fragment()
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| {
                urlencoding::decode(fragment)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| fragment.to_string())
            });

        Ok(Self {
            path,
            params,
            fragment,
        })
    }

    /// Returns `true` if `href` points outside the application.
    ///
    /// Absolute URLs and protocol-relative hrefs (`//host/path`) resolve to
    /// another origin and are external; paths, queries and fragments are
    /// not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`](crate::Error::Url) if the href cannot be
    /// resolved.
    pub fn is_external_href(href: &str) -> Result<bool> {
        let base = Url::parse(PARSE_BASE)?;
        let url = base.join(href)?;
        Ok(url.origin() != base.origin())
    }

    /// Renders the destination back into an href.
    #[must_use]
    pub fn to_href(&self) -> String {
        let mut href = self.path.clone();

        if !self.params.is_empty() {
            let query = self
                .params
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(&value.to_string())
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            href.push('?');
            href.push_str(&query);
        }

        if let Some(fragment) = &self.fragment {
            href.push('#');
            href.push_str(&urlencoding::encode(fragment));
        }

        href
    }

    /// Returns the tab this destination opens.
    #[inline]
    #[must_use]
    pub fn to_tab(&self) -> Tab {
        Tab::with_params(self.path.clone(), self.params.clone())
    }

    /// Splits into the tab and the fragment target.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Tab, Option<String>) {
        (Tab::with_params(self.path, self.params), self.fragment)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&str> for Destination {
    /// A bare path; no query parsing.
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Destination {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<&String> for Destination {
    fn from(path: &String) -> Self {
        Self::new(path.clone())
    }
}

impl From<Tab> for Destination {
    fn from(tab: Tab) -> Self {
        Self {
            path: tab.path,
            params: tab.params,
            fragment: None,
        }
    }
}

impl From<&Tab> for Destination {
    fn from(tab: &Tab) -> Self {
        Self::from(tab.clone())
    }
}

impl From<Destination> for Tab {
    fn from(destination: Destination) -> Self {
        destination.into_parts().0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_path_has_no_params() {
        let dest = Destination::from("/users?id=5");
        assert_eq!(dest.path, "/users?id=5");
        assert!(dest.params.is_empty());
    }

    #[test]
    fn test_parse_path_query_fragment() {
        let dest = Destination::parse("/users?id=5&name=bob#details").unwrap();
        assert_eq!(dest.path, "/users");
        assert_eq!(dest.params.get("id"), Some(&ParamValue::from(5)));
        assert_eq!(dest.params.get("name"), Some(&ParamValue::from("bob")));
        assert_eq!(dest.fragment.as_deref(), Some("details"));
    }

    #[test]
    fn test_parse_decodes_percent_encoding() {
        let dest = Destination::parse("/search?q=hello%20world#sec%201").unwrap();
        assert_eq!(dest.params.get("q"), Some(&ParamValue::from("hello world")));
        assert_eq!(dest.fragment.as_deref(), Some("sec 1"));
    }

    #[test]
    fn test_parse_empty_is_root() {
        let dest = Destination::parse("").unwrap();
        assert_eq!(dest.path, "/");
        assert!(dest.params.is_empty());
        assert!(dest.fragment.is_none());
    }

    #[test]
    fn test_parse_empty_fragment_is_none() {
        let dest = Destination::parse("/a#").unwrap();
        assert!(dest.fragment.is_none());
    }

    #[test]
    fn test_to_href() {
        let dest = Destination::new("/search")
            .with_param("q", "a b")
            .with_param("page", 2)
            .with_fragment("top");
        assert_eq!(dest.to_href(), "/search?page=2&q=a%20b#top");
    }

    #[test]
    fn test_href_parses_back() {
        let dest = Destination::new("/a").with_param("id", 5);
        assert_eq!(Destination::parse(&dest.to_href()).unwrap(), dest);
    }

    #[test]
    fn test_tab_conversion_drops_fragment() {
        let dest = Destination::new("/a").with_param("x", 1).with_fragment("f");
        let (tab, fragment) = dest.into_parts();
        assert_eq!(tab, Tab::new("/a").with_param("x", 1));
        assert_eq!(fragment.as_deref(), Some("f"));
    }

    #[test]
    fn test_external_hrefs() -> anyhow::Result<()> {
        assert!(Destination::is_external_href("https://example.com/a")?);
        assert!(Destination::is_external_href("//example.com/a")?);
        assert!(Destination::is_external_href("mailto:someone@example.com")?);
        assert!(!Destination::is_external_href("/a?b=1#c")?);
        assert!(!Destination::is_external_href("relative/path")?);
        Ok(())
    }
}
