use thiserror::Error;
use url::Url;

use crate::types::{FormInput, ParseRequest};

/// Reasons a form submission is rejected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("County name is required")]
    MissingCounty,

    #[error("File link is required")]
    MissingLink,

    #[error("Please enter a valid URL")]
    InvalidUrl,
}

impl ValidationError {
    /// Stable machine-readable code used by the JSON API.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCounty => "missing_county",
            Self::MissingLink => "missing_link",
            Self::InvalidUrl => "invalid_url",
        }
    }
}

/// Checks that `link` parses as an absolute URL with both a scheme and a host.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidUrl`] when parsing fails or the URL has
/// no host (e.g. `mailto:` or `file:///` links).
pub fn validate_link(link: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(link).map_err(|_| ValidationError::InvalidUrl)?;
    if url.host_str().is_some_and(|host| !host.is_empty()) {
        Ok(url)
    } else {
        Err(ValidationError::InvalidUrl)
    }
}

impl TryFrom<&FormInput> for ParseRequest {
    type Error = ValidationError;

    /// Validates in order county, link presence, link shape; first failure wins.
    fn try_from(input: &FormInput) -> Result<Self, Self::Error> {
        let county_name = input.county_name.trim();
        if county_name.is_empty() {
            return Err(ValidationError::MissingCounty);
        }

        let link = input.link.trim();
        if link.is_empty() {
            return Err(ValidationError::MissingLink);
        }
        validate_link(link)?;

        Ok(ParseRequest {
            county_name: county_name.to_owned(),
            link: link.to_owned(),
            parse_method: input.parse_method,
            result_type: input.result_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParseMethod, ResultType};

    fn input(county: &str, link: &str) -> FormInput {
        FormInput {
            county_name: county.to_string(),
            link: link.to_string(),
            parse_method: ParseMethod::Zip,
            result_type: ResultType::Candidate,
        }
    }

    #[test]
    fn empty_county_is_rejected() {
        let err = ParseRequest::try_from(&input("", "https://example.com/f.zip")).unwrap_err();
        assert_eq!(err, ValidationError::MissingCounty);
        assert_eq!(err.to_string(), "County name is required");
    }

    #[test]
    fn whitespace_county_is_rejected() {
        let err = ParseRequest::try_from(&input("   \t", "https://example.com/f.zip")).unwrap_err();
        assert_eq!(err, ValidationError::MissingCounty);
    }

    #[test]
    fn empty_link_is_rejected() {
        let err = ParseRequest::try_from(&input("Maricopa", "  ")).unwrap_err();
        assert_eq!(err, ValidationError::MissingLink);
        assert_eq!(err.to_string(), "File link is required");
    }

    #[test]
    fn county_is_checked_before_link() {
        let err = ParseRequest::try_from(&input("", "")).unwrap_err();
        assert_eq!(err, ValidationError::MissingCounty);
    }

    #[test]
    fn malformed_link_is_rejected() {
        let err = ParseRequest::try_from(&input("Maricopa", "not-a-url")).unwrap_err();
        assert_eq!(err, ValidationError::InvalidUrl);
        assert_eq!(err.to_string(), "Please enter a valid URL");
    }

    #[test]
    fn link_without_host_is_rejected() {
        assert_eq!(
            validate_link("mailto:clerk@example.com").unwrap_err(),
            ValidationError::InvalidUrl
        );
        assert_eq!(
            validate_link("file:///tmp/results.zip").unwrap_err(),
            ValidationError::InvalidUrl
        );
    }

    #[test]
    fn valid_input_is_trimmed_but_case_preserved() {
        let req = ParseRequest::try_from(&input("  Maricopa ", " https://example.com/f.zip\n"))
            .expect("valid input");
        assert_eq!(req.county_name(), "Maricopa");
        assert_eq!(req.link(), "https://example.com/f.zip");
    }

    #[test]
    fn link_is_sent_as_entered_not_normalised() {
        let req = ParseRequest::try_from(&input("Pima", "HTTPS://Example.com"))
            .expect("valid input");
        assert_eq!(req.link(), "HTTPS://Example.com");
    }
}
