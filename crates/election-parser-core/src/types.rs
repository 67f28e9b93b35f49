use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File format or delivery mechanism of the source election file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMethod {
    #[default]
    Zip,
    Html,
    Pdf,
    Xml,
}

impl ParseMethod {
    pub const ALL: [ParseMethod; 4] = [Self::Zip, Self::Html, Self::Pdf, Self::Xml];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Html => "html",
            Self::Pdf => "pdf",
            Self::Xml => "xml",
        }
    }

    /// Label shown in the link-type selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Zip => "ZIP",
            Self::Html => "HTML",
            Self::Pdf => "PDF",
            Self::Xml => "XML",
        }
    }

    /// Whether the form offers this method as a selectable option.
    ///
    /// Only ZIP archives are handled by the backend today; the others are
    /// still rendered (disabled) and still accepted on the wire.
    #[must_use]
    pub fn is_offered(self) -> bool {
        matches!(self, Self::Zip)
    }
}

impl fmt::Display for ParseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseMethod {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownOption {
                field: "link type",
                value: s.to_owned(),
            })
    }
}

/// Whether the parsed output concerns candidates or ballot measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    #[default]
    Candidate,
    Measure,
}

impl ResultType {
    pub const ALL: [ResultType; 2] = [Self::Candidate, Self::Measure];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Measure => "measure",
        }
    }

    /// The plural form the backend expects in `result_type`.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Candidate => "candidates",
            Self::Measure => "measures",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Candidate => "Candidate",
            Self::Measure => "Measure",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownOption {
                field: "output type",
                value: s.to_owned(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field}: \"{value}\"")]
pub struct UnknownOption {
    pub field: &'static str,
    pub value: String,
}

/// Raw form fields exactly as the user entered them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    #[serde(default)]
    pub county_name: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub parse_method: ParseMethod,
    #[serde(default)]
    pub result_type: ResultType,
}

/// A validated submission. Only obtainable through [`ParseRequest::try_from`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRequest {
    pub(crate) county_name: String,
    pub(crate) link: String,
    pub(crate) parse_method: ParseMethod,
    pub(crate) result_type: ResultType,
}

impl ParseRequest {
    #[must_use]
    pub fn county_name(&self) -> &str {
        &self.county_name
    }

    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    #[must_use]
    pub fn parse_method(&self) -> ParseMethod {
        self.parse_method
    }

    #[must_use]
    pub fn result_type(&self) -> ResultType {
        self.result_type
    }

    /// Renames and pluralizes into the body the backend expects.
    #[must_use]
    pub fn to_payload(&self) -> ParsePayload {
        ParsePayload {
            county_name: self.county_name.to_lowercase(),
            link: self.link.clone(),
            parse_method: self.parse_method,
            result_type: self.result_type.plural().to_owned(),
        }
    }
}

/// JSON body of `POST /parse-and-format`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsePayload {
    pub county_name: String,
    pub link: String,
    pub parse_method: ParseMethod,
    pub result_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(county: &str, result_type: ResultType) -> ParseRequest {
        ParseRequest {
            county_name: county.to_string(),
            link: "https://example.com/f.zip".to_string(),
            parse_method: ParseMethod::Zip,
            result_type,
        }
    }

    #[test]
    fn payload_lowercases_county_and_pluralizes_result_type() {
        let payload = request("Maricopa", ResultType::Candidate).to_payload();
        let json = serde_json::to_value(&payload).expect("serialize payload");
        assert_eq!(
            json,
            serde_json::json!({
                "county_name": "maricopa",
                "link": "https://example.com/f.zip",
                "parse_method": "zip",
                "result_type": "candidates",
            })
        );
    }

    #[test]
    fn measure_pluralizes_to_measures() {
        let payload = request("Pima", ResultType::Measure).to_payload();
        assert_eq!(payload.result_type, "measures");
    }

    #[test]
    fn parse_method_from_str_is_case_insensitive() {
        assert_eq!("PDF".parse::<ParseMethod>(), Ok(ParseMethod::Pdf));
        assert_eq!(" xml ".parse::<ParseMethod>(), Ok(ParseMethod::Xml));
    }

    #[test]
    fn parse_method_from_str_rejects_unknown() {
        let err = "csv".parse::<ParseMethod>().unwrap_err();
        assert_eq!(err.to_string(), "unknown link type: \"csv\"");
    }

    #[test]
    fn only_zip_is_offered_in_the_form() {
        let offered: Vec<_> = ParseMethod::ALL
            .into_iter()
            .filter(|m| m.is_offered())
            .collect();
        assert_eq!(offered, vec![ParseMethod::Zip]);
    }

    #[test]
    fn form_input_deserializes_camel_case_with_defaults() {
        let input: FormInput = serde_json::from_value(serde_json::json!({
            "countyName": "Yuma",
            "link": "https://example.com/y.zip",
        }))
        .expect("deserialize form input");
        assert_eq!(input.county_name, "Yuma");
        assert_eq!(input.parse_method, ParseMethod::Zip);
        assert_eq!(input.result_type, ResultType::Candidate);
    }
}
