use super::sequence::DnaSequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Trailing marker on an end name denoting the structural complement of the
/// named sequence. Only appears in the document format; decoded into
/// [`EndRef::is_complement`] at the boundary.
pub const COMPLEMENT_MARKER: char = '/';

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EndRefError {
    #[error("End reference is empty")]
    Empty,
    #[error("End reference '{0}' is only a complement marker")]
    BareMarker(String),
}

/// The two sticky-end orientation classes, distinguished by which strand
/// carries the single-stranded overhang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EndClass {
    Td,
    Dt,
}

impl fmt::Display for EndClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndClass::Td => f.write_str("TD"),
            EndClass::Dt => f.write_str("DT"),
        }
    }
}

/// A named sticky end: one orientation class, one nucleotide sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct End {
    pub name: String,
    pub class: EndClass,
    pub sequence: DnaSequence,
}

/// A reference to an end, possibly to its structural complement. Replaces
/// the trailing-marker string convention with an explicit tagged value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EndRef {
    pub name: String,
    pub is_complement: bool,
}

impl EndRef {
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_complement: false,
        }
    }

    pub fn complement(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_complement: true,
        }
    }
}

impl TryFrom<String> for EndRef {
    type Error = EndRefError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(EndRefError::Empty);
        }
        match s.strip_suffix(COMPLEMENT_MARKER) {
            Some("") => Err(EndRefError::BareMarker(s)),
            Some(name) => Ok(EndRef::complement(name)),
            None => Ok(EndRef::plain(s)),
        }
    }
}

impl From<EndRef> for String {
    fn from(r: EndRef) -> Self {
        r.to_string()
    }
}

impl fmt::Display for EndRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complement {
            write!(f, "{}{}", self.name, COMPLEMENT_MARKER)
        } else {
            f.write_str(&self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_reference_parses_without_marker() {
        let r = EndRef::try_from("e1".to_string()).unwrap();
        assert_eq!(r, EndRef::plain("e1"));
    }

    #[test]
    fn trailing_marker_parses_as_complement() {
        let r = EndRef::try_from("e1/".to_string()).unwrap();
        assert_eq!(r, EndRef::complement("e1"));
    }

    #[test]
    fn bare_marker_is_rejected() {
        let result = EndRef::try_from("/".to_string());
        assert_eq!(result, Err(EndRefError::BareMarker("/".to_string())));
    }

    #[test]
    fn display_restores_the_marker_form() {
        assert_eq!(EndRef::plain("e2").to_string(), "e2");
        assert_eq!(EndRef::complement("e2").to_string(), "e2/");
    }

    #[test]
    fn end_class_serializes_as_upper_case_tags() {
        assert_eq!(serde_json::to_string(&EndClass::Td).unwrap(), "\"TD\"");
        assert_eq!(serde_json::to_string(&EndClass::Dt).unwrap(), "\"DT\"");
    }

    #[test]
    fn end_ref_round_trips_through_serde() {
        let r = EndRef::complement("e7");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"e7/\"");
        let back: EndRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
