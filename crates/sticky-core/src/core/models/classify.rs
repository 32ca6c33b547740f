use super::end::EndRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ClassifyError {
    #[error("Unknown interaction class label '{0}'")]
    UnknownLabel(String),
}

/// Discrete interaction class assigned to an ordered end pair by an upstream
/// sensitivity analysis. The set of labels is fixed; an unknown label in a
/// document is a fatal parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PairClass {
    /// Intended (identity) match.
    Identity,
    /// One-mismatch "good overlap".
    OneGo,
    /// Two-mismatch "good overlap".
    TwoGo,
    /// One-mismatch without good overlap.
    OneNgo,
    /// Two-mismatch without good overlap.
    TwoNgo,
}

impl PairClass {
    pub const ALL: [PairClass; 5] = [
        PairClass::Identity,
        PairClass::OneGo,
        PairClass::TwoGo,
        PairClass::OneNgo,
        PairClass::TwoNgo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PairClass::Identity => "I",
            PairClass::OneGo => "1GO",
            PairClass::TwoGo => "2GO",
            PairClass::OneNgo => "1NGO",
            PairClass::TwoNgo => "2NGO",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, ClassifyError> {
        match label {
            "I" => Ok(PairClass::Identity),
            "1GO" => Ok(PairClass::OneGo),
            "2GO" => Ok(PairClass::TwoGo),
            "1NGO" => Ok(PairClass::OneNgo),
            "2NGO" => Ok(PairClass::TwoNgo),
            other => Err(ClassifyError::UnknownLabel(other.to_string())),
        }
    }

    /// Empirically chosen calibration coefficient, applied to the baseline
    /// matching energy when deriving the per-class penalty multiplier.
    pub fn coefficient(&self) -> f64 {
        match self {
            PairClass::Identity => 1.0,
            PairClass::OneGo => 1.1,
            PairClass::TwoGo => 1.5,
            PairClass::OneNgo => 1.65,
            PairClass::TwoNgo => 2.0,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PairClass::Identity => 0,
            PairClass::OneGo => 1,
            PairClass::TwoGo => 2,
            PairClass::OneNgo => 3,
            PairClass::TwoNgo => 4,
        }
    }
}

impl TryFrom<String> for PairClass {
    type Error = ClassifyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        PairClass::from_label(&s)
    }
}

impl From<PairClass> for String {
    fn from(c: PairClass) -> Self {
        c.label().to_string()
    }
}

impl fmt::Display for PairClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the pair-classification table: an ordered pair of end
/// references and the interaction class assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedPair {
    pub a: EndRef,
    pub b: EndRef,
    pub class: PairClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_for_every_class() {
        for class in PairClass::ALL {
            assert_eq!(PairClass::from_label(class.label()).unwrap(), class);
        }
    }

    #[test]
    fn unknown_label_is_a_fatal_parse_error() {
        let result = PairClass::from_label("3GO");
        assert_eq!(result, Err(ClassifyError::UnknownLabel("3GO".to_string())));
    }

    #[test]
    fn coefficients_increase_with_mismatch_severity() {
        assert_eq!(PairClass::Identity.coefficient(), 1.0);
        assert!(PairClass::OneGo.coefficient() < PairClass::TwoGo.coefficient());
        assert!(PairClass::TwoGo.coefficient() < PairClass::OneNgo.coefficient());
        assert_eq!(PairClass::TwoNgo.coefficient(), 2.0);
    }

    #[test]
    fn classified_pair_deserializes_from_marker_form() {
        let json = r#"{ "a": "e1", "b": "e2/", "class": "1GO" }"#;
        let pair: ClassifiedPair = serde_json::from_str(json).unwrap();
        assert!(!pair.a.is_complement);
        assert!(pair.b.is_complement);
        assert_eq!(pair.class, PairClass::OneGo);
    }

    #[test]
    fn unknown_class_label_fails_deserialization() {
        let json = r#"{ "a": "e1", "b": "e2", "class": "BOGUS" }"#;
        let result: Result<ClassifiedPair, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
