use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Returned for a weighted sum with remainder one; never equal to an input digit.
const INVALID_CHECK_DIGIT: char = '-';

const ORGANIZATION_ID_LENGTH: usize = 9;

fn weight(index: usize) -> u32 {
    2 + (index % 6) as u32
}

/// Computes the MOD-11 check digit for a run of decimal digits.
///
/// Digits are weighted from the right with the repeating sequence 2..=7. A
/// remainder of one has no valid check digit, which is signalled with a
/// character that can never match. Returns `None` when `digits` contains
/// anything but ASCII digits.
pub fn check_digit(digits: &str) -> Option<char> {
    let mut sum = 0u32;
    for (index, ch) in digits.chars().rev().enumerate() {
        sum += ch.to_digit(10)? * weight(index);
    }

    match sum % 11 {
        0 => Some('0'),
        1 => Some(INVALID_CHECK_DIGIT),
        remainder => char::from_digit(11 - remainder, 10),
    }
}

/// True when `value` is nine digits whose last digit is the MOD-11 check digit of the first eight.
pub fn is_valid_organization_id(value: &str) -> bool {
    if value.len() != ORGANIZATION_ID_LENGTH || !value.is_ascii() {
        return false;
    }

    let (body, control) = value.split_at(ORGANIZATION_ID_LENGTH - 1);
    match (check_digit(body), control.chars().next()) {
        (Some(expected), Some(found)) => expected == found,
        _ => false,
    }
}

/// Organization number from the central entity register. Always valid once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrganizationId(String);

impl OrganizationId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if is_valid_organization_id(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidIdentifier(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OrganizationId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrganizationId> for String {
    fn from(value: OrganizationId) -> Self {
        value.0
    }
}

impl FromStr for OrganizationId {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Left-to-right weights for the eight body digits.
    const REFERENCE_WEIGHTS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

    fn reference_check_digit(body: &[u32; 8]) -> Option<u32> {
        let sum: u32 = body
            .iter()
            .zip(REFERENCE_WEIGHTS.iter())
            .map(|(digit, weight)| digit * weight)
            .sum();
        match sum % 11 {
            0 => Some(0),
            1 => None,
            remainder => Some(11 - remainder),
        }
    }

    fn digits_of(mut value: u32) -> [u32; 8] {
        let mut digits = [0u32; 8];
        for slot in digits.iter_mut().rev() {
            *slot = value % 10;
            value /= 10;
        }
        digits
    }

    #[test]
    fn accepts_known_valid_numbers() {
        for value in ["889640782", "995298775", "974513277", "123456785", "000000000"] {
            assert!(is_valid_organization_id(value), "{value} should be valid");
        }
    }

    #[test]
    fn rejects_wrong_check_digit_length_and_letters() {
        assert!(!is_valid_organization_id("889640781"));
        assert!(!is_valid_organization_id("88964078"));
        assert!(!is_valid_organization_id("8896407820"));
        assert!(!is_valid_organization_id("foofoofof"));
        assert!(!is_valid_organization_id("88964a782"));
        assert!(!is_valid_organization_id(""));
    }

    #[test]
    fn remainder_one_never_yields_a_valid_number() {
        assert_eq!(check_digit("91234567"), Some('-'));
        for last in '0'..='9' {
            let candidate = format!("91234567{last}");
            assert!(!is_valid_organization_id(&candidate), "{candidate}");
        }
    }

    #[test]
    fn multibyte_input_is_rejected_without_panicking() {
        assert!(!is_valid_organization_id("8896407ø"));
        assert!(!is_valid_organization_id("88964078ø"));
        assert_eq!(check_digit("12a4"), None);
    }

    #[test]
    fn agrees_with_reference_definition_for_generated_numbers() {
        // Stride through the 8-digit space with a prime step to sample evenly.
        let mut prefix = 0u32;
        let mut sampled = 0;
        while prefix < 100_000_000 {
            let body = digits_of(prefix);
            let body_text: String = body.iter().map(|d| d.to_string()).collect();
            let expected = reference_check_digit(&body);

            for last in 0..=9u32 {
                let candidate = format!("{body_text}{last}");
                assert_eq!(
                    is_valid_organization_id(&candidate),
                    expected == Some(last),
                    "disagreement for {candidate}"
                );
            }

            prefix += 7_919;
            sampled += 1;
        }
        assert!(sampled > 10_000);
    }

    #[test]
    fn construction_validates_once() {
        let id = OrganizationId::new("889640782").expect("valid organization number");
        assert_eq!(id.as_str(), "889640782");
        assert_eq!(id.to_string(), "889640782");

        match OrganizationId::new("889640781") {
            Err(DomainError::InvalidIdentifier(value)) => assert_eq!(value, "889640781"),
            other => panic!("expected invalid identifier, got {other:?}"),
        }
    }

    #[test]
    fn deserialization_rejects_invalid_numbers() {
        let parsed: OrganizationId =
            serde_json::from_str("\"995298775\"").expect("valid number deserializes");
        assert_eq!(parsed.as_str(), "995298775");
        assert!(serde_json::from_str::<OrganizationId>("\"995298774\"").is_err());
        assert_eq!(
            serde_json::to_string(&parsed).expect("serializes"),
            "\"995298775\""
        );
    }
}
