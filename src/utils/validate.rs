#![forbid(unsafe_code)]

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::utils::page_types::{SubmissionForm, UserProfile};

// ***************************************************************************
//                                Constants
// ***************************************************************************
// The gender values accepted from the user form.  These exact byte strings
// are what the form posts, so they must not be translated or normalized.
pub const GENDER_MALE   : &str = "masculin";
pub const GENDER_FEMALE : &str = "féminin";
pub const GENDER_OTHER  : &str = "autre";
pub const ACCEPTED_GENDERS: [&str; 3] = [GENDER_MALE, GENDER_FEMALE, GENDER_OTHER];

lazy_static! {
    static ref NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z]{1,32}$").expect("invalid name regex");
}

// ---------------------------------------------------------------------------
// Rejection:
// ---------------------------------------------------------------------------
/// Why a submission was turned away.  Only ever logged; the user just sees
/// the form again.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Rejection {
    #[error("invalid first name")]
    FirstName,
    #[error("invalid last name")]
    LastName,
    #[error("invalid gender")]
    Gender,
}

// ***************************************************************************
//                               Predicates
// ***************************************************************************
/** A name is 1 to 32 ASCII letters and nothing else. */
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/** The gender must be byte-identical to one of the accepted values. */
pub fn is_valid_gender(gender: &str) -> bool {
    ACCEPTED_GENDERS.contains(&gender)
}

// ---------------------------------------------------------------------------
// validate_submission:
// ---------------------------------------------------------------------------
/** Turn a posted form into the profile to store.  The birth date is kept as
 * opaque text and is never checked.
 */
pub fn validate_submission(form: SubmissionForm) -> Result<UserProfile, Rejection> {
    if !is_valid_name(&form.first_name) {
        return Err(Rejection::FirstName);
    }
    if !is_valid_name(&form.last_name) {
        return Err(Rejection::LastName);
    }
    if !is_valid_gender(&form.gender) {
        return Err(Rejection::Gender);
    }

    Ok(UserProfile {
        first_name: form.first_name,
        last_name: form.last_name,
        birth_date: form.birth_date,
        gender: form.gender,
    })
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::*;

    fn form(first: &str, last: &str, birth: &str, gender: &str) -> SubmissionForm {
        SubmissionForm {
            first_name: first.to_string(),
            last_name: last.to_string(),
            birth_date: birth.to_string(),
            gender: gender.to_string(),
        }
    }

    #[test]
    fn names() {
        assert!(is_valid_name("Jean"));
        assert!(is_valid_name("Dupont"));
        assert!(is_valid_name("x"));
        assert!(is_valid_name(&"a".repeat(32)));

        assert!(!is_valid_name("Jean-Paul"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name(&"a".repeat(33)));
        assert!(!is_valid_name("Jean1"));
        assert!(!is_valid_name("Jean Paul"));
        assert!(!is_valid_name("Hélène"));
        assert!(!is_valid_name("Jean\n"));
    }

    #[test]
    fn genders() {
        for g in ACCEPTED_GENDERS {
            assert!(is_valid_gender(g));
        }
        for g in ["", "Masculin", "FÉMININ", "feminin", "autr", "autres", " autre", "other-typo", "male"] {
            assert!(!is_valid_gender(g), "{} should be rejected", g);
        }
    }

    #[test]
    fn birth_date_is_opaque() {
        let profile = validate_submission(form("Marie", "Curie", "pas une date", GENDER_FEMALE)).unwrap();
        assert_eq!(profile.birth_date, "pas une date");

        let profile = validate_submission(form("Marie", "Curie", "", GENDER_FEMALE)).unwrap();
        assert_eq!(profile.birth_date, "");
    }

    #[test]
    fn rejection_reasons() {
        assert_eq!(validate_submission(form("Jean1", "Dupont", "", GENDER_MALE)), Err(Rejection::FirstName));
        assert_eq!(validate_submission(form("Jean", "", "", GENDER_MALE)), Err(Rejection::LastName));
        assert_eq!(validate_submission(form("Jean", "Dupont", "", "other-typo")), Err(Rejection::Gender));
    }

    #[test]
    fn accepted_submission_keeps_every_field() {
        let profile = validate_submission(form("Marie", "Curie", "1867-11-07", GENDER_FEMALE)).unwrap();
        assert_eq!(profile.first_name, "Marie");
        assert_eq!(profile.last_name, "Curie");
        assert_eq!(profile.birth_date, "1867-11-07");
        assert_eq!(profile.gender, "féminin");
    }
}
