#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::utils::promo_utils::RequestDebug;

// ***************************************************************************
//                                 Roster
// ***************************************************************************
// ---------------------------------------------------------------------------
// Student:
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: String,
}

impl Student {
    pub fn new(first_name: &str, last_name: &str, age: u32, gender: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            gender: gender.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Class:
// ---------------------------------------------------------------------------
/** A class and its students.  The fields are private so that student_count
 * can only be set by new(), which takes it from the student list.
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Class {
    name: String,
    department: String,
    level: String,
    student_count: usize,
    students: Vec<Student>,
}

impl Class {
    pub fn new(name: &str, department: &str, level: &str, students: Vec<Student>) -> Self {
        Self {
            name: name.to_string(),
            department: department.to_string(),
            level: level.to_string(),
            student_count: students.len(),
            students,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn student_count(&self) -> usize {
        self.student_count
    }

    #[allow(dead_code)]
    pub fn students(&self) -> &[Student] {
        &self.students
    }
}

// ***************************************************************************
//                               User Profile
// ***************************************************************************
// ---------------------------------------------------------------------------
// UserProfile:
// ---------------------------------------------------------------------------
/** The last accepted submission.  The default value (all fields empty) is
 * what the display page shows before anyone has submitted the form.
 */
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub gender: String,
}

// ---------------------------------------------------------------------------
// SubmissionForm:
// ---------------------------------------------------------------------------
/** The raw user form as posted.  Absent fields deserialize as empty strings. */
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmissionForm {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub gender: String,
}

// Implement the debug record trait for logging.
impl RequestDebug for SubmissionForm {
    type Req = SubmissionForm;
    fn get_request_info(&self) -> String {
        let mut s = String::with_capacity(255);
        s.push_str("  Request body:");
        s.push_str("\n    firstName: ");
        s.push_str(&self.first_name);
        s.push_str("\n    lastName: ");
        s.push_str(&self.last_name);
        s.push_str("\n    birthDate: ");
        s.push_str(&self.birth_date);
        s.push_str("\n    gender: ");
        s.push_str(&self.gender);
        s
    }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::{Class, Student, SubmissionForm};
    use crate::utils::promo_utils::RequestDebug;

    #[test]
    fn count_follows_students() {
        let class = Class::new("B2", "Informatique", "Bachelor 2", vec![
            Student::new("Ada", "Lovelace", 36, "F"),
            Student::new("Alan", "Turing", 41, "M"),
        ]);
        assert_eq!(class.student_count(), 2);
        assert_eq!(class.student_count(), class.students().len());

        let empty = Class::new("Vide", "Aucun", "Aucun", vec![]);
        assert_eq!(empty.student_count(), 0);
    }

    #[test]
    fn submission_info_lists_every_field() {
        let form = SubmissionForm {
            first_name: "Marie".to_string(),
            last_name: "Curie".to_string(),
            birth_date: "1867-11-07".to_string(),
            gender: "féminin".to_string(),
        };
        let info = form.get_request_info();
        for v in ["Marie", "Curie", "1867-11-07", "féminin"] {
            assert!(info.contains(v));
        }
    }
}
