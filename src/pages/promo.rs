#![forbid(unsafe_code)]

use log::debug;
use poem::{handler, web::{Data, Html}};

use crate::utils::app_state::AppState;
use crate::utils::page_types::{Class, Student};
use crate::utils::templates::render_page_with;

const PROMO_PAGE: &str = "promo.html";

// ***************************************************************************
//                                 Roster
// ***************************************************************************
// ---------------------------------------------------------------------------
// demo_class:
// ---------------------------------------------------------------------------
/** The fixed class shown on the roster page. */
pub fn demo_class() -> Class {
    Class::new("B1 Informatique", "Informatique", "Bachelor 1", vec![
        Student::new("Jean", "Dupont", 20, "M"),
        Student::new("Marie", "Martin", 19, "F"),
        Student::new("Paul", "Bernard", 21, "M"),
    ])
}

// ***************************************************************************
//                                Endpoint
// ***************************************************************************
#[handler]
pub fn promo(Data(state): Data<&AppState>) -> poem::Result<Html<String>> {
    let class = demo_class();
    debug!("Rendering roster for {} ({} students).", class.name(), class.student_count());
    render_page_with(&state.templates, PROMO_PAGE, &class)
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::demo_class;

    #[test]
    fn roster_is_fixed() {
        let class = demo_class();
        assert_eq!(class.name(), "B1 Informatique");
        assert_eq!(class.student_count(), 3);

        let names: Vec<(&str, &str)> = class.students().iter()
            .map(|s| (s.first_name.as_str(), s.last_name.as_str()))
            .collect();
        assert_eq!(names, vec![("Jean", "Dupont"), ("Marie", "Martin"), ("Paul", "Bernard")]);
        assert_eq!(demo_class(), class);
    }
}
