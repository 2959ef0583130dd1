#![forbid(unsafe_code)]

use log::{debug, info};
use poem::http::Method;
use poem::web::{Data, Form, Redirect};
use poem::{handler, Request};

use crate::pages::{USER_DISPLAY_PATH, USER_FORM_PATH};
use crate::utils::app_state::AppState;
use crate::utils::page_types::SubmissionForm;
use crate::utils::promo_utils;
use crate::utils::validate::validate_submission;

// ---------------------------------------------------------------------------
// user_treatment:
// ---------------------------------------------------------------------------
/** Accept a posted user form.  Anything that isn't a valid POST sends the
 * user back to the form with no explanation; a valid submission replaces the
 * stored profile and goes on to the display page.
 */
#[handler]
pub fn user_treatment(http_req: &Request,
                      form: poem::Result<Form<SubmissionForm>>,
                      Data(state): Data<&AppState>) -> Redirect {
    if http_req.method() != Method::POST {
        return Redirect::see_other(USER_FORM_PATH);
    }

    let form = match form {
        Ok(Form(f)) => f,
        Err(e) => {
            debug!("Unreadable user form: {}", e);
            return Redirect::see_other(USER_FORM_PATH);
        }
    };

    // Conditional logging depending on log level.
    promo_utils::debug_request(http_req, &form);

    match validate_submission(form) {
        Ok(profile) => {
            info!("Storing profile for {} {}.", profile.first_name, profile.last_name);
            state.profiles.replace(profile);
            Redirect::see_other(USER_DISPLAY_PATH)
        }
        Err(reason) => {
            debug!("User form rejected: {}.", reason);
            Redirect::see_other(USER_FORM_PATH)
        }
    }
}
