#![forbid(unsafe_code)]

use poem::endpoint::StaticFilesEndpoint;
use poem::{get, Endpoint, EndpointExt, Route};

use crate::utils::app_state::AppState;

pub mod change;
pub mod home;
pub mod promo;
pub mod user_display;
pub mod user_form;
pub mod user_treatment;

// ***************************************************************************
//                                 Paths
// ***************************************************************************
pub const HOME_PATH           : &str = "/";
pub const PROMO_PATH          : &str = "/promo";
pub const CHANGE_PATH         : &str = "/change";
pub const USER_FORM_PATH      : &str = "/user/form";
pub const USER_TREATMENT_PATH : &str = "/user/treatment";
pub const USER_DISPLAY_PATH   : &str = "/user/display";
pub const STATIC_PREFIX       : &str = "/static";

// ---------------------------------------------------------------------------
// make_app:
// ---------------------------------------------------------------------------
/** Build the complete route tree.  The treatment route takes every method
 * so that non-POST requests can be redirected instead of getting a 405.
 * Static files are served without directory listings.
 */
pub fn make_app(state: AppState, static_dir: &str) -> impl Endpoint {
    Route::new()
        .at(HOME_PATH, get(home::home))
        .at(PROMO_PATH, get(promo::promo))
        .at(CHANGE_PATH, get(change::change))
        .at(USER_FORM_PATH, get(user_form::user_form))
        .at(USER_TREATMENT_PATH, user_treatment::user_treatment)
        .at(USER_DISPLAY_PATH, get(user_display::user_display))
        .nest(STATIC_PREFIX, StaticFilesEndpoint::new(static_dir))
        .data(state)
}
