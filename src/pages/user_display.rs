#![forbid(unsafe_code)]

use poem::{handler, web::{Data, Html}};

use crate::utils::app_state::AppState;
use crate::utils::templates::render_page_with;

const USER_DISPLAY_PAGE: &str = "user_display.html";

// ---------------------------------------------------------------------------
// user_display:
// ---------------------------------------------------------------------------
// Shows whatever profile was stored last, from any client.
#[handler]
pub fn user_display(Data(state): Data<&AppState>) -> poem::Result<Html<String>> {
    let profile = state.profiles.snapshot();
    render_page_with(&state.templates, USER_DISPLAY_PAGE, &profile)
}
