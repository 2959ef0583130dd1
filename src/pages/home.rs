#![forbid(unsafe_code)]

use poem::{handler, web::{Data, Html}};

use crate::utils::app_state::AppState;
use crate::utils::templates::render_page;

const HOME_PAGE: &str = "home.html";

// ---------------------------------------------------------------------------
// home:
// ---------------------------------------------------------------------------
// Only registered for "/" itself, so every other unmatched path is a 404.
#[handler]
pub fn home(Data(state): Data<&AppState>) -> poem::Result<Html<String>> {
    render_page(&state.templates, HOME_PAGE)
}
