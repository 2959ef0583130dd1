#![forbid(unsafe_code)]

use poem::{handler, web::{Data, Html}};

use crate::utils::app_state::AppState;
use crate::utils::templates::render_page;

const USER_FORM_PAGE: &str = "user_form.html";

#[handler]
pub fn user_form(Data(state): Data<&AppState>) -> poem::Result<Html<String>> {
    render_page(&state.templates, USER_FORM_PAGE)
}
