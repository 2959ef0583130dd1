#![forbid(unsafe_code)]

use log::debug;
use poem::{handler, web::{Data, Html}};

use crate::utils::app_state::AppState;
use crate::utils::templates::render_page_with;

const CHANGE_PAGE: &str = "change.html";

// ---------------------------------------------------------------------------
// change:
// ---------------------------------------------------------------------------
/** Count the visit, then show the new count and whether it's even.  The
 * increment stands even if the page fails to render.
 */
#[handler]
pub fn change(Data(state): Data<&AppState>) -> poem::Result<Html<String>> {
    let visit = state.counter.increment();
    debug!("Visit number {}.", visit.count);
    render_page_with(&state.templates, CHANGE_PAGE, &visit)
}
