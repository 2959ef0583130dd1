#![forbid(unsafe_code)]

use anyhow::Result;
use lazy_static::lazy_static;
use log::{info, error};
use poem::listener::TcpListener;

// Promo Utilities
use crate::pages::make_app;
use crate::utils::app_state::AppState;
use crate::utils::config::{init_log, init_runtime_context, RuntimeCtx};
use crate::utils::errors::Errors;
use crate::utils::templates::load_templates;

// Modules
mod pages;
mod utils;

// ***************************************************************************
//                                Constants
// ***************************************************************************
const SERVER_NAME : &str = "PromoServer"; // for poem logging

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// Lazily initialize the parameters variable so that is has a 'static lifetime.
// We exit if we can't read our parameters.
lazy_static! {
    static ref RUNTIME_CTX: RuntimeCtx = init_runtime_context();
}

// ---------------------------------------------------------------------------
// main:
// ---------------------------------------------------------------------------
#[tokio::main]
async fn main() -> Result<()> {
    // --------------- Initialize Server --------------
    // Announce ourselves.
    println!("Starting promo_server!");

    // Initialize the server and load the page templates.  Without a
    // complete template set there's nothing to serve.
    let state = promo_init()?;

    // --------------- Main Loop Set Up ---------------
    let addr = RUNTIME_CTX.listen_addr();
    let app = make_app(state, &RUNTIME_CTX.promo_dirs.static_dir);

    info!("{} listening on {}.", RUNTIME_CTX.parms.config.title, addr);
    println!("Serveur démarré sur http://localhost:{}", RUNTIME_CTX.http_port());

    // ------------------ Main Loop -------------------
    poem::Server::new(TcpListener::bind(addr))
        .name(SERVER_NAME)
        .run(app)
        .await?;

    Ok(())
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// promo_init:
// ---------------------------------------------------------------------------
/** Initialize logging and the runtime context, then build the state shared
 * by the page handlers.
 */
fn promo_init() -> Result<AppState> {
    // Configure our log.
    init_log()?;

    // Force the reading of input parameters and initialization of runtime context.
    info!("{}", Errors::InputParms(format!("{:#?}", *RUNTIME_CTX)));

    // Log build info.
    print_version_info();

    // Parse every page template up front.
    let templates = match load_templates(&RUNTIME_CTX.promo_dirs.templates_dir) {
        Ok(t) => t,
        Err(e) => {
            error!("{}", e);
            return Err(e);
        }
    };

    Ok(AppState::new(templates))
}

// ---------------------------------------------------------------------------
// print_version_info:
// ---------------------------------------------------------------------------
fn print_version_info() {
    info!("\n*** Running PROMO={}, BRANCH={}, COMMIT={}, DIRTY={}, SRC_TS={}, RUSTC={}.",
          option_env!("CARGO_PKG_VERSION").unwrap_or("unknown"),
          env!("GIT_BRANCH"),
          env!("GIT_COMMIT_SHORT"),
          env!("GIT_DIRTY"),
          env!("SOURCE_TIMESTAMP"),
          env!("RUSTC_VERSION"),
    );
}
