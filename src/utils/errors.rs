#![forbid(unsafe_code)]

use thiserror::Error;

/// Error enumerates the errors returned by this application.
#[derive(Error, Debug)]
pub enum Errors {
    /// Input parameter logging.
    #[error("promo_server input parameters:\n{}", .0)]
    InputParms(String),

    /// Inaccessible logger configuration file.
    #[error("Unable to access the Log4rs configuration file: {}", .0)]
    Log4rsInitialization(String),

    #[error("Reading application configuration file: {}", .0)]
    ReadingConfigFile(String),

    #[error("Unable to parse TOML file: {}", .0)]
    TOMLParseError(String),

    /// The templates directory yielded nothing to load.
    #[error("No page templates found in directory: {}", .0)]
    NoTemplates(String),

    #[error("Unable to load page templates from {}: {}", .0, .1)]
    TemplateLoad(String, String),

    #[error("Unable to render page template {}: {}", .0, .1)]
    TemplateRender(String, String),
}
