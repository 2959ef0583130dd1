#![forbid(unsafe_code)]

use anyhow::{Result, anyhow};
use log::{info, error, LevelFilter};
use serde::Deserialize;
use std::{env, fs, path::Path};
use lazy_static::lazy_static;
use structopt::StructOpt;

use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;

// Promo Utilities
use crate::utils::{promo_utils, errors::Errors};

use super::promo_utils::get_absolute_path;

// ***************************************************************************
//                                Constants
// ***************************************************************************
// Directory and file locations. Unless otherwise noted, all files and directories
// are relative to the root directory.
const ENV_PROMO_ROOT_DIR   : &str = "PROMO_ROOT_DIR";
const DEFAULT_ROOT_DIR     : &str = ".";
const CONFIG_DIR           : &str = "/config";
const TEMPLATES_DIR        : &str = "/templates";
const STATIC_DIR           : &str = "/static";
const LOG4RS_CONFIG_FILE   : &str = "/log4rs.yml";  // relative to config dir
const PROMO_CONFIG_FILE    : &str = "/promo.toml";  // relative to config dir

// Networking.
const DEFAULT_HTTP_ADDR    : &str = "0.0.0.0";
const DEFAULT_HTTP_PORT    : u16  = 8080;

// Used when no log4rs.yml is installed.
const DEFAULT_LOG_PATTERN  : &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// Assign the command line arguments BEFORE RUNTIME_CTX is initialized in main.
lazy_static! {
    pub static ref PROMO_ARGS: PromoArgs = init_promo_args();
}

// Calculate the data directories BEFORE RUNTIME_CTX is initialized in main.
lazy_static! {
    pub static ref PROMO_DIRS: PromoDirs = init_promo_dirs();
}

// ***************************************************************************
//                             Directory Structs
// ***************************************************************************
// ---------------------------------------------------------------------------
// PromoDirs:
// ---------------------------------------------------------------------------
#[derive(Debug)]
#[allow(dead_code)]
pub struct PromoDirs {
    pub root_dir: String,
    pub config_dir: String,
    pub templates_dir: String,
    pub static_dir: String,
}

// ***************************************************************************
//                               Config Structs
// ***************************************************************************
// ---------------------------------------------------------------------------
// PromoArgs:
// ---------------------------------------------------------------------------
#[derive(Debug, StructOpt)]
#[structopt(name = "promo_args", about = "Command line arguments for the Promo Server.")]
pub struct PromoArgs {
    /// Specify the server's root directory.
    ///
    /// The templates, static and config directories live under this directory.
    /// The root directory is calculated using the following priority order:
    ///
    ///   1. If set, the value of the PROMO_ROOT_DIR environment variable,
    ///
    ///   2. Otherwise, if set, the value of the --root-dir command line argument,
    ///
    ///   3. Otherwise, the current working directory.
    ///
    #[structopt(short, long)]
    pub root_dir: Option<String>,

    /// Listen on this port instead of the configured one.
    #[structopt(short, long)]
    pub port: Option<u16>,
}

// ---------------------------------------------------------------------------
// Parms:
// ---------------------------------------------------------------------------
#[derive(Debug)]
#[allow(dead_code)]
pub struct Parms {
    pub config_file: String,
    pub config: Config,
}

// ---------------------------------------------------------------------------
// RuntimeCtx:
// ---------------------------------------------------------------------------
#[derive(Debug)]
pub struct RuntimeCtx {
    pub parms: Parms,
    pub promo_args: &'static PromoArgs,
    pub promo_dirs: &'static PromoDirs,
}

impl RuntimeCtx {
    /// The port the server binds, after command line overrides.
    pub fn http_port(&self) -> u16 {
        self.promo_args.port.unwrap_or(self.parms.config.http_port)
    }

    /// The socket address the server binds.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.parms.config.http_addr, self.http_port())
    }
}

// ---------------------------------------------------------------------------
// Config:
// ---------------------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(default)]
#[allow(dead_code)]
pub struct Config {
    pub title: String,
    pub http_addr: String,
    pub http_port: u16,
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "PromoServer".to_string(),
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

// ***************************************************************************
//                            Directory Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_promo_args:
// ---------------------------------------------------------------------------
/** Get the command line arguments. */
fn init_promo_args() -> PromoArgs {
    let args = PromoArgs::from_args();
    println!("{:?}", args);
    args
}

// ---------------------------------------------------------------------------
// init_promo_dirs:
// ---------------------------------------------------------------------------
/** Calculate the directories the server reads from.  Nothing is created here;
 * a missing templates directory is reported when the templates are loaded.
 */
fn init_promo_dirs() -> PromoDirs {
    let root_dir = get_root_dir();
    make_promo_dirs(&root_dir)
}

// ---------------------------------------------------------------------------
// make_promo_dirs:
// ---------------------------------------------------------------------------
fn make_promo_dirs(root_dir: &str) -> PromoDirs {
    PromoDirs {
        root_dir: root_dir.to_string(),
        config_dir: root_dir.to_string() + CONFIG_DIR,
        templates_dir: root_dir.to_string() + TEMPLATES_DIR,
        static_dir: root_dir.to_string() + STATIC_DIR,
    }
}

// ---------------------------------------------------------------------------
// get_root_dir:
// ---------------------------------------------------------------------------
fn get_root_dir() -> String {
    // Order of precedence:
    //  1. Environment variable
    //  2. Command line --root-dir argument
    //  3. Default location
    //
    let root_dir = env::var(ENV_PROMO_ROOT_DIR).unwrap_or_else(
        |_| {
            match PROMO_ARGS.root_dir.clone() {
                Some(r) => r,
                None => DEFAULT_ROOT_DIR.to_string(),
            }
        });

    // Canonicalize the path.
    get_absolute_path(&root_dir)
}

// ***************************************************************************
//                               Log Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_log:
// ---------------------------------------------------------------------------
/** Initialize log4rs from the config directory's log4rs.yml if there is one,
 * otherwise install a console logger at info level.  Any failure is fatal.
 */
pub fn init_log() -> Result<()> {
    let logconfig = init_log_config();
    if Path::new(&logconfig).is_file() {
        if let Err(e) = log4rs::init_file(&logconfig, Default::default()) {
            println!("{}", e);
            return Err(anyhow!(Errors::Log4rsInitialization(logconfig)));
        }
        info!("Log4rs initialized using: {}", logconfig);
    } else {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
            .build();
        let config = LogConfig::builder()
            .appender(Appender::builder().build("stdout", Box::new(stdout)))
            .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
        log4rs::init_config(config)?;
        info!("Log4rs initialized with console defaults, {} not found.", logconfig);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// init_log_config:
// ---------------------------------------------------------------------------
fn init_log_config() -> String {
    PROMO_DIRS.config_dir.clone() + LOG4RS_CONFIG_FILE
}

// ***************************************************************************
//                             Parms Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// get_parms:
// ---------------------------------------------------------------------------
/** Retrieve the application parameters from the configuration file in the
 * config directory.  A missing file means default values; a file that exists
 * but can't be parsed is an error.
 */
fn get_parms() -> Result<Parms> {
    let config_file = PROMO_DIRS.config_dir.clone() + PROMO_CONFIG_FILE;

    // Read the configuration file.
    let config_file_abs = promo_utils::get_absolute_path(&config_file);
    info!("{}", Errors::ReadingConfigFile(config_file_abs.clone()));
    let contents = match fs::read_to_string(&config_file_abs) {
        Ok(c) => c,
        Err(_) => {
            println!("Unable to read configuration at {}. Using default values.", config_file);
            return Ok(Parms { config_file: Default::default(), config: Config::new() });
        }
    };

    let config = parse_config(&contents, &config_file_abs)?;
    Ok(Parms { config_file: config_file_abs, config })
}

// ---------------------------------------------------------------------------
// parse_config:
// ---------------------------------------------------------------------------
fn parse_config(contents: &str, config_file: &str) -> Result<Config> {
    match toml::from_str(contents) {
        Ok(c)  => Ok(c),
        Err(e) => {
            let msg = format!("{}\n   {}", Errors::TOMLParseError(config_file.to_string()), e);
            error!("{}", msg);
            Result::Err(anyhow!(msg))
        }
    }
}

// ***************************************************************************
//                             Config Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_runtime_context:
// ---------------------------------------------------------------------------
pub fn init_runtime_context() -> RuntimeCtx {
    // The application aborts if the configuration can't be read.
    let parms = get_parms().expect("FAILED to read configuration file.");
    RuntimeCtx {parms, promo_args: &PROMO_ARGS, promo_dirs: &PROMO_DIRS}
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::{make_promo_dirs, parse_config, Config, Parms, PromoArgs, RuntimeCtx};

    #[test]
    fn default_config() {
        let config = Config::new();
        assert_eq!(config.http_addr, "0.0.0.0");
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = parse_config("http_port = 9090\n", "promo.toml").unwrap();
        assert_eq!(config.http_port, 9090);
        assert_eq!(config.http_addr, "0.0.0.0");
        assert_eq!(config.title, "PromoServer");
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(parse_config("http_port = \"eighty\"\n", "promo.toml").is_err());
    }

    #[test]
    fn dirs_hang_off_root() {
        let dirs = make_promo_dirs("/srv/promo");
        assert_eq!(dirs.config_dir, "/srv/promo/config");
        assert_eq!(dirs.templates_dir, "/srv/promo/templates");
        assert_eq!(dirs.static_dir, "/srv/promo/static");
    }

    #[test]
    fn port_argument_wins() {
        // Leaked so the context can hold the 'static references it expects.
        let args: &'static PromoArgs = Box::leak(Box::new(PromoArgs { root_dir: None, port: Some(3000) }));
        let dirs = Box::leak(Box::new(make_promo_dirs("/tmp")));
        let ctx = RuntimeCtx {
            parms: Parms { config_file: String::new(), config: Config::new() },
            promo_args: args,
            promo_dirs: dirs,
        };
        assert_eq!(ctx.listen_addr(), "0.0.0.0:3000");
    }
}
