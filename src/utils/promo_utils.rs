#![forbid(unsafe_code)]

use path_absolutize::Absolutize;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use glob::glob;

use poem::Request;

use anyhow::{Result, anyhow};
use log::{error, debug, LevelFilter};

// ***************************************************************************
// GENERAL PUBLIC FUNCTIONS
// ***************************************************************************
// ---------------------------------------------------------------------------
// get_absolute_path:
// ---------------------------------------------------------------------------
/** Replace tilde (~) and environment variable values in a path name and
 * then construct the absolute path name.  Unlike canonicalize, absolutize
 * does not care whether the file exists or what the file really is.
 *
 * On any failure the original path is returned unchanged.
 */
pub fn get_absolute_path(path: &str) -> String {
    // Replace ~ and environment variable values if possible.
    let s = match shellexpand::full(path) {
        Ok(x) => x,
        Err(_) => return path.to_owned(),
    };

    // Convert to absolute path if necessary.
    let p = Path::new(s.deref());
    let p1 = match p.absolutize() {
        Ok(x) => x,
        Err(_) => return path.to_owned(),
    };
    let p2 = match p1.to_str() {
        Some(x) => x,
        None => return path.to_owned(),
    };

    p2.to_owned()
}

// ---------------------------------------------------------------------------
// get_files_in_dir:
// ---------------------------------------------------------------------------
/** Return a sorted list of PathBufs representing the immediate children of the
 * directory whose names end with the given extension (pass "" for all files).
 * This function is not recursive and does not include subdirectories.
 */
pub fn get_files_in_dir(dir: &str, extension: &str) -> Result<Vec<PathBuf>> {

    // Create the result vector and globify the directory string.
    let mut v = vec!();
    let pattern = if dir.ends_with('/') {dir.to_string() + "*"} else {dir.to_string() + "/*"};
    let pattern = pattern + extension;

    // Collect all the immediate files in the directory.
    for entry in glob(&pattern)? {
        match entry {
            Ok(f) => {
                if f.is_file() {v.push(f);}
            },
            Err(e) => {
                let msg = format!("Unable to access a directory entry in {}: {:?}.", &pattern, e);
                error!("{}", msg);
                return Result::Err(anyhow!(msg));
            },
        }
    }

    v.sort();
    Ok(v)
}

// ***************************************************************************
//                                  Traits
// ***************************************************************************
pub trait RequestDebug {
    type Req;
    fn get_request_info(&self) -> String;
}

// ---------------------------------------------------------------------------
// debug_request:
// ---------------------------------------------------------------------------
// Dump http request information to the log.
pub fn debug_request(http_req: &Request, req: &impl RequestDebug) {
    // Check that debug or higher logging is in effect.
    let level = log::max_level();
    if level < LevelFilter::Debug {
        return;
    }

    // Accumulate the output.
    let mut s = "\n".to_string();

    // Restate the method and URI.
    let uri = http_req.uri();
    s += format!("  {} URI: {:?}\n", http_req.method(), uri).as_str();

    // Accumulate the headers
    for v in http_req.headers().iter() {
         s += format!("  Header: {} = {:?} \n", v.0, v.1).as_str();
    };

    // Add the request's information.
    s += req.get_request_info().as_str();

    // Write the single log record.
    debug!("{}", s);
}
