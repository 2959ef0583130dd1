#![forbid(unsafe_code)]

use std::sync::{Arc, Mutex, RwLock};

use serde::Serialize;
use tera::Tera;

use crate::utils::page_types::UserProfile;

// ***************************************************************************
//                               Visit Counter
// ***************************************************************************
// ---------------------------------------------------------------------------
// VisitCount:
// ---------------------------------------------------------------------------
/** One observation of the counter, as shown by the change page. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitCount {
    pub count: u64,
    pub is_even: bool,
}

impl VisitCount {
    pub fn new(count: u64) -> Self {
        Self {count, is_even: count % 2 == 0}
    }
}

// ---------------------------------------------------------------------------
// VisitCounter:
// ---------------------------------------------------------------------------
#[derive(Debug, Default)]
pub struct VisitCounter {
    count: Mutex<u64>,
}

impl VisitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /** Add one and return the new value, both under the same lock so that
     * concurrent callers each see a distinct value.  A u64 can't be left
     * half-written, so a poisoned lock is simply reclaimed.
     */
    pub fn increment(&self) -> VisitCount {
        let mut count = self.count.lock().unwrap_or_else(|e| e.into_inner());
        *count += 1;
        VisitCount::new(*count)
    }

    #[allow(dead_code)]
    pub fn current(&self) -> u64 {
        *self.count.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// ***************************************************************************
//                            User Profile Store
// ***************************************************************************
// ---------------------------------------------------------------------------
// ProfileStore:
// ---------------------------------------------------------------------------
/** Single slot holding the last accepted profile for the whole process.
 * Writers replace the profile wholesale; the last writer wins.  The lock
 * only guarantees readers never see a half-replaced profile.
 */
#[derive(Debug, Default)]
pub struct ProfileStore {
    slot: RwLock<UserProfile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, profile: UserProfile) {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = profile;
    }

    pub fn snapshot(&self) -> UserProfile {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

// ***************************************************************************
//                                App State
// ***************************************************************************
// ---------------------------------------------------------------------------
// AppState:
// ---------------------------------------------------------------------------
/** Everything the page handlers share.  Attached to the route tree as poem
 * endpoint data; cloning only bumps the reference counts.
 */
#[derive(Debug, Clone)]
pub struct AppState {
    pub templates: Arc<Tera>,
    pub counter: Arc<VisitCounter>,
    pub profiles: Arc<ProfileStore>,
}

impl AppState {
    pub fn new(templates: Tera) -> Self {
        Self {
            templates: Arc::new(templates),
            counter: Arc::new(VisitCounter::new()),
            profiles: Arc::new(ProfileStore::new()),
        }
    }
}
