use chrono::{Local, NaiveDate, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_PROVISIONAL_ID: AtomicI64 = AtomicI64::new(0);

/// Client-side id for an entry that the store has not assigned an id to yet.
///
/// Derived from wall-clock milliseconds and strictly increasing within the
/// process, so two entries registered in the same millisecond still differ.
/// Not meant for high-frequency concurrent creation.
pub fn provisional_entry_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_PROVISIONAL_ID.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_PROVISIONAL_ID.compare_exchange_weak(
            last,
            next,
            Ordering::AcqRel,
            Ordering::Relaxed,
        ) {
            Ok(_) => return next.to_string(),
            Err(actual) => last = actual,
        }
    }
}

/// Calendar date the site manager is marking attendance for by default.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
