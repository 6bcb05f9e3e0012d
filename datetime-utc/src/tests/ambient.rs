use crate::{
    tests::fixtures::immutable_at,
    time::Zone,
    types::UtcDateTimeType,
    value::Value,
};
use std::{
    env,
    sync::{Mutex, MutexGuard},
};

/// Held by every test that touches the process-wide `TZ`.
static PROCESS_ZONE: Mutex<()> = Mutex::new(());

fn lock_process_zone() -> MutexGuard<'static, ()> {
    PROCESS_ZONE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Runs `f` with the process-wide `TZ` set to `zone`, restoring the previous value.
///
/// Callers must hold [`lock_process_zone`].
fn with_process_zone<T>(zone: &str, f: impl FnOnce() -> T) -> T {
    let previous = env::var_os("TZ");
    env::set_var("TZ", zone);

    let result = f();

    match previous {
        Some(previous) => env::set_var("TZ", previous),
        None => env::remove_var("TZ"),
    }

    result
}

#[test]
fn it_parses_identically_whatever_the_process_zone() {
    let _guard = lock_process_zone();
    let column = UtcDateTimeType::immutable();
    let stored = Value::from("2017-09-17 20:30:45");

    let baseline = column.from_storage(&stored).unwrap().unwrap();
    let in_denver = with_process_zone("America/Denver", || column.from_storage(&stored).unwrap());
    let in_kolkata = with_process_zone("Asia/Kolkata", || column.from_storage(&stored).unwrap());

    for parsed in [in_denver, in_kolkata] {
        let parsed = parsed.unwrap();
        assert_eq!(parsed, baseline);
        assert_eq!(parsed.naive_local(), baseline.naive_local());
        assert!(parsed.is_utc());
    }
    assert_eq!(baseline, immutable_at("2017-09-17 20:30:45", Zone::Utc));
}

#[test]
fn it_formats_identically_whatever_the_process_zone() {
    let _guard = lock_process_zone();
    let column = UtcDateTimeType::immutable();
    let value = Value::from(immutable_at("2017-09-17 20:30:45", Zone::Utc));

    let in_denver = with_process_zone("America/Denver", || column.to_storage(&value).unwrap());

    assert_eq!(in_denver.as_deref(), Some("2017-09-17 20:30:45"));
}
