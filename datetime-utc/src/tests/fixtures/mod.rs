mod datetimes;

pub(crate) use datetimes::*;
