//! Persistence: the prepend-style audit log files

pub mod logstore;
