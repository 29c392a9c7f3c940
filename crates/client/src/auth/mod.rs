pub mod gate;
pub mod jwt;
pub mod session;
pub mod store;

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
