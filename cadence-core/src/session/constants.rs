/// Gap, in seconds, at or above which a client's next request opens a new session.
pub const SESSION_BREAK_SECS: f64 = 1800.0;
