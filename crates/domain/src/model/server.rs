//! Server status responses

use crate::model::ResultSet;

/// The response to a ping: a single `"pong"` string.
pub type PingResult = ResultSet<String>;

/// The server's clock, as a single epoch-seconds value.
pub type ServerEpoch = ResultSet<f64>;
