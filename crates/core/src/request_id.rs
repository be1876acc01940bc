//! Short random identifiers for ACL requests and activity-log rows.

use rand::Rng;

/// Number of characters in a generated request id.
pub const REQUEST_ID_LENGTH: usize = 8;

/// Characters a request id may contain.
pub const REQUEST_ID_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a new request id: [`REQUEST_ID_LENGTH`] characters drawn
/// uniformly from [`REQUEST_ID_ALPHABET`].
///
/// Not unique by construction; the `uq_` constraints on `req_no` columns
/// catch the (rare) collision.
pub fn generate_request_id() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(REQUEST_ID_LENGTH)
        .map(char::from)
        .collect()
}
