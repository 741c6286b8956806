mod client;

pub use client::{fetch_questions, parse_questions, FetchError};
