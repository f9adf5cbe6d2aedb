pub(crate) mod client;
pub(crate) mod token;

pub(crate) use client::TickClient;
