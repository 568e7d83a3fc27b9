//! ghpin-graphql - GitHub GraphQL-backed repository source.

mod client;
mod decode;
mod paginate;
mod queries;
mod transport;

pub use client::{ClientConfig, GithubClient, Profile};
pub use transport::GraphqlTransport;
