// Composition root for the labour attendance context.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory document store and identity provider.
// - Wire them into the entry store and use case handlers.
// - Expose the HTTP routes and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod session;
pub mod state;
