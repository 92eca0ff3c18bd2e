// Module layout (Clean Architecture style)
// - bootstrap: configuration and service wiring
// - infrastructure: PostgreSQL repositories and outgoing mail adapters
// - presentation: HTTP handlers, request guards and routing
// - application: ports, use cases, access policies and rate limiting
// - domain: blog, portfolio and contact models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
