// src/links/mod.rs
// =============================================================================
// This module resolves free-text profile fields into safe links.
//
// Submodules:
// - resolve: URL coercion, LinkedIn/portfolio classification, company rule
//
// The resolvers are pure and total - they run at render time on whatever
// text the profile carries, and malformed input simply yields no link.
// =============================================================================

mod resolve;

// Re-export the public API of this module
pub use resolve::{
    company_link, resolve_portfolio_url, resolve_social_ref, SocialProvider, SocialRef,
};
