//! Generated icon type declarations.
//!
//! The declaration lists every valid icon identifier as a string literal
//! union, so referencing an unknown icon is a compile-time error in the
//! consuming project:
//!
//! ```text
//! // Automatically generated by iconpack (format v1)
//! // <fingerprint>
//!
//! declare module 'virtual:iconpack' {
//! 	export type Icon =
//! 		| "mdi:home"
//! 		| "logo";
//! }
//! ```
//!
//! With no icons at all the union is `never` rather than `string`.
//!
//! [`ArtifactCache`] rewrites the file only when the fingerprint in its
//! header differs from the fingerprint of the current icon set.

mod cache;
mod declaration;
mod header;

pub use cache::{ArtifactCache, ArtifactStatus, ReconcileOutcome};
pub use declaration::{icon_identifiers, render_declaration};
pub use header::{marker_line, parse_header, render_header, FORMAT_VERSION, GENERATOR_MARKER};
