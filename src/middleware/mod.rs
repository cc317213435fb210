//! Request authorization middleware.
//!
//! Protection is a two-stage gate:
//!
//! 1. [`auth::require_auth`] verifies the bearer token, resolves the
//!    subject to a live user record and attaches a [`auth::CurrentUser`]
//!    to the request extensions.
//! 2. [`role::require_admin`] (only on role-gated routes, always layered
//!    inside stage 1) compares the attached identity's role against the
//!    required role.
//!
//! Handlers receive the identity through the [`auth::CurrentUser`]
//! extractor; no other representation of the calling user exists
//! downstream.

pub mod auth;
pub mod role;
