//! Interaction controller for the Harmoniq landing page.
//!
//! This crate owns every behavior the landing page attaches to its markup:
//! navbar scroll styling, hero parallax, floating icon cards, button ripples
//! and pulses, the mobile hamburger menu, toast notifications and
//! visibility-driven entrance animations. It never touches the browser
//! directly. All document access goes through the [`host::Host`] capability
//! trait, so the controller runs unchanged against the real DOM (see the
//! `harmoniq` WebAssembly crate) or against an in-memory fake in tests.
//!
//! The host layer is responsible only for wiring DOM events, timers and
//! visibility callbacks to [`page::Page`] and executing its mutations.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | The controller: initialization, event dispatch, timers, teardown |
//! | [`host`] | Host capability trait and the handle types it hands out |
//! | [`listener`] | Listener bindings the host registers, and event payloads |
//! | [`menu`] | Mobile menu open/closed state machine |
//! | [`effects`] | Inline style recipes for notifications, ripples, pulses |
//! | [`timers`] | Ownership table for scheduled timer handles |
//! | [`config`] | Tunable thresholds, delays and selectors |
//! | [`consts`] | Shared defaults and the effect stylesheet |
//! | [`error`] | Error type returned by handlers |

pub mod config;
pub mod consts;
pub mod effects;
pub mod error;
pub mod host;
pub mod listener;
pub mod menu;
pub mod page;
pub mod timers;

#[cfg(test)]
mod fake;
