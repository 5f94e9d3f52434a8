//! Ray-casting light demo engine.
//!
//! A pointer-tracked emitter casts a fixed fan of rays against the canvas
//! border and the outline of the active constellation, and the nearest hit
//! along each ray is drawn over a twinkling starfield. This crate is compiled
//! to WebAssembly; the host owns the DOM wiring and calls into [`engine::Engine`]
//! for pointer events and once per animation frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser-facing engine bound to a canvas element |
//! | [`scene`] | Testable scene state and the tick/advance state machine |
//! | [`emitter`] | The 360-ray fan and nearest-hit selection |
//! | [`ray`] | Ray/segment intersection |
//! | [`boundary`] | Wall segments, border and outline builders |
//! | [`geom`] | Points, distances, angles |
//! | [`shape`] | Constellation catalogue |
//! | [`stars`] | Background starfield |
//! | [`render`] | Drawing through the [`render::Surface`] trait |
//! | [`config`] | Host-supplied scene configuration |
//! | [`consts`] | Shared numeric constants |

pub mod boundary;
pub mod config;
pub mod consts;
pub mod emitter;
pub mod engine;
pub mod geom;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shape;
pub mod stars;
