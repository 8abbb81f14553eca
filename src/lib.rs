//! # quill-ui
//!
//! A small retained-mode widget toolkit and the minimal text editor built on it.
//!
//! Widgets live in a slotmap arena and are laid out once per frame by
//! weighted vertical and horizontal stacking. A per-frame interaction
//! controller tracks hover, button capture and input focus, and the editable
//! [`Input`](widgets::Input) widget edits a multi-line buffer shared with the
//! application. Drawing goes through an abstract [`Canvas`](render::Canvas);
//! a crossterm backend maps it onto terminal cells.
//!
//! ## Core Systems
//!
//! - **[`dom`]**: slotmap-backed widget arena with ordered, weighted slots
//! - **[`layout`]**: two-pass layout engine, stack arithmetic, hit testing
//! - **[`widget`]**: widget trait, draw pass, text buffer, scroll state
//! - **[`widgets`]**: Label, Button, Input, NullWidget, VerticalBox, HorizontalBox
//! - **[`event`]**: terminal input conversion and the interaction controller
//! - **[`render`]**: canvas capability, recording canvas, cell compositor and driver
//! - **[`app`]**: the editor: window and dialog trees, documents, event loop
//! - **[`testing`]**: headless Pilot and snapshot helpers
//! - **[`geometry`]**, **[`color`]**, **[`error`]**: shared primitives

// Foundation
pub mod color;
pub mod error;
pub mod geometry;

// Core systems
pub mod dom;
pub mod layout;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Rendering
pub mod render;

// Application
pub mod app;

// Testing
pub mod testing;
