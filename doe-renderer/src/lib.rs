//! # doe-renderer
//!
//! Tera-based template engine that renders the documents of a generated
//! DOE workspace (`AGENTS.md`, `README.md`, `.env.example`,
//! `requirements.txt`, `.gitignore`, `setup.sh`).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use doe_renderer::{Renderer, TemplateContext};
//!
//! fn render(ctx: &TemplateContext) {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(outputs) = renderer.render_workspace(ctx) {
//!             for (path, content) in outputs {
//!                 println!("{}: {} bytes", path.display(), content.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::{DocKind, Renderer, TemplateEngine};
pub use error::RenderError;
