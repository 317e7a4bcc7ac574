//! Brick dependency registry.
//!
//! Bricks are reusable components that declare the stylesheets and scripts
//! they need. While a page renders, each brick registers those needs here;
//! once the page is finished they are injected, deduplicated, at a single
//! placeholder.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          One Build                                      │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  before build:   RegistryStore::clear()                                 │
//! │                                                                         │
//! │  Render pass (per page)                                                 │
//! │  ┌──────────────────────────┐     ┌──────────────────────────────┐      │
//! │  │ register_brick()         │ ──► │ PageRecord (by PageKey)      │      │
//! │  │ declare_dependency_point │ ──► │  dependencies   (raw)        │      │
//! │  │  └─ returns PLACEHOLDER  │     │  inline_styles / _scripts    │      │
//! │  └──────────────────────────┘     └──────────────┬───────────────┘      │
//! │                                                  │                      │
//! │  Transform pass (per output document)            ▼                      │
//! │  ┌──────────────────────────────────────────────────────────────┐       │
//! │  │ inject_dependencies(): classify .css/.js, render, replace    │       │
//! │  │ the first PLACEHOLDER                                        │       │
//! │  └──────────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Injected markup
//!
//! ```html
//!   <link rel="stylesheet" href="/css/card.css">
//!   <style>.card { padding: 1rem }</style>
//!   <script src="/js/card.js"></script>
//!   <script>initCards()</script>
//! ```

mod collect;
mod inject;
mod store;
mod types;

pub use collect::{PLACEHOLDER, declare_dependency_point, register_brick};
pub use inject::{
    DependencyKind, inject_dependencies, looks_like_script, looks_like_stylesheet,
    render_dependencies,
};
pub use store::RegistryStore;
pub use types::{Brick, FALLBACK_PAGE_KEY, InsertionSet, PageContext, PageKey, PageRecord};
