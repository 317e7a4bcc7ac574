//! Bricks - filters, shortcodes and a brick dependency registry for
//! static site generators.
//!
//! The host build tool owns the pipeline. This crate plugs into its
//! lifecycle hooks:
//!
//! | Hook          | Entry point                        |
//! |---------------|------------------------------------|
//! | before build  | [`Bricks::before_build`]           |
//! | preprocess    | [`Bricks::preprocess_markdown`]    |
//! | render        | [`Bricks::brick`], [`Bricks::bricks_registry`], filters |
//! | transform     | [`Bricks::transform`]              |
//!
//! Every filter is also usable on its own through the [`filters`],
//! [`markdown`] and [`favicons`] modules.

pub mod config;
pub mod favicons;
pub mod filters;
pub mod fragment;
pub mod logger;
pub mod markdown;
pub mod plugin;
pub mod registry;
pub mod site_data;

pub use config::{BricksConfig, FilterName};
pub use filters::FilterError;
pub use plugin::Bricks;
pub use registry::{
    Brick, PLACEHOLDER, PageContext, PageKey, PageRecord, RegistryStore, declare_dependency_point,
    inject_dependencies, register_brick,
};
pub use site_data::SiteData;
