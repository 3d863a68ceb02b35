pub mod app;
pub mod browser;
pub mod carousel;
pub mod config;
pub mod content;
pub mod embed;
pub mod errors;
pub mod handlers;
pub mod model;
pub mod registry;
pub mod ui;

pub use carousel::{advance, image_ref, CarouselState, Direction, GalleryKind, ImageRef};
pub use embed::{resolve_embed, EmbedTarget, PlaybackMode};
pub use errors::PortfolioError;
pub use model::{Category, VideoEntry};
pub use registry::CategoryRegistry;

/// Install the `env_logger` backend. `RUST_LOG` overrides the default level.
pub fn init_logging(default_level: log::LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .try_init();
}
