//! Template rendering adapters.

mod tera;

pub use self::tera::TeraRenderer;
