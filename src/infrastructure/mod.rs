pub mod html_renderer;

pub use html_renderer::{with_deadline, HtmlRenderer};
