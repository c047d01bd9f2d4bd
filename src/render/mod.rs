//! HTML rendering with maud. Everything here is a pure function from data to `Markup`.

pub mod code_block;
pub mod layout;
pub mod lesson;
pub mod pages;
pub mod sidebar;

pub use code_block::render_code_sample;
pub use layout::render_page;
pub use lesson::render_lesson;
pub use pages::{home_document, lesson_document, not_found_document, HOME_META, NOT_FOUND_META};
pub use sidebar::render_sidebar;
