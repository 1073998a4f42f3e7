pub mod html;
pub mod test_utils;

pub use html::escape_html;
