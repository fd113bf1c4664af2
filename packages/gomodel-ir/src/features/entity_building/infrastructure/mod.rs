mod initializer;
mod struct_tag;

pub use initializer::normalize_initializer;
pub use struct_tag::{parse_tag, split_tag_pairs, strip_tag_delimiters};
