//! The tag-cloud pipeline: segmentation, frequency accumulation, top-N
//! selection and font scaling.
//!
//! A document is split into maximal separator/word runs by [`Tokens`],
//! counted case-insensitively into a [`FrequencyTable`], narrowed to the
//! most frequent words by [`select`], and each selected count is scaled
//! to a display size by [`font_size`].

pub mod font;
pub mod frequency;
pub mod selector;
pub mod separators;
pub mod tokenizer;

pub use font::{font_size, FONT_RANGE, LARGEST_FONT, SMALLEST_FONT};
pub use frequency::FrequencyTable;
pub use selector::{select, SelectedEntry, Selection};
pub use separators::SeparatorSet;
pub use tokenizer::{next_token, Token, Tokens};
