pub mod meme_builder;
pub mod toast;
