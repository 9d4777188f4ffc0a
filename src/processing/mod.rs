//! Text processing stages of the synthesis pipeline.
//!
//! splitter → frequency / phrases → scorer → selector → composer

pub mod composer;
pub mod frequency;
pub mod lexicon;
pub mod phrases;
pub mod scorer;
pub mod selector;
pub mod similarity;
pub mod splitter;
