//! capline-seg: transcript segmentation engine for caption generation.
//!
//! Converts word-level speech-to-text timestamps into caption-length
//! subtitle segments under duration and character constraints, with
//! companion passes for merging short segments, estimating timings for
//! text-only transcripts, and renormalizing timings after manual edits.
//!
//! # Architecture
//!
//! The engine is built around three seams:
//!
//! - [`splitter::Segmenter`]: single forward scan over the word stream,
//!   closing segments by a prioritized rule set ([`splitter::SplitReason`])
//! - [`boundary::BoundaryRules`]: pluggable language boundary detection
//!   (sentence-final endings, clause-starting words)
//! - [`id::IdGenerator`]: injectable segment id source
//!
//! All operations are pure functions of their inputs plus the id generator;
//! there is no I/O and no shared state.
//!
//! # Quick Start
//!
//! ```
//! use capline_seg::options::SplitterOptions;
//! use capline_seg::splitter::Segmenter;
//! use capline_seg::types::WordTimestamp;
//!
//! let words = vec![
//!     WordTimestamp::new("하나", 0.0, 0.4),
//!     WordTimestamp::new("둘", 0.5, 0.9),
//! ];
//!
//! let mut segmenter = Segmenter::new(SplitterOptions::default());
//! let segments = segmenter.segment(&words);
//!
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].text, "하나 둘");
//! ```

pub mod boundary;
pub mod error;
pub mod id;
mod merge;
pub mod options;
mod resegment;
pub mod splitter;
mod timing;
pub mod types;
