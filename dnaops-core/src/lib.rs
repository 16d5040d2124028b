pub mod alphabets;
pub mod error;
pub mod scan;
pub mod seq;

pub use error::{DnaError, DnaResult};
pub use scan::MatchSpan;
pub use seq::dna::DnaSeq;
