pub mod dna;


pub use dna::DnaSeq;
