/**
* filename : mod
* author : HAMA
* date: 2025. 6. 2.
* description:
**/

pub mod signal_types;
pub mod signal_analyzer;
pub mod recommendation;
pub mod report;

pub use signal_types::*;
pub use signal_analyzer::*;
pub use recommendation::*;
pub use report::*;
