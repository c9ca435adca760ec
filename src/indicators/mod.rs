/**
* filename : mod
* author : HAMA
* date: 2025. 6. 2.
* description: 
**/
pub mod oscillators;

pub use oscillators::*;
