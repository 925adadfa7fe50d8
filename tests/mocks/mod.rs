#![allow(dead_code)]

pub mod generator;
pub mod transcript_source;
