// src/candidates/tests/mod.rs

mod models_tests;
mod validators_tests;
