// src/pipeline/tests/mod.rs

mod models_tests;
