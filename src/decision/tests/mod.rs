mod engine_test;
mod fixture;
