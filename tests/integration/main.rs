//! Integration tests for ivp

mod cli_test;
mod controller_test;
mod helpers;
mod simulate_test;
