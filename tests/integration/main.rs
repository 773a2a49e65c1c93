//! Integration tests for cputempfreq.

mod util;

mod config_tests;
