mod support;

mod client_tests;
mod session_tests;
