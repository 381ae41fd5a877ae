// BP Monitor CLI lib.rs
//
// Console front end for the blood pressure monitor. The binary in src/bin
// wires configuration and logging around these modules.

pub mod config;
pub mod console;
