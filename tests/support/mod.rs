#![allow(dead_code)]

pub mod trade;
