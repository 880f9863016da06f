#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub(crate) mod rounding;

pub mod bar;
pub mod body_fat;
pub mod catalog;
pub mod config;
pub mod distribution;
pub mod ffmi;
pub mod one_rep_max;
pub mod output;
pub mod plate;
pub mod tdee;
pub mod unit;
pub mod validation;
pub mod validation_error;
