#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use tm_mapper as mapper;
pub use tm_mapper::serde_json;
