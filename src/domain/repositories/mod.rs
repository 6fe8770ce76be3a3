//! # Domain Repositories
//!
//! Repository traitの定義（インターフェースのみ、実装はAdapter層）

pub mod registry_repository;
pub mod tracker_repository;
