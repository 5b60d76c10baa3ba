//! Pure domain logic for lifequest.
//!
//! Everything in this crate is free of I/O: request validation, the
//! greentext parser and exporter, streak and level-up rules, evolution
//! lookups, gacha pulls and the repository traits the server implements.

pub mod account;
pub mod book;
pub mod book_note;
pub mod collectible;
pub mod finance;
pub mod habit;
pub mod media;
pub mod note;
pub mod progression;
pub mod serde;
pub mod storage;
pub mod task;
pub mod volume;
pub mod workout;
