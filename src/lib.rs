#![no_std]
extern crate alloc;

pub mod angles;
pub mod color;
pub mod flatten;
pub mod path;
pub mod sector;

#[doc(inline)]
pub use {
    path::Couple,
    path::Direction,
    path::Float,
    path::Path,
    path::PathCommand,
    path::PathSink,
    path::TranslatedSink,
    sector::add_circle_sector,
    sector::add_ring_sector,
    sector::arc_to,
    flatten::FlatteningSink,
};
