//! Genius search adapter for the `LyricsLinkSource` port.

mod dto;
mod http_lyrics;

pub use http_lyrics::GeniusHttpLyrics;
