/// Database magic.
pub const DATABASE_MAGIC: u32 = 0x4a_50_52_4e; // "JPRN"
/// Current database version in use.
pub const DATABASE_VERSION: u32 = 1;

pub mod audio;

mod config;
pub use self::config::Config;

mod database;
pub use self::database::{Database, FileInfo, Hit, OpenError};

pub mod deinflect;
pub use self::deinflect::deinflect;

mod dirs;
pub use self::dirs::Dirs;

pub mod index;

mod kana;
pub use self::kana::to_hiragana;
