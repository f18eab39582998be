//! Promptcheck Archive
//!
//! File-backed archive for prompts and their evaluation metadata.
//!
//! Each archived unit is one UTF-8 text file: a line-oriented metadata
//! header, a `---` separator, then the raw prompt content verbatim. The
//! header grammar lives in [`codec`]; [`store::PromptArchive`] handles
//! filenames and directory iteration.
//!
//! Records are immutable once written. Enumeration tolerates corrupt or
//! foreign files by skipping them (the skip count is reported, not hidden).

pub mod codec;
pub mod slug;
pub mod store;

pub use codec::Header;
pub use slug::slugify;
pub use store::{
    ArchiveListing, ArchivedRecord, PromptArchive, PromptEntry, ARCHIVE_EXTENSION,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::codec::Header;
    pub use crate::store::{ArchiveListing, ArchivedRecord, PromptArchive, PromptEntry};
    pub use promptcheck_core::BiasRisk;
}
