use std::cell::{Cell, RefCell, RefMut};

use crate::error::{Error, Result};
use crate::internal::*;

/// Capture settings photo browsers show alongside an image
///
/// Vendors routinely omit fields, so absence is the expected case, not an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub aperture: Option<String>,
    pub exposure_time: Option<String>,
    pub date_time_original: Option<String>,
    pub iso_speed_ratings: Option<String>,
}

/// An Exif tag directory over a raw byte blob
///
/// Construction wraps the blob without touching it; [`Self::assemble`]
/// builds the tag-id index and must run exactly once before any lookup.
#[derive(Debug)]
pub struct ExifData {
    decoder: RefCell<ExifRaw>,
    assembled: Cell<bool>,
}

impl ExifData {
    /// Wraps a raw Exif blob
    ///
    /// The directory builder only recognizes blobs starting with the
    /// [`PREAMBLE`] literal. With `preamble_required` set, a blob lacking it
    /// gets a synthesized copy prefixed. The prefix shifts the position of
    /// every byte in the blob, which is why the directory builder accounts
    /// for it when resolving offsets.
    pub fn from_buffer(mut buffer: Vec<u8>, preamble_required: bool) -> Self {
        if preamble_required && !buffer.starts_with(PREAMBLE) {
            let mut prefixed = Vec::with_capacity(buffer.len().saturating_add(PREAMBLE.len()));
            prefixed.extend_from_slice(PREAMBLE);
            prefixed.append(&mut buffer);
            buffer = prefixed;
        }

        Self {
            decoder: RefCell::new(ExifRaw::new(buffer)),
            assembled: Cell::new(false),
        }
    }

    /// Build the tag index
    ///
    /// Must run exactly once before any lookup; a second call fails with
    /// [`Error::AlreadyAssembled`]. A failed run leaves the directory
    /// unassembled.
    pub fn assemble(&self) -> Result<()> {
        if self.assembled.get() {
            return Err(Error::AlreadyAssembled);
        }

        self.decoder.borrow_mut().decode()?;
        self.assembled.set(true);

        Ok(())
    }

    fn decoder(&self) -> Result<RefMut<ExifRaw>> {
        if self.assembled.get() {
            Ok(self.decoder.borrow_mut())
        } else {
            Err(Error::NotAssembled)
        }
    }

    /// First decoded textual value for a tag
    ///
    /// "First" matters because a tag id can repeat across directories; the
    /// outermost occurrence wins. An absent tag is `None`, never an error.
    pub fn lookup_first_value(&self, tag: Tag) -> Result<Option<String>> {
        self.decoder()?.format_value(tag)
    }

    /// First string value for a tag
    ///
    /// Unlike [`Self::lookup_first_value`] this only accepts entries with a
    /// textual type instead of rendering numeric ones.
    pub fn lookup_string(&self, tag: Tag) -> Result<Option<String>> {
        self.decoder()?.lookup_string(tag)
    }

    /// Raw undecoded bytes for a tag
    pub fn lookup_data(&self, tag: Tag) -> Result<Option<Vec<u8>>> {
        self.decoder()?.lookup_binary(tag)
    }

    /// Embedded XMP packet
    ///
    /// Raw bytes of tag 0x02BC, a UTF-8 XML document suitable for writing
    /// to a sidecar file.
    pub fn xmp_packet(&self) -> Result<Option<Vec<u8>>> {
        self.lookup_data(Tag::XMP_PACKET)
    }

    /// Camera manufacturer
    pub fn make(&self) -> Result<Option<String>> {
        self.decoder()?.lookup_string(Tag::MAKE)
    }

    /// Camera model
    pub fn model(&self) -> Result<Option<String>> {
        self.decoder()?.lookup_string(Tag::MODEL)
    }

    /// Derived capture summary
    ///
    /// A field the vendor omitted, or wrote with an unexpected type, stays
    /// `None`. Only a lookup before assembly fails.
    pub fn summary(&self) -> Result<Summary> {
        let mut decoder = self.decoder()?;

        Ok(Summary {
            aperture: decoder.format_value(Tag::APERTURE_VALUE).ok().flatten(),
            exposure_time: decoder.format_value(Tag::EXPOSURE_TIME).ok().flatten(),
            date_time_original: decoder
                .format_value(Tag::DATE_TIME_ORIGINAL)
                .ok()
                .flatten(),
            iso_speed_ratings: decoder
                .format_value(Tag::ISO_SPEED_RATINGS)
                .ok()
                .flatten(),
        })
    }

    /// ISO recovered from the vendor maker note
    ///
    /// Some cameras only record the selected ISO inside their proprietary
    /// maker note (tag 0x927C), with a layout that has to be keyed off the
    /// `Make` tag. No vendor layouts are implemented; this always reports
    /// absence and exists as the extension point for adding them.
    pub fn iso_from_makernote(&self) -> Option<u16> {
        None
    }

    /// Capture time parsed from `DateTimeOriginal`
    #[cfg(feature = "chrono")]
    pub fn date_time_original(&self) -> Result<Option<chrono::NaiveDateTime>> {
        let Some(datetime) = self.decoder()?.lookup_string(Tag::DATE_TIME_ORIGINAL)? else {
            return Ok(None);
        };

        Ok(chrono::NaiveDateTime::parse_from_str(datetime.trim(), "%Y:%m:%d %H:%M:%S").ok())
    }

    pub fn debug_dump(&self) -> Result<String> {
        Ok(self.decoder()?.debug_dump())
    }
}
