use tintype_common::endian::ByteOrder;
use tintype_common::math::ToU64;

use super::*;
use crate::error::{Error, Result, ResultExt};

impl super::ExifRaw {
    /// Build the tag index
    ///
    /// A malformed preamble, TIFF header, or primary directory is fatal.
    /// Broken sub-directory locations only lose that directory.
    pub fn decode(&mut self) -> Result<()> {
        self.locations = Default::default();
        self.ifd_locations = Default::default();

        self.decode_header()?;
        self.decode_ifds()?;

        Ok(())
    }

    fn decode_header(&mut self) -> Result<()> {
        self.raw.base = 0;
        self.raw.seek_start(0)?;

        let preamble: [u8; PREAMBLE.len()] = self.raw.read_exact().e(Error::PreambleMissing)?;
        if preamble != *PREAMBLE {
            return Err(Error::PreambleMissing);
        }

        // All directory offsets are relative to the TIFF body after the
        // preamble
        self.raw.base = PREAMBLE.len().u64()?;

        self.read_byte_order()?;
        self.read_magic_42()?;

        let offset = self.raw.read_u32()?;
        self.raw.seek_start(offset)
    }

    fn read_byte_order(&mut self) -> Result<()> {
        self.raw.order = match &self.raw.read_exact().e(Error::ByteOrderEof)? {
            b"II" => ByteOrder::LittleEndian,
            b"MM" => ByteOrder::BigEndian,
            bo => return Err(Error::UnknownByteOrder(*bo)),
        };

        Ok(())
    }

    fn read_magic_42(&mut self) -> Result<()> {
        match self.raw.read_u16().e(Error::MagicBytesEof)? {
            42 => Ok(()),
            magic => Err(Error::MagicBytesWrong(magic)),
        }
    }

    fn decode_ifds(&mut self) -> Result<()> {
        let next_ifd_offset = self.decode_ifd_entries(Ifd::Primary)?;

        if next_ifd_offset != 0 {
            self.decode_ifd_entries_error_silenced(Ifd::Thumbnail, next_ifd_offset);
        }

        Ok(())
    }

    /// Sometimes, not all IFD locations are actually valid
    fn decode_ifd_entries_error_silenced(&mut self, ifd: Ifd, ifd_offset: u32) {
        if let Err(err) = self.raw.seek_start(ifd_offset) {
            tracing::info!("Location for IFD '{ifd:?}' does not exist: {err}");
            return;
        }
        if let Err(err) = self.decode_ifd_entries(ifd) {
            tracing::info!("Failed to load IFD '{ifd:?}': {err}");
        }
    }

    fn decode_ifd_entries(&mut self, ifd: Ifd) -> Result<u32> {
        let ifd_location = self.raw.position()?;
        if self.register_ifd(ifd, ifd_location) {
            tracing::info!("IFD '{ifd:?}' listed twice, ignoring the duplicate");
            return Ok(0);
        }

        let n_entries = self.raw.read_u16().e(Error::NumEntriesEof)?;
        tracing::debug!("Reading IFD '{ifd:?}' with {n_entries} entries at byte {ifd_location}");

        let mut sub_ifd_offsets = Vec::new();
        for _ in 0..n_entries {
            let (tag, entry) = self.read_entry(ifd)?;

            if let Some(sub_ifd) = tag.exif_specific_ifd() {
                sub_ifd_offsets.push((sub_ifd, entry.value_offset.u32()));
            }

            self.locations.entry(tag).or_default().push(entry);
        }

        let next_ifd_offset = self.raw.read_u32()?;

        // Load entries for every found Exif specific sub-directory
        for (sub_ifd, offset) in sub_ifd_offsets {
            tracing::debug!("Reading Exif specific IFD '{sub_ifd:?}'");
            self.decode_ifd_entries_error_silenced(sub_ifd, offset);
        }

        Ok(next_ifd_offset)
    }

    /// Read a single directory entry at the current position
    fn read_entry(&mut self, ifd: Ifd) -> Result<(Tag, EntryRef)> {
        let position = self.raw.position()?;
        let tag = Tag(self.raw.read_u16().e(Error::EntryEof)?);
        let data_type = Type::from(self.raw.read_u16().e(Error::EntryEof)?);
        let count = self.raw.read_u32().e(Error::EntryEof)?;
        let value_offset =
            ValueOffset::new(data_type, count, self.raw.read_u32().e(Error::EntryEof)?)?;

        Ok((
            tag,
            EntryRef {
                position,
                ifd,
                data_type,
                count,
                value_offset,
            },
        ))
    }

    /// Remember where a directory starts; true if it was already visited
    fn register_ifd(&mut self, ifd: Ifd, location: u32) -> bool {
        if self.ifd_locations.contains_key(&ifd) {
            true
        } else {
            self.ifd_locations.insert(ifd, location);
            false
        }
    }
}
