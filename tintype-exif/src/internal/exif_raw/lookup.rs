use tintype_common::math::ToUsize;

use super::*;
use crate::error::{Error, Result, ResultExt};

impl super::ExifRaw {
    /// First recorded entry for a tag id
    ///
    /// A tag id can repeat across directories (the thumbnail directory
    /// mirrors many primary tags); the outermost occurrence wins.
    pub fn lookup_entry(&self, tag: Tag) -> Option<EntryRef> {
        self.locations.get(&tag).and_then(|x| x.first()).copied()
    }

    /// Raw bytes of the first entry for `tag` together with its type
    pub fn lookup_data(&mut self, tag: Tag) -> Result<Option<(Type, Vec<u8>)>> {
        let Some(entry) = self.lookup_entry(tag) else {
            return Ok(None);
        };

        let len = entry.data_len()?.usize()?;
        let value = match entry.value_offset {
            ValueOffset::Offset(offset) => {
                self.raw.seek_start(offset)?;
                self.raw.read_vec(len).e(Error::LookupEof)?
            }
            ValueOffset::Value(value) => {
                // Values no larger than four bytes are stored inside the
                // entry, in file byte order
                let bytes = self.raw.order.u32_to_bytes(value);
                bytes.get(..len).e(Error::DataSizeTooLarge)?.to_vec()
            }
        };

        Ok(Some((entry.data_type, value)))
    }

    pub fn lookup_binary(&mut self, tag: Tag) -> Result<Option<Vec<u8>>> {
        Ok(self.lookup_data(tag)?.map(|(_, data)| data))
    }

    /// Returns a field of [`Type::Ascii`] or [`Type::Utf8`]
    ///
    /// This lookup deviates from the standard in that it removes all NUL
    /// bytes instead of just the terminator. Many Exif writers pad their
    /// strings with NUL bytes at the end or beginning of the data.
    pub fn lookup_string(&mut self, tag: Tag) -> Result<Option<String>> {
        let Some((data_type, data)) = self.lookup_data(tag)? else {
            return Ok(None);
        };

        if data_type != Type::Ascii && data_type != Type::Utf8 {
            return Err(Error::UnexpectedType(data_type));
        }

        let data = data.iter().copied().filter(|x| *x != 0).collect::<Vec<_>>();

        Ok(Some(String::from_utf8_lossy(&data).to_string()))
    }

    pub fn lookup_short(&mut self, tag: Tag) -> Result<Option<u16>> {
        let Some(entry) = self.lookup_entry(tag) else {
            return Ok(None);
        };

        Self::check_type(&entry, 1, Type::Short)?;

        if let ValueOffset::Value(x) = entry.value_offset {
            let bytes = self.raw.order.u32_to_bytes(x);
            Ok(Some(self.raw.order.u16_bytes([bytes[0], bytes[1]])))
        } else {
            Err(Error::OffsetInsteadOfValue)
        }
    }

    pub fn lookup_long(&mut self, tag: Tag) -> Result<Option<u32>> {
        let Some(entry) = self.lookup_entry(tag) else {
            return Ok(None);
        };

        Self::check_type(&entry, 1, Type::Long)?;

        if let ValueOffset::Value(x) = entry.value_offset {
            Ok(Some(x))
        } else {
            Err(Error::OffsetInsteadOfValue)
        }
    }

    pub fn lookup_rational(&mut self, tag: Tag) -> Result<Option<(u32, u32)>> {
        let Some(entry) = self.lookup_entry(tag) else {
            return Ok(None);
        };

        Self::check_type(&entry, 1, Type::Rational)?;

        self.raw.seek_start(entry.offset()?)?;
        let x = self.raw.read_u32()?;
        let y = self.raw.read_u32()?;

        Ok(Some((x, y)))
    }

    /// Textual rendering of the first value for `tag`
    ///
    /// Types without an obvious textual form give absence, like a missing
    /// tag does.
    pub fn format_value(&mut self, tag: Tag) -> Result<Option<String>> {
        let Some(entry) = self.lookup_entry(tag) else {
            return Ok(None);
        };

        match entry.data_type {
            Type::Ascii | Type::Utf8 => self.lookup_string(tag),
            Type::Short if entry.count == 1 => {
                Ok(self.lookup_short(tag)?.map(|x| x.to_string()))
            }
            Type::Long if entry.count == 1 => Ok(self.lookup_long(tag)?.map(|x| x.to_string())),
            Type::Rational if entry.count == 1 => Ok(self
                .lookup_rational(tag)?
                .map(|(x, y)| format!("{x}/{y}"))),
            _ => Ok(None),
        }
    }

    fn check_type(entry: &EntryRef, count: u32, data_type: Type) -> Result<()> {
        if entry.count == count && entry.data_type == data_type {
            Ok(())
        } else {
            Err(Error::WrongType {
                expected: (count, data_type),
                actual: (entry.count, entry.data_type),
            })
        }
    }
}
