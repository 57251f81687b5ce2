use super::*;
use crate::error::Result;

impl super::ExifRaw {
    /// Human readable dump of every directory and entry
    pub fn debug_dump(&mut self) -> String {
        let mut out = String::new();

        for (ifd, ifd_location) in self.ifd_locations.clone() {
            out.push_str(&format!("\n{ifd:?} - at byte {ifd_location}\n"));
            out.push_str("------------------------------\n");
            for (tag, entries) in self.locations.clone() {
                for entry in entries {
                    if entry.ifd != ifd {
                        continue;
                    }

                    let name = tag
                        .name()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| format!("{:#06X}", tag.0));

                    out.push_str(&format!(
                        "{name} {:?}({}): {:?}\n",
                        entry.data_type, entry.count, entry.value_offset
                    ));
                    out.push_str(&self.debug_dump_entry(tag));
                    out.push('\n');
                }
            }
        }

        out
    }

    fn debug_dump_entry(&mut self, tag: Tag) -> String {
        fn show(x: Result<Option<impl ToString>>) -> String {
            match x {
                Ok(Some(x)) => x.to_string(),
                Ok(None) => String::from("<no value>"),
                Err(err) => format!("{err:?}"),
            }
        }

        show(self.format_value(tag))
    }
}
