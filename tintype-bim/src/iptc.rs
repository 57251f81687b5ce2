//! IPTC-IIM dataset reader
//!
//! The payload of the [`BlockId::IptcNaa`](crate::BlockId::IptcNaa) resource
//! block is a sequence of IIM datasets:
//!
//! ```text
//! 0x1C | record:u8 | dataset:u8 | len:u16 BE | data:len bytes
//! ```
//!
//! Only record 2 (the application record) carries the caption and keyword
//! fields photo tools care about. Unknown datasets are kept as opaque
//! payloads.

use std::io::{Cursor, Read};
use std::ops::Range;

use tintype_common::endian::ByteOrder;
use tintype_common::error::ErrorWithData;
use tintype_common::math::*;
use tintype_common::utils::convertible_enum;

use crate::error::Error;

/// Marker byte starting every dataset
pub const TAG_MARKER: u8 = 0x1C;

/// The IPTC application record
pub const APPLICATION_RECORD: u8 = 2;

convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Dataset numbers of the application record
    pub enum DataSetNumber {
        RecordVersion = 0,
        ObjectName = 5,
        Keywords = 25,
        DateCreated = 55,
        Byline = 80,
        City = 90,
        Headline = 105,
        Caption = 120,
    }
);

/// An ordered sequence of IIM datasets
#[derive(Debug, Clone)]
pub struct Iptc {
    pub(crate) data: Vec<u8>,
    pub(crate) datasets: Vec<RawDataSet>,
}

/// Dataset location inside the record buffer
#[derive(Debug, Clone)]
pub struct RawDataSet {
    pub(crate) record: u8,
    pub(crate) dataset: u8,
    pub(crate) data_location: Range<usize>,
}

/// View on a single dataset
#[derive(Debug)]
pub struct DataSet<'a> {
    pub record: u8,
    pub dataset: u8,
    pub data: &'a [u8],
}

impl Iptc {
    /// Returns the parsed dataset sequence
    ///
    /// * `data`: raw payload of an IPTC resource block
    ///
    /// A dataset not starting with the `0x1C` marker or cut off by the end of
    /// the record is fatal; no partial sequence is returned.
    pub fn new(data: Vec<u8>) -> Result<Self, ErrorWithData<Error>> {
        match Self::find_datasets(&data) {
            Ok(datasets) => Ok(Self { data, datasets }),
            Err(err) => Err(ErrorWithData::new(err, data)),
        }
    }

    /// Convert into raw data
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Returns all datasets
    pub fn datasets(&self) -> Vec<DataSet> {
        self.datasets.iter().map(|x| self.dataset(x)).collect()
    }

    /// First textual value of an application record dataset
    pub fn string(&self, number: DataSetNumber) -> Option<String> {
        self.application_values(number)
            .next()
            .map(|x| decode_text(x))
    }

    /// All textual values of a repeatable application record dataset
    pub fn strings(&self, number: DataSetNumber) -> Vec<String> {
        self.application_values(number).map(decode_text).collect()
    }

    /// Caption/abstract (dataset 2:120)
    pub fn caption(&self) -> Option<String> {
        self.string(DataSetNumber::Caption)
    }

    /// Headline (dataset 2:105)
    pub fn headline(&self) -> Option<String> {
        self.string(DataSetNumber::Headline)
    }

    /// Object name/title (dataset 2:05)
    pub fn object_name(&self) -> Option<String> {
        self.string(DataSetNumber::ObjectName)
    }

    /// Keywords (dataset 2:25, repeatable)
    pub fn keywords(&self) -> Vec<String> {
        self.strings(DataSetNumber::Keywords)
    }

    fn dataset<'a>(&'a self, raw: &RawDataSet) -> DataSet<'a> {
        DataSet {
            record: raw.record,
            dataset: raw.dataset,
            data: self
                .data
                .get(raw.data_location.clone())
                .expect("Unreachable: The dataset must be part of the data"),
        }
    }

    fn application_values(&self, number: DataSetNumber) -> impl Iterator<Item = &[u8]> {
        let dataset: u8 = number.into();
        self.datasets
            .iter()
            .filter(move |x| x.record == APPLICATION_RECORD && x.dataset == dataset)
            .map(|x| {
                self.data
                    .get(x.data_location.clone())
                    .expect("Unreachable: The dataset must be part of the data")
            })
    }

    fn find_datasets(data: &[u8]) -> Result<Vec<RawDataSet>, Error> {
        let total = data.len();
        let mut cur = Cursor::new(data);
        let mut datasets = Vec::new();

        loop {
            if cur.position().usize()? == total {
                break;
            }

            let header = &mut [0; 3];
            cur.read_exact(header).map_err(|_| Error::UnexpectedEof)?;
            if header[0] != TAG_MARKER {
                return Err(Error::InvalidDataSetMarker(header[0]));
            }

            let len = &mut [0; 2];
            cur.read_exact(len).map_err(|_| Error::UnexpectedEof)?;
            let data_len = usize::from(ByteOrder::BigEndian.u16_bytes(*len));

            let data_start = cur.position().usize()?;
            let data_end = data_start.safe_add(data_len)?;
            if data_end > total {
                return Err(Error::UnexpectedEof);
            }
            cur.set_position(data_end.u64()?);

            datasets.push(RawDataSet {
                record: header[1],
                dataset: header[2],
                data_location: data_start..data_end,
            });
        }

        Ok(datasets)
    }
}

fn decode_text(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim().to_string()
}
