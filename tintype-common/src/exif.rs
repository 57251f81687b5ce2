//! Exif tag vocabulary
//!
//! Tag ids are shared between the TIFF baseline set and the Exif specific
//! IFDs. Only the tags the tintype crates interpret are named; every other
//! id is still representable and its payload passes through untouched.

/// A 16-bit Exif/TIFF tag id
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(pub u16);

macro_rules! tags {
    ($($(#[$($attrss:tt)*])*($value:literal, $const_name:ident, $name:literal),)*) => {
        impl Tag {
            $(
                $(#[$($attrss)*])*
                pub const $const_name: Self = Self($value);
            )*

            /// Well-known name of this tag, if any
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some($name),)*
                    _ => None,
                }
            }
        }
    };
}

tags![
    /// XMP packet embedded as a tag payload, a UTF-8 XML document
    (0x02BC, XMP_PACKET, "XmpPacket"),
    /// Camera manufacturer
    (0x010F, MAKE, "Make"),
    /// Camera model
    (0x0110, MODEL, "Model"),
    /// IPTC-NAA record embedded as a tag payload
    (0x83BB, IPTC_NAA, "IptcNaa"),
    (0x829A, EXPOSURE_TIME, "ExposureTime"),
    /// Lens aperture with unit APEX
    (0x9202, APERTURE_VALUE, "ApertureValue"),
    (0x9003, DATE_TIME_ORIGINAL, "DateTimeOriginal"),
    (0x8827, ISO_SPEED_RATINGS, "ISOSpeedRatings"),
    /// Vendor specific sub-directory, format varies per manufacturer
    (0x927C, MAKER_NOTE, "MakerNote"),
    (0x8769, EXIF_IFD_POINTER, "ExifIfdPointer"),
    (0x8825, GPS_INFO_IFD_POINTER, "GPSInfoIfdPointer"),
    (0xA005, INTEROPERABILITY_IFD_POINTER, "InteroperabilityIfdPointer"),
];

impl Tag {
    /// See 4.6.3 in the Exif v3.0 standard
    pub fn exif_specific_ifd(&self) -> Option<Ifd> {
        match *self {
            Self::EXIF_IFD_POINTER => Some(Ifd::Exif),
            Self::GPS_INFO_IFD_POINTER => Some(Ifd::Gps),
            Self::INTEROPERABILITY_IFD_POINTER => Some(Ifd::Interoperability),
            _ => None,
        }
    }

    pub fn is_exif_specific_ifd(&self) -> bool {
        self.exif_specific_ifd().is_some()
    }
}

/// Image file directory
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ifd {
    Primary,
    Thumbnail,
    Exif,
    Gps,
    Interoperability,
}
