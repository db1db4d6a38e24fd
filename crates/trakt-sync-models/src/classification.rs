//! Closed sets of values Trakt accepts when describing a collected copy.
//!
//! Each enum is backed by the exact wire string, which is also what
//! `Display`/`FromStr` use, so the same spelling works on the command line
//! and in config files.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseClassificationError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseClassificationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ParseClassificationError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let value = String::deserialize(deserializer)?;
                value.parse().map_err(de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// Physical or digital format of a collected copy
    pub enum MediaType ("media type") {
        Digital => "digital",
        Bluray => "bluray",
        HdDvd => "hddvd",
        Dvd => "dvd",
        Vcd => "vcd",
        Vhs => "vhs",
        Betamax => "betamax",
        Laserdisc => "laserdisc",
    }
}

wire_enum! {
    pub enum Resolution ("resolution") {
        Uhd4k => "uhd_4k",
        Hd1080p => "hd_1080p",
        Hd1080i => "hd_1080i",
        Hd720p => "hd_720p",
        Sd480p => "sd_480p",
        Sd480i => "sd_480i",
        Sd576p => "sd_576p",
        Sd576i => "sd_576i",
    }
}

wire_enum! {
    pub enum Hdr ("hdr") {
        DolbyVision => "dolby_vision",
        Hdr10 => "hdr10",
        Hdr10Plus => "hdr10_plus",
        Hlg => "hlg",
    }
}

wire_enum! {
    /// Audio codec of the primary track
    pub enum Audio ("audio") {
        DolbyDigital => "dolby_digital",
        DolbyDigitalPlus => "dolby_digital_plus",
        DolbyDigitalPlusAtmos => "dolby_digital_plus_atmos",
        DolbyTrueHd => "dolby_truehd",
        DolbyAtmos => "dolby_atmos",
        DolbyProLogic => "dolby_prologic",
        Dts => "dts",
        DtsMa => "dts_ma",
        DtsHr => "dts_hr",
        DtsX => "dts_x",
        Auro3d => "auro_3d",
        Mp3 => "mp3",
        Mp2 => "mp2",
        Aac => "aac",
        Lpcm => "lpcm",
        Ogg => "ogg",
        OggOpus => "ogg_opus",
        Wma => "wma",
        Flac => "flac",
    }
}

wire_enum! {
    /// Speaker layout, written as Trakt's dotted channel notation
    pub enum AudioChannels ("audio channels") {
        Mono => "1.0",
        Stereo => "2.0",
        Stereo21 => "2.1",
        Surround30 => "3.0",
        Surround31 => "3.1",
        Surround40 => "4.0",
        Surround41 => "4.1",
        Surround50 => "5.0",
        Surround51 => "5.1",
        Surround512 => "5.1.2",
        Surround514 => "5.1.4",
        Surround60 => "6.0",
        Surround61 => "6.1",
        Surround71 => "7.1",
        Surround712 => "7.1.2",
        Surround714 => "7.1.4",
        Surround91 => "9.1",
        Surround101 => "10.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_strings() {
        assert_eq!(serde_json::to_value(MediaType::Bluray).unwrap(), json!("bluray"));
        assert_eq!(serde_json::to_value(Resolution::Uhd4k).unwrap(), json!("uhd_4k"));
        assert_eq!(serde_json::to_value(Hdr::Hdr10Plus).unwrap(), json!("hdr10_plus"));
        assert_eq!(serde_json::to_value(Audio::DolbyTrueHd).unwrap(), json!("dolby_truehd"));
        assert_eq!(serde_json::to_value(AudioChannels::Surround512).unwrap(), json!("5.1.2"));
    }

    #[test]
    fn test_from_str_matches_as_str() {
        for value in Audio::ALL {
            assert_eq!(value.as_str().parse::<Audio>().unwrap(), *value);
        }
        for value in AudioChannels::ALL {
            assert_eq!(value.to_string().parse::<AudioChannels>().unwrap(), *value);
        }
    }

    #[test]
    fn test_unknown_value_lists_expected() {
        let err = "blu-ray".parse::<MediaType>().unwrap_err();
        assert_eq!(err.kind, "media type");
        assert_eq!(err.value, "blu-ray");
        assert!(err.expected.contains("bluray"));
        assert!(err.to_string().starts_with("unknown media type value 'blu-ray'"));
    }

    #[test]
    fn test_deserialize_rejects_unknown() {
        assert_eq!(
            serde_json::from_value::<Hdr>(json!("dolby_vision")).unwrap(),
            Hdr::DolbyVision
        );
        assert!(serde_json::from_value::<Hdr>(json!("hdr12")).is_err());
        assert!(serde_json::from_value::<Hdr>(json!(10)).is_err());
    }
}
