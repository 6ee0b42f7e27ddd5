//! Closed enums for every enumerated listing field.
//!
//! Each enum serializes to the exact string the mock backend and the
//! evaluation tooling match on. Deserialization and `FromStr` reject unknown
//! strings with [`CoreError::InvalidValue`], so a malformed record fails at the
//! boundary instead of leaking into pricing or tag comparisons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Declares a closed enum whose serde form is its wire string.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The wire string for this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| CoreError::InvalidValue {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

wire_enum! {
    /// Which way the unit faces.
    Orientation {
        South => "朝南",
        North => "朝北",
        East => "朝东",
        West => "朝西",
        NorthSouth => "南北",
        EastWest => "东西",
    }
}

// ---------------------------------------------------------------------------
// RentalMode
// ---------------------------------------------------------------------------

wire_enum! {
    /// Whether the whole unit or a single room in a shared suite is let.
    ///
    /// Pricing and layout scenarios differ structurally between the two.
    RentalMode {
        WholeUnit => "整租",
        SharedRoom => "合租",
    }
}

impl RentalMode {
    #[must_use]
    pub const fn is_shared(self) -> bool {
        matches!(self, Self::SharedRoom)
    }
}

// ---------------------------------------------------------------------------
// FloorTier
// ---------------------------------------------------------------------------

wire_enum! {
    /// Named height band within the building.
    FloorTier {
        Low => "低层",
        Middle => "中层",
        High => "高层",
    }
}

// ---------------------------------------------------------------------------
// Decoration
// ---------------------------------------------------------------------------

wire_enum! {
    /// Fit-out level of the unit.
    Decoration {
        Basic => "简装",
        Refined => "精装",
        Luxury => "豪华",
        Bare => "毛坯",
        Unfurnished => "空房",
    }
}

// ---------------------------------------------------------------------------
// NoiseLevel
// ---------------------------------------------------------------------------

wire_enum! {
    /// Latent noise attribute. Not derivable from any visible field.
    NoiseLevel {
        Quiet => "安静",
        Moderate => "中等",
        Noisy => "吵闹",
        StreetFacing => "临街",
    }
}

// ---------------------------------------------------------------------------
// PropertyType / UtilitiesType
// ---------------------------------------------------------------------------

wire_enum! {
    PropertyType {
        Residential => "住宅",
        Apartment => "公寓",
    }
}

wire_enum! {
    /// Utility billing class (residential or commercial water/power rates).
    UtilitiesType {
        Civil => "民水民电",
        Commercial => "商水商电",
    }
}

// ---------------------------------------------------------------------------
// ListingPlatform
// ---------------------------------------------------------------------------

wire_enum! {
    /// Listing site the record claims to come from.
    ListingPlatform {
        Anjuke => "安居客",
        Lianjia => "链家",
        Tongcheng58 => "58同城",
    }
}

impl ListingPlatform {
    /// Landing URL paired with the platform.
    #[must_use]
    pub const fn url(self) -> &'static str {
        match self {
            Self::Anjuke => "https://bj.zu.anjuke.com/",
            Self::Lianjia => "https://bj.lianjia.com/",
            Self::Tongcheng58 => "https://bj.58.com/",
        }
    }
}

// ---------------------------------------------------------------------------
// ListingStatus
// ---------------------------------------------------------------------------

wire_enum! {
    /// Lifecycle status of a listing.
    ///
    /// The generator only assigns the initial value; transitions belong to
    /// the mock backend.
    ListingStatus {
        Available => "available",
        Rented => "rented",
        Offline => "offline",
    }
}

// ---------------------------------------------------------------------------
// CoordinateSystem
// ---------------------------------------------------------------------------

wire_enum! {
    CoordinateSystem {
        Wgs84 => "WGS84",
    }
}

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

wire_enum! {
    /// Derived, non-authoritative descriptive label.
    Tag {
        SharedRoom => "合租",
        SmallRoom => "小单间",
        Refined => "精装修",
        Luxury => "豪华装修",
        Bare => "毛坯",
        Unfurnished => "空房",
        NearSubway => "近地铁",
        DualLine => "双地铁",
        MultiLine => "多地铁",
        SouthFacing => "朝南",
        NorthSouthThrough => "南北通透",
        GoodLight => "采光好",
        Elevator => "有电梯",
        HighFloor => "高楼层",
        HighRise => "高层",
        Spacious => "大户型",
        Compact => "小户型",
        LargeTwoBedroom => "大两居",
        LargeThreeBedroom => "大三居",
        DualBath => "双卫",
        CoreDistrict => "核心区",
        SchoolDistrict => "学区房",
        NearUniversity => "近高校",
        Xierqi => "西二旗",
        Shangdi => "上地",
        ChaoyangRoad => "朝阳路",
        CommercialResidential => "商住",
        Cheap => "低价",
        GoodValue => "高性价比",
        RuralHouse => "农村房",
        RuralSelfBuilt => "农村自建房",
    }
}
