//! Row structs for the `STAND`, `STAND_PART` and `STAND_ATTRIBUTES` tables.
//!
//! Column names are the implicit lower-case field names. Scalar columns are
//! decoded with `FromRow`; child collections are `#[sqlx(skip)]` and filled
//! in by [`crate::store::load_stand_tree`].
//!
//! `From<Record> for Domain` copies every field verbatim. `From<Domain> for
//! Record` does the same and additionally rewires child back-references
//! from the parent key, so a constructed tree is ready to persist.

use sqlx::FromRow;
use stand_core::domain::{Stand, StandAttributes, StandPart};

pub const STAND_TABLE: &str = r#""STAND""#;
pub const STAND_PART_TABLE: &str = r#""STAND_PART""#;
pub const STAND_ATTRIBUTES_TABLE: &str = r#""STAND_ATTRIBUTES""#;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct StandRecord {
    pub stand_oid: String,
    pub od_object_type: String,
    #[sqlx(skip)]
    pub stand_part_children: Vec<StandPartRecord>,
}

impl StandRecord {
    pub const COLUMNS: &'static [&'static str] = &["stand_oid", "od_object_type"];
}

macro_rules! stand_part_record {
    ($($field:ident : $ty:ty),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq, FromRow)]
        pub struct StandPartRecord {
            pub stand_part_oid: String,
            pub stand_oid: String,
            $(pub $field: $ty,)*
            #[sqlx(skip)]
            pub stand_attribute_children: Vec<StandAttributesRecord>,
        }

        impl StandPartRecord {
            pub const COLUMNS: &'static [&'static str] =
                &["stand_part_oid", "stand_oid", $(stringify!($field)),*];
        }

        impl From<StandPartRecord> for StandPart {
            fn from(record: StandPartRecord) -> Self {
                Self {
                    stand_part_oid: record.stand_part_oid,
                    stand_oid: record.stand_oid,
                    $($field: record.$field,)*
                    stand_attributes: record
                        .stand_attribute_children
                        .into_iter()
                        .map(StandAttributes::from)
                        .collect(),
                }
            }
        }

        impl From<StandPart> for StandPartRecord {
            fn from(part: StandPart) -> Self {
                let stand_attribute_children = part
                    .stand_attributes
                    .into_iter()
                    .map(|attrs| StandAttributesRecord {
                        stand_part_oid: part.stand_part_oid.clone(),
                        ..StandAttributesRecord::from(attrs)
                    })
                    .collect();
                Self {
                    stand_part_oid: part.stand_part_oid,
                    stand_oid: part.stand_oid,
                    $($field: part.$field,)*
                    stand_attribute_children,
                }
            }
        }
    };
}

stand_core::stand_part_fields!(stand_part_record);

macro_rules! stand_attributes_record {
    ($($field:ident : $ty:ty),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq, FromRow)]
        pub struct StandAttributesRecord {
            pub stand_part_oid: String,
            $(pub $field: $ty,)*
        }

        impl StandAttributesRecord {
            pub const COLUMNS: &'static [&'static str] =
                &["stand_part_oid", $(stringify!($field)),*];
        }

        impl From<StandAttributesRecord> for StandAttributes {
            fn from(record: StandAttributesRecord) -> Self {
                Self {
                    stand_part_oid: record.stand_part_oid,
                    $($field: record.$field,)*
                }
            }
        }

        impl From<StandAttributes> for StandAttributesRecord {
            fn from(attrs: StandAttributes) -> Self {
                Self {
                    stand_part_oid: attrs.stand_part_oid,
                    $($field: attrs.$field,)*
                }
            }
        }
    };
}

stand_core::stand_attributes_fields!(stand_attributes_record);

impl From<StandRecord> for Stand {
    fn from(record: StandRecord) -> Self {
        Self {
            stand_oid: record.stand_oid,
            od_object_type: record.od_object_type,
            stand_parts: record
                .stand_part_children
                .into_iter()
                .map(StandPart::from)
                .collect(),
        }
    }
}

impl From<Stand> for StandRecord {
    fn from(stand: Stand) -> Self {
        let stand_part_children = stand
            .stand_parts
            .into_iter()
            .map(|part| StandPartRecord {
                stand_oid: stand.stand_oid.clone(),
                ..StandPartRecord::from(part)
            })
            .collect();
        Self {
            stand_oid: stand.stand_oid,
            od_object_type: stand.od_object_type,
            stand_part_children,
        }
    }
}

/// Comma-separated column list for a SELECT.
pub(crate) fn select_list(columns: &[&str]) -> String {
    columns.join(", ")
}
