//! Domain value objects for stands.
//! Pure value types with no sqlx or serde. Struct bodies come from the field
//! manifests in [`crate::fields`].

/// A forestry management unit and its ordered parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stand {
    pub stand_oid: String,
    pub od_object_type: String,
    pub stand_parts: Vec<StandPart>,
}

macro_rules! declare_stand_part {
    ($($field:ident : $ty:ty),* $(,)?) => {
        /// A temporally-scoped sub-division of a [`Stand`].
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct StandPart {
            pub stand_part_oid: String,
            pub stand_oid: String,
            $(pub $field: $ty,)*
            pub stand_attributes: Vec<StandAttributes>,
        }
    };
}

crate::stand_part_fields!(declare_stand_part);

macro_rules! declare_stand_attributes {
    ($($field:ident : $ty:ty),* $(,)?) => {
        /// Descriptive measurement and classification fields of a [`StandPart`].
        ///
        /// Storage holds at most one of these per part; the domain keeps a
        /// list so the wire shape matches what clients already consume.
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct StandAttributes {
            pub stand_part_oid: String,
            $(pub $field: $ty,)*
        }
    };
}

crate::stand_attributes_fields!(declare_stand_attributes);

impl Stand {
    pub fn new(stand_oid: impl Into<String>, od_object_type: impl Into<String>) -> Self {
        Self {
            stand_oid: stand_oid.into(),
            od_object_type: od_object_type.into(),
            stand_parts: Vec::new(),
        }
    }

    /// True when every part points back at this stand and every attribute
    /// set points back at its part.
    pub fn back_references_consistent(&self) -> bool {
        self.stand_parts.iter().all(|part| {
            part.stand_oid == self.stand_oid
                && part
                    .stand_attributes
                    .iter()
                    .all(|attrs| attrs.stand_part_oid == part.stand_part_oid)
        })
    }
}

impl StandAttributes {
    pub fn for_part(stand_part_oid: impl Into<String>) -> Self {
        Self {
            stand_part_oid: stand_part_oid.into(),
            ..Self::default()
        }
    }
}
