//! Wire schema for stands, the JSON shape served at the HTTP boundary.
//!
//! Decoding enforces required fields (`stand_oid`, `od_object_type`,
//! `stand_part_oid`, `od_part_type`, `effective_date`); optional fields
//! default to absent and child lists to empty. Absent optionals are emitted
//! as `null`. Conversions to and from the domain layer are plain `From`
//! impls generated from the same manifests as the structs.

use serde::{Deserialize, Serialize};

use crate::domain::{Stand, StandAttributes, StandPart};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandSchema {
    pub stand_oid: String,
    pub od_object_type: String,
    #[serde(default)]
    pub stand_parts: Vec<StandPartSchema>,
}

macro_rules! stand_part_schema {
    ($($field:ident : $ty:ty),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct StandPartSchema {
            pub stand_oid: String,
            pub stand_part_oid: String,
            $(pub $field: $ty,)*
            #[serde(default)]
            pub stand_attributes: Vec<StandAttributesSchema>,
        }

        impl From<StandPart> for StandPartSchema {
            fn from(part: StandPart) -> Self {
                Self {
                    stand_oid: part.stand_oid,
                    stand_part_oid: part.stand_part_oid,
                    $($field: part.$field,)*
                    stand_attributes: part
                        .stand_attributes
                        .into_iter()
                        .map(StandAttributesSchema::from)
                        .collect(),
                }
            }
        }

        impl From<StandPartSchema> for StandPart {
            fn from(part: StandPartSchema) -> Self {
                Self {
                    stand_part_oid: part.stand_part_oid,
                    stand_oid: part.stand_oid,
                    $($field: part.$field,)*
                    stand_attributes: part
                        .stand_attributes
                        .into_iter()
                        .map(StandAttributes::from)
                        .collect(),
                }
            }
        }
    };
}

crate::stand_part_fields!(stand_part_schema);

macro_rules! stand_attributes_schema {
    ($($field:ident : $ty:ty),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct StandAttributesSchema {
            pub stand_part_oid: String,
            $(#[serde(default)] pub $field: $ty,)*
        }

        impl From<StandAttributes> for StandAttributesSchema {
            fn from(attrs: StandAttributes) -> Self {
                Self {
                    stand_part_oid: attrs.stand_part_oid,
                    $($field: attrs.$field,)*
                }
            }
        }

        impl From<StandAttributesSchema> for StandAttributes {
            fn from(attrs: StandAttributesSchema) -> Self {
                Self {
                    stand_part_oid: attrs.stand_part_oid,
                    $($field: attrs.$field,)*
                }
            }
        }
    };
}

crate::stand_attributes_fields!(stand_attributes_schema);

impl From<Stand> for StandSchema {
    fn from(stand: Stand) -> Self {
        Self {
            stand_oid: stand.stand_oid,
            od_object_type: stand.od_object_type,
            stand_parts: stand
                .stand_parts
                .into_iter()
                .map(StandPartSchema::from)
                .collect(),
        }
    }
}

impl From<StandSchema> for Stand {
    fn from(stand: StandSchema) -> Self {
        Self {
            stand_oid: stand.stand_oid,
            od_object_type: stand.od_object_type,
            stand_parts: stand.stand_parts.into_iter().map(StandPart::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn full_attributes(stand_part_oid: &str) -> StandAttributes {
        StandAttributes {
            stand_part_oid: stand_part_oid.into(),
            effective_date: Some(at(2019, 4, 1)),
            relate: Some("R".into()),
            stand_number: Some("0042".into()),
            status: Some("ACTIVE".into()),
            timber_type: Some("PINE".into()),
            harvest_code: Some("CC".into()),
            established_year: Some("1998".into()),
            last_thinned_date: Some(at(2015, 6, 30)),
            last_thinned_year: Some("2015".into()),
            first_thin_year: Some("2010".into()),
            second_thin_year: Some("2015".into()),
            third_thin_year: None,
            site_index: Some(65),
            source: Some("CRUISE".into()),
            old_id_1: Some("legacy-1".into()),
            old_id_2: None,
            ownership: Some("FEE".into()),
            description: Some("north slope planting".into()),
            species: Some("LOB".into()),
            co_dom_species: Some("SLA".into()),
            regeneration_type: Some("PLANT".into()),
            special_area_flag: Some("N".into()),
            survival_status: Some("OK".into()),
            survival_checked: Some(at(1999, 9, 15)),
            strata: Some("S1".into()),
            reserved_timber_stand_flag: Some("N".into()),
            sold_flag: Some("N".into()),
            old_oid: Some("8001001001".into()),
            gng_idx_import_flag: Some("Y".into()),
            decremented_from_ss_flag: Some("N".into()),
            slope: Some(Decimal::new(125, 1)),
            aspect: Some(Decimal::new(180, 0)),
            elevation: Some(Decimal::new(31250, 2)),
            edx_in_progress_flag: None,
        }
    }

    fn sample_stand() -> Stand {
        Stand {
            stand_oid: "9001001002".into(),
            od_object_type: "STAND".into(),
            stand_parts: vec![
                StandPart {
                    stand_part_oid: "9101001002".into(),
                    stand_oid: "9001001002".into(),
                    stand_pnt_part_oid: None,
                    od_part_type: "STPRT".into(),
                    rte_scenario_oid: Some("RTE0000001".into()),
                    effective_date: at(2019, 4, 1),
                    expiry_date: Some(at(2030, 12, 31)),
                    stand_attributes: vec![full_attributes("9101001002")],
                },
                StandPart {
                    stand_part_oid: "9101001003".into(),
                    stand_oid: "9001001002".into(),
                    stand_pnt_part_oid: Some("9101001002".into()),
                    od_part_type: "STPRT".into(),
                    rte_scenario_oid: None,
                    effective_date: at(2021, 1, 1),
                    expiry_date: None,
                    stand_attributes: vec![],
                },
            ],
        }
    }

    // ── Round trip ───────────────────────────────────────────────

    #[test]
    fn stand_round_trips_through_schema() {
        let stand = sample_stand();
        assert_eq!(Stand::from(StandSchema::from(stand.clone())), stand);
    }

    #[test]
    fn part_round_trip_keeps_absent_optionals_absent() {
        let part = sample_stand().stand_parts.remove(1);
        let back = StandPart::from(StandPartSchema::from(part.clone()));
        assert_eq!(back, part);
        assert_eq!(back.expiry_date, None);
        assert_eq!(back.rte_scenario_oid, None);
    }

    #[test]
    fn attributes_round_trip_all_present_and_all_absent() {
        let full = full_attributes("P1");
        assert_eq!(
            StandAttributes::from(StandAttributesSchema::from(full.clone())),
            full
        );

        let empty = StandAttributes::for_part("P1");
        assert_eq!(
            StandAttributes::from(StandAttributesSchema::from(empty.clone())),
            empty
        );
    }

    #[test]
    fn schema_preserves_child_order() {
        let schema = StandSchema::from(sample_stand());
        let oids: Vec<_> = schema
            .stand_parts
            .iter()
            .map(|p| p.stand_part_oid.as_str())
            .collect();
        assert_eq!(oids, ["9101001002", "9101001003"]);
    }

    // ── JSON shape ───────────────────────────────────────────────

    #[test]
    fn stand_without_parts_serializes_empty_list() {
        let schema = StandSchema::from(Stand::new("9001001001", "STAND"));
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            json!({
                "stand_oid": "9001001001",
                "od_object_type": "STAND",
                "stand_parts": []
            })
        );
    }

    #[test]
    fn part_json_uses_iso_timestamps_and_nulls() {
        let schema = StandSchema::from(sample_stand());
        let value = serde_json::to_value(&schema).unwrap();
        let second = &value["stand_parts"][1];
        assert_eq!(second["effective_date"], json!("2021-01-01T00:00:00"));
        assert_eq!(second["expiry_date"], json!(null));
        assert_eq!(second["stand_pnt_part_oid"], json!("9101001002"));
        assert_eq!(second["stand_attributes"], json!([]));
    }

    #[test]
    fn attributes_json_renders_decimals_as_numbers() {
        let schema = StandAttributesSchema::from(full_attributes("P1"));
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["slope"], json!(12.5));
        assert_eq!(value["elevation"], json!(312.5));
        assert_eq!(value["site_index"], json!(65));
        assert_eq!(value["edx_in_progress_flag"], json!(null));
        assert_eq!(value.as_object().unwrap().len(), 35);
    }

    #[test]
    fn decoding_defaults_missing_optionals_and_children() {
        let schema: StandSchema = serde_json::from_value(json!({
            "stand_oid": "S1",
            "od_object_type": "STAND",
            "stand_parts": [{
                "stand_oid": "S1",
                "stand_part_oid": "P1",
                "od_part_type": "STPRT",
                "effective_date": "2020-01-01T00:00:00",
                "stand_attributes": [{ "stand_part_oid": "P1", "species": "LOB" }]
            }]
        }))
        .unwrap();

        let part = &schema.stand_parts[0];
        assert_eq!(part.expiry_date, None);
        assert_eq!(part.stand_pnt_part_oid, None);
        let attrs = &part.stand_attributes[0];
        assert_eq!(attrs.species.as_deref(), Some("LOB"));
        assert_eq!(attrs.slope, None);
    }

    #[test]
    fn decoding_rejects_part_without_effective_date() {
        let result: Result<StandSchema, _> = serde_json::from_value(json!({
            "stand_oid": "S1",
            "od_object_type": "STAND",
            "stand_parts": [{
                "stand_oid": "S1",
                "stand_part_oid": "P1",
                "od_part_type": "STPRT"
            }]
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("effective_date"), "unexpected error: {err}");
    }

    #[test]
    fn decoding_rejects_stand_without_object_type() {
        let result: Result<StandSchema, _> =
            serde_json::from_value(json!({ "stand_oid": "S1" }));
        assert!(result.is_err());
    }
}
