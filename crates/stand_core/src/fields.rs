//! Field manifests for the stand entities.
//!
//! Each manifest is the single list of an entity's non-key fields. The
//! domain, schema and record layers all expand a manifest through a
//! callback macro to declare their struct and conversions, so a field added
//! here shows up in every layer (and in the SQL column lists) at once.
//!
//! Keys and back-references (`stand_part_oid`, `stand_oid`) are not part of
//! the manifests; each layer declares them explicitly because record
//! construction rewires them from the parent.
//!
//! ```ignore
//! macro_rules! declare {
//!     ($($field:ident : $ty:ty),* $(,)?) => {
//!         pub struct Example { $(pub $field: $ty,)* }
//!     };
//! }
//! stand_core::stand_part_fields!(declare);
//! ```

/// Invoke `$callback!` with the non-key fields of a stand part.
#[macro_export]
macro_rules! stand_part_fields {
    ($callback:ident) => {
        $callback! {
            stand_pnt_part_oid: Option<String>,
            od_part_type: String,
            rte_scenario_oid: Option<String>,
            effective_date: $crate::chrono::NaiveDateTime,
            expiry_date: Option<$crate::chrono::NaiveDateTime>,
        }
    };
}

/// Invoke `$callback!` with the descriptive fields of a stand attribute set.
///
/// Column widths in storage: codes are 1–25 chars, `old_id_*` 256,
/// `description` unbounded; `slope`/`aspect`/`elevation` are NUMERIC(18,5).
#[macro_export]
macro_rules! stand_attributes_fields {
    ($callback:ident) => {
        $callback! {
            effective_date: Option<$crate::chrono::NaiveDateTime>,
            relate: Option<String>,
            stand_number: Option<String>,
            status: Option<String>,
            timber_type: Option<String>,
            harvest_code: Option<String>,
            established_year: Option<String>,
            last_thinned_date: Option<$crate::chrono::NaiveDateTime>,
            last_thinned_year: Option<String>,
            first_thin_year: Option<String>,
            second_thin_year: Option<String>,
            third_thin_year: Option<String>,
            site_index: Option<i32>,
            source: Option<String>,
            old_id_1: Option<String>,
            old_id_2: Option<String>,
            ownership: Option<String>,
            description: Option<String>,
            species: Option<String>,
            co_dom_species: Option<String>,
            regeneration_type: Option<String>,
            special_area_flag: Option<String>,
            survival_status: Option<String>,
            survival_checked: Option<$crate::chrono::NaiveDateTime>,
            strata: Option<String>,
            reserved_timber_stand_flag: Option<String>,
            sold_flag: Option<String>,
            old_oid: Option<String>,
            gng_idx_import_flag: Option<String>,
            decremented_from_ss_flag: Option<String>,
            slope: Option<$crate::rust_decimal::Decimal>,
            aspect: Option<$crate::rust_decimal::Decimal>,
            elevation: Option<$crate::rust_decimal::Decimal>,
            edx_in_progress_flag: Option<String>,
        }
    };
}

/// Names of the manifest fields, in declaration order.
macro_rules! field_names {
    ($($field:ident : $ty:ty),* $(,)?) => {
        &[$(stringify!($field)),*]
    };
}

pub const STAND_PART_FIELDS: &[&str] = crate::stand_part_fields!(field_names);
pub const STAND_ATTRIBUTES_FIELDS: &[&str] = crate::stand_attributes_fields!(field_names);
