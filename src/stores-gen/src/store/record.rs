use chrono::NaiveDate;
use enum_iterator::all;
use enum_iterator::Sequence;
use rand::prelude::*;
use serde::Serialize;
use strum_macros::Display;

/// Output header, in column order. The serde renames on [`StoreRecord`]
/// must produce exactly these names.
pub const CSV_HEADER: [&str; 9] = [
    "StoreName",
    "StoreType",
    "StoreOpeningDate",
    "Address",
    "City",
    "State",
    "Country",
    "Region",
    "Manager Name",
];

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence, Serialize)]
pub enum StoreType {
    Exclusive,
    #[strum(serialize = "MBO")]
    #[serde(rename = "MBO")]
    Mbo,
    #[strum(serialize = "SMB")]
    #[serde(rename = "SMB")]
    Smb,
    #[strum(serialize = "Outlet Stores")]
    #[serde(rename = "Outlet Stores")]
    OutletStores,
}

impl StoreType {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let variants = all::<StoreType>().collect::<Vec<_>>();
        *variants.choose(rng).unwrap()
    }
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence, Serialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let variants = all::<Region>().collect::<Vec<_>>();
        *variants.choose(rng).unwrap()
    }
}

/// One synthetic store row. Created per iteration, serialized immediately,
/// never retained.
#[derive(Debug, Clone, Serialize)]
pub struct StoreRecord {
    #[serde(rename = "StoreName")]
    pub store_name: String,
    #[serde(rename = "StoreType")]
    pub store_type: StoreType,
    #[serde(rename = "StoreOpeningDate")]
    pub opening_date: NaiveDate,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Region")]
    pub region: Region,
    #[serde(rename = "Manager Name")]
    pub manager_name: String,
}

#[cfg(test)]
mod tests {
    use enum_iterator::all;

    use super::Region;
    use super::StoreType;

    #[test]
    fn test_store_type_labels() {
        let labels = all::<StoreType>()
            .map(|t| t.to_string())
            .collect::<Vec<_>>();

        assert_eq!(labels, vec!["Exclusive", "MBO", "SMB", "Outlet Stores"]);
    }

    #[test]
    fn test_region_labels() {
        let labels = all::<Region>().map(|r| r.to_string()).collect::<Vec<_>>();

        assert_eq!(labels, vec!["North", "South", "East", "West"]);
    }
}
