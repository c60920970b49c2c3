use std::io;

use chrono::Duration;
use chrono::NaiveDate;
use chrono::Utc;
use fake::faker::address::en::BuildingNumber;
use fake::faker::address::en::CityName;
use fake::faker::address::en::CountryName;
use fake::faker::address::en::SecondaryAddress;
use fake::faker::address::en::StateName;
use fake::faker::address::en::StreetName;
use fake::faker::address::en::StreetSuffix;
use fake::faker::address::en::ZipCode;
use fake::faker::name::en::FirstName;
use fake::Fake;
use rand::Rng;

use crate::error::Result;
use crate::store::dictionary::NameDictionary;
use crate::store::record::Region;
use crate::store::record::StoreRecord;
use crate::store::record::StoreType;
use crate::store::record::CSV_HEADER;

pub struct Config<R: Rng> {
    pub rng: R,
    pub dictionary: NameDictionary,
    pub rows: u64,
}

/// Drives the bounded generation loop: one record per iteration, serialized
/// straight through a csv writer.
pub struct Scenario<R: Rng> {
    rng: R,
    dictionary: NameDictionary,
    rows: u64,
}

impl<R: Rng> Scenario<R> {
    pub fn new(cfg: Config<R>) -> Self {
        Self {
            rng: cfg.rng,
            dictionary: cfg.dictionary,
            rows: cfg.rows,
        }
    }

    /// Writes the header and `rows` data rows, then flushes. Returns the
    /// number of data rows written.
    pub fn run<W: io::Write>(&mut self, wtr: W) -> Result<u64> {
        let mut wtr = csv::Writer::from_writer(wtr);

        // serialize() only emits the serde-derived header alongside the
        // first record, so the empty run writes it explicitly
        if self.rows == 0 {
            wtr.write_record(CSV_HEADER)?;
        }

        for _ in 0..self.rows {
            let record = self.next_record();
            wtr.serialize(record)?;
        }

        wtr.flush()?;

        Ok(self.rows)
    }

    fn next_record(&mut self) -> StoreRecord {
        let Self {
            rng, dictionary, ..
        } = self;

        StoreRecord {
            store_name: dictionary.sample_store_name(rng),
            store_type: StoreType::sample(rng),
            opening_date: random_opening_date(rng),
            address: single_line_address(rng),
            city: CityName().fake_with_rng::<String, _>(rng),
            state: StateName().fake_with_rng::<String, _>(rng),
            country: CountryName().fake_with_rng::<String, _>(rng),
            region: Region::sample(rng),
            manager_name: FirstName().fake_with_rng::<String, _>(rng),
        }
    }
}

/// Uniform date between 1970-01-01 and today.
fn random_opening_date<R: Rng>(rng: &mut R) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    let span = (Utc::now().date_naive() - start).num_days();

    start + Duration::days(rng.gen_range(0..=span))
}

/// Composes a plausible street address on a single line. Commas and
/// newlines are stripped so the field never breaks the 9-column row shape.
fn single_line_address<R: Rng>(rng: &mut R) -> String {
    let address = format!(
        "{} {} {} {} {} {}",
        BuildingNumber().fake_with_rng::<String, _>(rng),
        StreetName().fake_with_rng::<String, _>(rng),
        StreetSuffix().fake_with_rng::<String, _>(rng),
        SecondaryAddress().fake_with_rng::<String, _>(rng),
        CityName().fake_with_rng::<String, _>(rng),
        ZipCode().fake_with_rng::<String, _>(rng),
    );

    address.replace(['\n', ','], " ")
}
