//! Bundled reference data: US and Canadian cities with populations.
//!
//! Population figures are census estimates; they feed the heuristic
//! availability tiers and result ordering, nothing more precise.

use super::{City, Country, Province};

pub(super) const COUNTRIES: &[Country] = &[UNITED_STATES, CANADA];

pub const UNITED_STATES: Country = Country {
    code: "US",
    name: "United States",
    states: US_STATES,
    cities: US_CITIES,
};

pub const CANADA: Country = Country {
    code: "CA",
    name: "Canada",
    states: CA_PROVINCES,
    cities: CA_CITIES,
};

const US_STATES: &[Province] = &[
    Province { code: "AL", name: "Alabama" },
    Province { code: "AK", name: "Alaska" },
    Province { code: "AZ", name: "Arizona" },
    Province { code: "CA", name: "California" },
    Province { code: "CO", name: "Colorado" },
    Province { code: "FL", name: "Florida" },
    Province { code: "GA", name: "Georgia" },
    Province { code: "IL", name: "Illinois" },
    Province { code: "MA", name: "Massachusetts" },
    Province { code: "NV", name: "Nevada" },
    Province { code: "NY", name: "New York" },
    Province { code: "OH", name: "Ohio" },
    Province { code: "OR", name: "Oregon" },
    Province { code: "PA", name: "Pennsylvania" },
    Province { code: "TX", name: "Texas" },
    Province { code: "WA", name: "Washington" },
];

const US_CITIES: &[City] = &[
    City { name: "Birmingham", state: "Alabama", population: 200_733 },
    City { name: "Huntsville", state: "Alabama", population: 215_006 },
    City { name: "Mobile", state: "Alabama", population: 187_041 },
    City { name: "Montgomery", state: "Alabama", population: 200_603 },
    City { name: "Tuscaloosa", state: "Alabama", population: 101_129 },
    City { name: "Anchorage", state: "Alaska", population: 291_247 },
    City { name: "Fairbanks", state: "Alaska", population: 32_515 },
    City { name: "Juneau", state: "Alaska", population: 32_255 },
    City { name: "Phoenix", state: "Arizona", population: 1_680_992 },
    City { name: "Tucson", state: "Arizona", population: 548_073 },
    City { name: "Mesa", state: "Arizona", population: 518_012 },
    City { name: "Chandler", state: "Arizona", population: 261_165 },
    City { name: "Los Angeles", state: "California", population: 3_979_576 },
    City { name: "San Diego", state: "California", population: 1_423_851 },
    City { name: "San Jose", state: "California", population: 1_021_795 },
    City { name: "San Francisco", state: "California", population: 881_549 },
    City { name: "Fresno", state: "California", population: 531_576 },
    City { name: "Sacramento", state: "California", population: 513_624 },
    City { name: "Denver", state: "Colorado", population: 727_211 },
    City { name: "Colorado Springs", state: "Colorado", population: 478_221 },
    City { name: "Aurora", state: "Colorado", population: 379_289 },
    City { name: "Jacksonville", state: "Florida", population: 911_507 },
    City { name: "Miami", state: "Florida", population: 467_963 },
    City { name: "Tampa", state: "Florida", population: 399_700 },
    City { name: "Orlando", state: "Florida", population: 287_442 },
    City { name: "St. Petersburg", state: "Florida", population: 265_351 },
    City { name: "Atlanta", state: "Georgia", population: 506_811 },
    City { name: "Augusta", state: "Georgia", population: 197_888 },
    City { name: "Columbus", state: "Georgia", population: 195_769 },
    City { name: "Chicago", state: "Illinois", population: 2_671_635 },
    City { name: "Aurora", state: "Illinois", population: 197_757 },
    City { name: "Naperville", state: "Illinois", population: 148_449 },
    City { name: "Joliet", state: "Illinois", population: 147_344 },
    City { name: "Boston", state: "Massachusetts", population: 692_600 },
    City { name: "Worcester", state: "Massachusetts", population: 185_428 },
    City { name: "Springfield", state: "Massachusetts", population: 153_606 },
    City { name: "Las Vegas", state: "Nevada", population: 651_319 },
    City { name: "Henderson", state: "Nevada", population: 320_189 },
    City { name: "Reno", state: "Nevada", population: 255_601 },
    City { name: "New York", state: "New York", population: 8_336_817 },
    City { name: "Buffalo", state: "New York", population: 256_902 },
    City { name: "Rochester", state: "New York", population: 205_695 },
    City { name: "Yonkers", state: "New York", population: 200_370 },
    City { name: "Syracuse", state: "New York", population: 142_327 },
    City { name: "Columbus", state: "Ohio", population: 898_553 },
    City { name: "Cleveland", state: "Ohio", population: 381_009 },
    City { name: "Cincinnati", state: "Ohio", population: 303_940 },
    City { name: "Toledo", state: "Ohio", population: 272_779 },
    City { name: "Portland", state: "Oregon", population: 654_741 },
    City { name: "Salem", state: "Oregon", population: 174_365 },
    City { name: "Eugene", state: "Oregon", population: 172_622 },
    City { name: "Philadelphia", state: "Pennsylvania", population: 1_585_480 },
    City { name: "Pittsburgh", state: "Pennsylvania", population: 300_286 },
    City { name: "Allentown", state: "Pennsylvania", population: 121_442 },
    City { name: "Houston", state: "Texas", population: 2_320_268 },
    City { name: "San Antonio", state: "Texas", population: 1_547_253 },
    City { name: "Dallas", state: "Texas", population: 1_343_573 },
    City { name: "Austin", state: "Texas", population: 978_908 },
    City { name: "Fort Worth", state: "Texas", population: 909_585 },
    City { name: "El Paso", state: "Texas", population: 681_728 },
    City { name: "Seattle", state: "Washington", population: 753_675 },
    City { name: "Spokane", state: "Washington", population: 222_081 },
    City { name: "Tacoma", state: "Washington", population: 217_827 },
];

const CA_PROVINCES: &[Province] = &[
    Province { code: "AB", name: "Alberta" },
    Province { code: "BC", name: "British Columbia" },
    Province { code: "MB", name: "Manitoba" },
    Province { code: "NS", name: "Nova Scotia" },
    Province { code: "ON", name: "Ontario" },
    Province { code: "QC", name: "Quebec" },
    Province { code: "SK", name: "Saskatchewan" },
];

const CA_CITIES: &[City] = &[
    City { name: "Calgary", state: "Alberta", population: 1_336_000 },
    City { name: "Edmonton", state: "Alberta", population: 932_546 },
    City { name: "Red Deer", state: "Alberta", population: 100_418 },
    City { name: "Vancouver", state: "British Columbia", population: 675_218 },
    City { name: "Surrey", state: "British Columbia", population: 517_887 },
    City { name: "Burnaby", state: "British Columbia", population: 232_755 },
    City { name: "Victoria", state: "British Columbia", population: 85_792 },
    City { name: "Winnipeg", state: "Manitoba", population: 749_534 },
    City { name: "Brandon", state: "Manitoba", population: 48_859 },
    City { name: "Halifax", state: "Nova Scotia", population: 403_131 },
    City { name: "Toronto", state: "Ontario", population: 2_930_000 },
    City { name: "Ottawa", state: "Ontario", population: 994_837 },
    City { name: "Mississauga", state: "Ontario", population: 721_599 },
    City { name: "Hamilton", state: "Ontario", population: 569_353 },
    City { name: "London", state: "Ontario", population: 383_822 },
    City { name: "Montreal", state: "Quebec", population: 1_780_000 },
    City { name: "Quebec City", state: "Quebec", population: 531_902 },
    City { name: "Laval", state: "Quebec", population: 422_993 },
    City { name: "Gatineau", state: "Quebec", population: 276_245 },
    City { name: "Saskatoon", state: "Saskatchewan", population: 273_010 },
    City { name: "Regina", state: "Saskatchewan", population: 228_928 },
];
