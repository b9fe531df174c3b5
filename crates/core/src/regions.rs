//! Country to region lookup used for proximity scoring.
//!
//! The table only needs to cover the countries that appear in case datasets and typical
//! report parameters. Unknown countries simply earn no regional credit.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    LatinAmerica,
    WesternEurope,
    EasternEurope,
    MiddleEast,
    Africa,
    SouthAsia,
    EastAsia,
    SoutheastAsia,
    Oceania,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::LatinAmerica => "Latin America",
            Region::WesternEurope => "Western Europe",
            Region::EasternEurope => "Eastern Europe",
            Region::MiddleEast => "Middle East",
            Region::Africa => "Africa",
            Region::SouthAsia => "South Asia",
            Region::EastAsia => "East Asia",
            Region::SoutheastAsia => "Southeast Asia",
            Region::Oceania => "Oceania",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercased common English name of a country, with well-known aliases resolved.
///
/// Two spellings of the same country ("UAE", "United Arab Emirates") canonicalise identically.
/// Names outside the alias table are returned trimmed and lowercased.
pub fn canonical_country(country: &str) -> String {
    let key = country.trim().to_ascii_lowercase();
    let canonical = match key.as_str() {
        "usa" | "us" | "united states of america" => "united states",
        "uk" | "great britain" | "britain" => "united kingdom",
        "uae" | "emirates" => "united arab emirates",
        "viet nam" => "vietnam",
        "czechia" => "czech republic",
        "korea" | "republic of korea" => "south korea",
        "ivory coast" => "cote d'ivoire",
        "ksa" => "saudi arabia",
        _ => return key,
    };
    canonical.to_string()
}

/// Looks up the region of a country by common English name or alias, case-insensitively.
pub fn region_of(country: &str) -> Option<Region> {
    let key = canonical_country(country);
    let region = match key.as_str() {
        "united states" | "canada" | "mexico" => Region::NorthAmerica,
        "brazil" | "argentina" | "chile" | "colombia" | "peru" | "costa rica" | "panama"
        | "uruguay" | "ecuador" | "dominican republic" => Region::LatinAmerica,
        "united kingdom" | "ireland" | "france" | "germany" | "netherlands"
        | "belgium" | "spain" | "portugal" | "italy" | "switzerland" | "austria" | "sweden"
        | "norway" | "denmark" | "finland" => Region::WesternEurope,
        "poland" | "czech republic" | "hungary" | "romania" | "bulgaria"
        | "slovakia" | "estonia" | "latvia" | "lithuania" | "serbia" | "ukraine" => {
            Region::EasternEurope
        }
        "united arab emirates" | "saudi arabia" | "qatar" | "oman" | "bahrain"
        | "kuwait" | "jordan" | "israel" | "turkey" => Region::MiddleEast,
        "kenya" | "nigeria" | "ghana" | "rwanda" | "ethiopia" | "south africa" | "morocco"
        | "egypt" | "tanzania" | "uganda" | "senegal" | "cote d'ivoire" | "botswana" => {
            Region::Africa
        }
        "india" | "bangladesh" | "sri lanka" | "pakistan" | "nepal" => Region::SouthAsia,
        "china" | "japan" | "south korea" | "taiwan" | "hong kong" | "mongolia" => {
            Region::EastAsia
        }
        "singapore" | "malaysia" | "indonesia" | "thailand" | "vietnam" | "philippines" | "cambodia" | "myanmar" | "laos" => Region::SoutheastAsia,
        "australia" | "new zealand" | "fiji" | "papua new guinea" => Region::Oceania,
        _ => return None,
    };
    Some(region)
}
