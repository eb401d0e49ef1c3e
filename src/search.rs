//! Nearest sunny city search
//!
//! Ranks the catalog by distance from the zip code, then probes the cities
//! one at a time, nearest first, and stops at the first sunny one. A probe
//! that fails only skips that city. When nothing is sunny the nearest city
//! that could be checked is reported instead.

use tracing::{debug, info, instrument, warn};

use crate::catalog::ReferenceCity;
use crate::geo;
use crate::models::{Coordinate, ForecastDay, Location, WeatherObservation};
use crate::weather::WeatherGateway;
use crate::{Result, SunSeekerError};

/// Search radius around the zip code
pub const MAX_DISTANCE_MILES: f64 = 1000.0;

/// A catalog city with its distance from the search origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCity {
    pub city: ReferenceCity,
    pub distance_miles: f64,
}

/// The city reported back to the caller, with its weather
#[derive(Debug, Clone, PartialEq)]
pub struct CityReport {
    pub city: RankedCity,
    pub observation: WeatherObservation,
    /// Empty when the forecast could not be fetched
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The nearest city that is sunny
    Found(CityReport),
    /// No city was sunny; the nearest city that could be checked
    NotFound(CityReport),
}

impl SearchOutcome {
    #[must_use]
    pub fn report(&self) -> &CityReport {
        match self {
            Self::Found(report) | Self::NotFound(report) => report,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Everything a finished search produced
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// Where the zip code resolved to
    pub origin: Location,
    pub outcome: SearchOutcome,
    /// Probes that returned weather data
    pub cities_checked: usize,
}

/// Catalog entries within `max_distance_miles` of `origin`, nearest first.
///
/// The sort is stable, so equal distances keep catalog order.
#[must_use]
pub fn rank_cities(
    origin: Coordinate,
    catalog: &[ReferenceCity],
    max_distance_miles: f64,
) -> Vec<RankedCity> {
    let mut ranked: Vec<RankedCity> = catalog
        .iter()
        .map(|city| RankedCity {
            city: *city,
            distance_miles: geo::distance_miles(origin, city.coordinate),
        })
        .filter(|ranked| ranked.distance_miles <= max_distance_miles)
        .collect();

    ranked.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    ranked
}

/// City search service
pub struct CitySearchService;

impl CitySearchService {
    /// Find the nearest sunny city to `zip_code` whose high reaches `min_temp`
    #[instrument(skip(gateway, catalog))]
    pub async fn find_sunny_city(
        gateway: &dyn WeatherGateway,
        catalog: &[ReferenceCity],
        zip_code: &str,
        min_temp: f64,
    ) -> Result<SearchReport> {
        let origin = gateway.resolve_zip(zip_code).await?;

        let candidates = rank_cities(origin.coordinate, catalog, MAX_DISTANCE_MILES);
        if candidates.is_empty() {
            return Err(SunSeekerError::NoCitiesInRange);
        }
        debug!(
            "{} candidate cities within {} miles of {}",
            candidates.len(),
            MAX_DISTANCE_MILES,
            origin.name
        );

        let mut checked = Self::probe_nearest_first(gateway, &candidates, min_temp).await;
        let cities_checked = checked.len();
        let found = checked
            .last()
            .is_some_and(|(_, observation)| observation.is_sunny);

        // On a match the sunny city is the last one probed; otherwise fall
        // back to the first city that answered.
        let chosen = if found {
            checked.pop()
        } else {
            checked.into_iter().next()
        };
        let (city, observation) = chosen.ok_or(SunSeekerError::AllProbesFailed)?;

        let forecast = Self::forecast_or_empty(gateway, &city.city).await;
        let report = CityReport {
            city,
            observation,
            forecast,
        };

        if found {
            info!(
                "Found sunny city {} ({:.0} mi) after {} checks",
                report.city.city.name, report.city.distance_miles, cities_checked
            );
        } else {
            info!(
                "No sunny city near {}; closest checked is {} ({:.0} mi)",
                origin.name, report.city.city.name, report.city.distance_miles
            );
        }

        let outcome = if found {
            SearchOutcome::Found(report)
        } else {
            SearchOutcome::NotFound(report)
        };

        Ok(SearchReport {
            origin,
            outcome,
            cities_checked,
        })
    }

    /// Probe candidates in order until one is sunny.
    ///
    /// Returns every city that answered, in probe order. When a sunny city
    /// was found it is the last element.
    async fn probe_nearest_first(
        gateway: &dyn WeatherGateway,
        candidates: &[RankedCity],
        min_temp: f64,
    ) -> Vec<(RankedCity, WeatherObservation)> {
        let mut checked = Vec::new();

        for candidate in candidates {
            let Some(observation) = gateway.current_weather(&candidate.city, min_temp).await
            else {
                debug!("Skipping {}: no weather data", candidate.city.name);
                continue;
            };

            debug!(
                "{} ({:.0} mi): {} / {}, sunny: {}",
                candidate.city.name,
                candidate.distance_miles,
                observation.category,
                observation.description,
                observation.is_sunny
            );

            let sunny = observation.is_sunny;
            checked.push((*candidate, observation));
            if sunny {
                break;
            }
        }

        checked
    }

    async fn forecast_or_empty(gateway: &dyn WeatherGateway, city: &ReferenceCity) -> Vec<ForecastDay> {
        gateway.forecast(city).await.unwrap_or_else(|| {
            warn!("No forecast available for {}", city.name);
            Vec::new()
        })
    }
}
