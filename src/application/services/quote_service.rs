//! Rental and sale quotes.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;

use crate::application::services::AvailabilityService;
use crate::domain::availability::Availability;
use crate::domain::clock::Clock;
use crate::domain::date_range::DateRange;
use crate::domain::pricing::{CostBreakdown, Offer, RateSchedule, cost_breakdown, sale_cost};
use crate::domain::repositories::VehicleRepository;
use crate::domain::validation::DateRangeValidator;
use crate::error::AppError;

/// A priced offer for one vehicle.
#[derive(Debug, Clone, PartialEq)]
pub enum Quote {
    Rental {
        vehicle_id: String,
        range: DateRange,
        breakdown: CostBreakdown,
        availability: Availability,
    },
    Sale {
        vehicle_id: String,
        total: f64,
    },
}

impl Quote {
    pub fn total(&self) -> f64 {
        match self {
            Quote::Rental { breakdown, .. } => breakdown.total,
            Quote::Sale { total, .. } => *total,
        }
    }
}

/// Service pricing booking requests.
///
/// Rental quotes validate the requested dates against "today" from the
/// injected [`Clock`], check them against existing bookings and price them
/// with the daily/weekly rules. Sale quotes return the flat sale price and
/// ignore dates entirely.
pub struct QuoteService<R: VehicleRepository> {
    repository: Arc<R>,
    availability: Arc<AvailabilityService<R>>,
    clock: Arc<dyn Clock>,
}

impl<R: VehicleRepository> QuoteService<R> {
    /// Creates a new quote service.
    pub fn new(
        repository: Arc<R>,
        availability: Arc<AvailabilityService<R>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            availability,
            clock,
        }
    }

    /// The validator applied to every requested range.
    pub fn validator(&self) -> DateRangeValidator {
        DateRangeValidator::today(self.clock.as_ref())
    }

    /// Quotes a vehicle.
    ///
    /// # Arguments
    ///
    /// - `vehicle_id` - Backend identifier of the vehicle
    /// - `dates` - Requested `(start, end)`; required for rentals, ignored for sales
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the vehicle does not exist.
    ///
    /// Returns [`AppError::Validation`] if:
    /// - A rental is quoted without dates
    /// - The end date precedes the start date
    /// - The start date is before today
    ///
    /// Returns [`AppError::Upstream`] on backend failures.
    pub async fn quote(
        &self,
        vehicle_id: &str,
        dates: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Quote, AppError> {
        let vehicle = self
            .repository
            .find_vehicle(vehicle_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Vehicle not found", json!({ "vehicle_id": vehicle_id }))
            })?;

        let quote = match vehicle.offer {
            Offer::Sale { price } => Quote::Sale {
                vehicle_id: vehicle.id,
                total: sale_cost(price),
            },
            Offer::Rental { rates } => {
                let (start, end) = dates.ok_or_else(|| {
                    AppError::bad_request(
                        "start_date and end_date are required for rental quotes",
                        json!({ "vehicle_id": vehicle_id }),
                    )
                })?;

                let range = self.validator().validate(start, end)?;
                let availability = self.availability.check(&vehicle.id, &range).await?;
                let breakdown = cost_breakdown(&range, &rates);

                Quote::Rental {
                    vehicle_id: vehicle.id,
                    range,
                    breakdown,
                    availability,
                }
            }
        };

        let kind = match &quote {
            Quote::Rental { .. } => "rental",
            Quote::Sale { .. } => "sale",
        };
        metrics::counter!("quotes_total", "kind" => kind).increment(1);
        tracing::info!(vehicle_id, kind, total = quote.total(), "Quote issued");

        Ok(quote)
    }

    /// Prices a range under explicit rates without touching the backend.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the range is reversed or starts
    /// before today.
    pub fn price(
        &self,
        rates: &RateSchedule,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<(DateRange, CostBreakdown), AppError> {
        let range = self.validator().validate(start, end)?;
        Ok((range, cost_breakdown(&range, rates)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::availability::OccupiedRange;
    use crate::domain::clock::FixedClock;
    use crate::domain::entities::Vehicle;
    use crate::domain::pricing::Billing;
    use crate::domain::repositories::MockVehicleRepository;
    use crate::infrastructure::cache::NullCache;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rental_vehicle(id: &str, daily: f64, weekly: Option<f64>) -> Vehicle {
        Vehicle::new(
            id.to_string(),
            "Test car".to_string(),
            Offer::Rental {
                rates: RateSchedule::new(daily, weekly),
            },
            Vec::new(),
            Vec::new(),
        )
    }

    fn build_service(mock_repo: MockVehicleRepository) -> QuoteService<MockVehicleRepository> {
        let repo = Arc::new(mock_repo);
        let availability = Arc::new(AvailabilityService::new(
            repo.clone(),
            Arc::new(NullCache::new()),
        ));
        QuoteService::new(
            repo,
            availability,
            Arc::new(FixedClock::new(date(2025, 1, 1))),
        )
    }

    #[tokio::test]
    async fn test_rental_quote_one_week() {
        let mut mock_repo = MockVehicleRepository::new();
        mock_repo
            .expect_find_vehicle()
            .withf(|id| id == "v1")
            .times(1)
            .returning(|id| Ok(Some(rental_vehicle(id, 100.0, Some(600.0)))));
        mock_repo
            .expect_occupied_ranges()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = build_service(mock_repo);

        let quote = service
            .quote("v1", Some((date(2025, 1, 1), date(2025, 1, 8))))
            .await
            .unwrap();

        match quote {
            Quote::Rental {
                breakdown,
                availability,
                ..
            } => {
                assert_eq!(breakdown.days, 7);
                assert_eq!(breakdown.billing, Billing::Weekly);
                assert_eq!(breakdown.total, 600.0);
                assert!(availability.available);
            }
            other => panic!("expected rental quote, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rental_quote_without_weekly_rate() {
        let mut mock_repo = MockVehicleRepository::new();
        mock_repo
            .expect_find_vehicle()
            .returning(|id| Ok(Some(rental_vehicle(id, 80.0, None))));
        mock_repo
            .expect_occupied_ranges()
            .returning(|_| Ok(Vec::new()));

        let service = build_service(mock_repo);

        let quote = service
            .quote("v1", Some((date(2025, 1, 1), date(2025, 1, 10))))
            .await
            .unwrap();

        assert_eq!(quote.total(), 720.0);
    }

    #[tokio::test]
    async fn test_rental_quote_reports_conflicts() {
        let mut mock_repo = MockVehicleRepository::new();
        mock_repo
            .expect_find_vehicle()
            .returning(|id| Ok(Some(rental_vehicle(id, 50.0, Some(300.0)))));
        mock_repo.expect_occupied_ranges().returning(|_| {
            Ok(vec![OccupiedRange::new(
                "b9",
                date(2025, 3, 15),
                date(2025, 3, 20),
            )])
        });

        let service = build_service(mock_repo);

        let quote = service
            .quote("v1", Some((date(2025, 3, 10), date(2025, 3, 15))))
            .await
            .unwrap();

        match quote {
            Quote::Rental { availability, breakdown, .. } => {
                assert!(!availability.available);
                assert_eq!(availability.conflicts[0].id, "b9");
                assert_eq!(breakdown.total, 250.0);
            }
            other => panic!("expected rental quote, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sale_quote_ignores_dates() {
        let mut mock_repo = MockVehicleRepository::new();
        mock_repo.expect_find_vehicle().returning(|id| {
            Ok(Some(Vehicle::new(
                id.to_string(),
                "Mazda 3".to_string(),
                Offer::Sale { price: 14_900.0 },
                Vec::new(),
                Vec::new(),
            )))
        });
        mock_repo.expect_occupied_ranges().times(0);

        let service = build_service(mock_repo);

        let quote = service
            .quote("v2", Some((date(2024, 1, 5), date(2024, 1, 1))))
            .await
            .unwrap();

        assert_eq!(
            quote,
            Quote::Sale {
                vehicle_id: "v2".to_string(),
                total: 14_900.0
            }
        );
    }

    #[tokio::test]
    async fn test_rental_quote_requires_dates() {
        let mut mock_repo = MockVehicleRepository::new();
        mock_repo
            .expect_find_vehicle()
            .returning(|id| Ok(Some(rental_vehicle(id, 50.0, None))));

        let service = build_service(mock_repo);

        let result = service.quote("v1", None).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_reversed_dates_are_rejected() {
        let mut mock_repo = MockVehicleRepository::new();
        mock_repo
            .expect_find_vehicle()
            .returning(|id| Ok(Some(rental_vehicle(id, 50.0, None))));
        mock_repo.expect_occupied_ranges().times(0);

        let service = build_service(mock_repo);

        let err = service
            .quote("v1", Some((date(2025, 1, 5), date(2025, 1, 1))))
            .await
            .unwrap_err();

        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(details["reason"], "invalid_order")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_past_start_is_rejected() {
        let mut mock_repo = MockVehicleRepository::new();
        mock_repo
            .expect_find_vehicle()
            .returning(|id| Ok(Some(rental_vehicle(id, 50.0, None))));

        let service = build_service(mock_repo);

        let err = service
            .quote("v1", Some((date(2024, 12, 31), date(2025, 1, 2))))
            .await
            .unwrap_err();

        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(details["reason"], "before_minimum")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_vehicle() {
        let mut mock_repo = MockVehicleRepository::new();
        mock_repo.expect_find_vehicle().returning(|_| Ok(None));

        let service = build_service(mock_repo);

        let result = service.quote("nope", None).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[test]
    fn test_price_without_backend() {
        let service = build_service(MockVehicleRepository::new());

        let (range, breakdown) = service
            .price(
                &RateSchedule::new(50.0, Some(300.0)),
                date(2025, 1, 1),
                date(2025, 1, 11),
            )
            .unwrap();

        assert_eq!(range.days(), 10);
        assert_eq!(breakdown.total, 450.0);
    }
}
