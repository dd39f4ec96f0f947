//! Vehicle listing entity.

use crate::domain::pricing::{Offer, RateSchedule};

/// A vehicle listed on the marketplace.
///
/// `images` and `features` are already normalised to plain lists; the
/// backend's loosely typed encodings are resolved once when the record is
/// parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub offer: Offer,
    pub images: Vec<String>,
    pub features: Vec<String>,
}

impl Vehicle {
    /// Creates a new Vehicle instance.
    pub fn new(
        id: String,
        name: String,
        offer: Offer,
        images: Vec<String>,
        features: Vec<String>,
    ) -> Self {
        Self {
            id,
            name,
            offer,
            images,
            features,
        }
    }

    /// Rates for rental listings, `None` for sale listings.
    pub fn rate_schedule(&self) -> Option<&RateSchedule> {
        match &self.offer {
            Offer::Rental { rates } => Some(rates),
            Offer::Sale { .. } => None,
        }
    }
}
