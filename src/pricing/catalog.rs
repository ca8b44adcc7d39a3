//! Static service catalog.
//!
//! Every service carries its [`ServiceCategory`] and [`ServiceCategoryTag`]
//! from the moment it is listed here. Nothing downstream looks at titles to
//! decide how a service is priced.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::calculators::STAIRCASE_HOURLY_RATE;
use super::models::{JobRequest, ServiceCategory, ServiceCategoryTag};

/// Currency all catalog prices are quoted in.
pub const CURRENCY: &str = "SEK";

/// Unit a service's price applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceUnit {
    #[serde(rename = "m2")]
    SquareMetre,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "st")]
    Item,
    #[serde(rename = "h")]
    Hour,
}

/// A bookable service as presented on the site.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogService {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ServiceCategory,
    pub tag: ServiceCategoryTag,
    pub unit: ServiceUnit,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_unit: Decimal,
}

impl CatalogService {
    pub fn capacity_per_worker_hour(&self) -> Decimal {
        self.tag.capacity_per_worker_hour()
    }

    /// Build an estimation request for `quantity` units of this service.
    pub fn job_request(&self, quantity: Decimal, worker_count: i32) -> JobRequest {
        JobRequest {
            service_category: self.category,
            quantity,
            worker_count,
            capacity_per_worker_hour: self.capacity_per_worker_hour(),
            price_per_unit: self.price_per_unit,
        }
    }
}

static CATALOG: [CatalogService; 7] = [
    CatalogService {
        slug: "kontorsstadning",
        title: "Kontorsstädning",
        description: "Regular cleaning of offices and shared workspaces.",
        category: ServiceCategory::GeneralArea,
        tag: ServiceCategoryTag::Generic,
        unit: ServiceUnit::SquareMetre,
        price_per_unit: dec!(25),
    },
    CatalogService {
        slug: "golvvard",
        title: "Golvvård",
        description: "Stripping, polishing and sealing of hard floors.",
        category: ServiceCategory::GeneralArea,
        tag: ServiceCategoryTag::FloorCare,
        unit: ServiceUnit::SquareMetre,
        price_per_unit: dec!(35),
    },
    CatalogService {
        slug: "fonsterputs",
        title: "Fönsterputs",
        description: "Inside and outside window cleaning, frames included.",
        category: ServiceCategory::GeneralArea,
        tag: ServiceCategoryTag::Window,
        unit: ServiceUnit::SquareMetre,
        price_per_unit: dec!(30),
    },
    CatalogService {
        slug: "trappstadning",
        title: "Trappstädning",
        description: "Stairwell cleaning for residential and commercial buildings.",
        category: ServiceCategory::Staircase,
        tag: ServiceCategoryTag::Staircase,
        unit: ServiceUnit::Hour,
        price_per_unit: STAIRCASE_HOURLY_RATE,
    },
    CatalogService {
        slug: "mobeltvatt",
        title: "Möbeltvätt",
        description: "Deep cleaning of upholstered chairs and sofas.",
        category: ServiceCategory::FixedPriceCatalog,
        tag: ServiceCategoryTag::Furniture,
        unit: ServiceUnit::Item,
        price_per_unit: dec!(450),
    },
    CatalogService {
        slug: "mattvatt",
        title: "Mattvätt",
        description: "Pickup, washing and delivery of entrance mats and rugs.",
        category: ServiceCategory::FixedPriceCatalog,
        tag: ServiceCategoryTag::Generic,
        unit: ServiceUnit::Item,
        price_per_unit: dec!(250),
    },
    CatalogService {
        slug: "arbetsklader",
        title: "Tvätt av arbetskläder",
        description: "Weekly laundry of workwear and textiles, priced by weight.",
        category: ServiceCategory::LaundryByWeight,
        tag: ServiceCategoryTag::Generic,
        unit: ServiceUnit::Kilogram,
        price_per_unit: dec!(45),
    },
];

/// All services in display order.
pub fn catalog() -> &'static [CatalogService] {
    &CATALOG
}

pub fn find_service(slug: &str) -> Option<&'static CatalogService> {
    CATALOG.iter().find(|service| service.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = catalog().iter().map(|s| s.slug).collect();
        assert_eq!(slugs.len(), catalog().len());
    }

    #[test]
    fn test_find_service() {
        let service = find_service("fonsterputs").unwrap();
        assert_eq!(service.tag, ServiceCategoryTag::Window);
        assert_eq!(service.capacity_per_worker_hour(), dec!(40));
        assert!(find_service("Fönsterputs").is_none());
        assert!(find_service("").is_none());
    }

    #[test]
    fn test_every_category_is_offered() {
        for category in [
            ServiceCategory::GeneralArea,
            ServiceCategory::Staircase,
            ServiceCategory::LaundryByWeight,
            ServiceCategory::FixedPriceCatalog,
        ] {
            assert!(catalog().iter().any(|s| s.category == category), "{category:?}");
        }
    }

    #[test]
    fn test_job_request_uses_tag_capacity() {
        let request = find_service("golvvard").unwrap().job_request(dec!(120), 2);
        assert_eq!(request.capacity_per_worker_hour, dec!(60));
        assert_eq!(request.price_per_unit, dec!(35));
        assert_eq!(request.worker_count, 2);
        assert_eq!(request.service_category, ServiceCategory::GeneralArea);
    }
}
