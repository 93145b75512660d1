//! Seed Catalog

use thiserror::Error;

use crate::offers::Offer;

const SEED_CATALOG_YAML: &str = include_str!("../fixtures/offers.yml");

/// Seed catalog errors.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The embedded catalog could not be parsed.
    #[error("failed to parse seed catalog: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// The built-in offers used to initialise an empty offers collection.
///
/// # Errors
///
/// Returns an error if the embedded catalog is not valid YAML for [`Offer`].
pub fn seed_catalog() -> Result<Vec<Offer>, SeedError> {
    Ok(serde_norway::from_str(SEED_CATALOG_YAML)?)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::offers::Category;

    use super::*;

    #[test]
    fn seed_catalog_has_four_offers() -> TestResult {
        let offers = seed_catalog()?;

        let prices: Vec<u64> = offers.iter().map(|o| o.price).collect();

        assert_eq!(prices, [1200, 2500, 900, 450]);

        Ok(())
    }

    #[test]
    fn seed_catalog_covers_every_category() -> TestResult {
        let offers = seed_catalog()?;

        for category in Category::ALL {
            assert!(
                offers.iter().any(|o| o.category == category),
                "missing {category} offer"
            );
        }

        Ok(())
    }

    #[test]
    fn seed_ids_are_unique() -> TestResult {
        let offers = seed_catalog()?;
        let mut ids: Vec<&str> = offers.iter().map(|o| o.id.as_str()).collect();

        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), offers.len());

        Ok(())
    }
}
