use super::store::{create_document, DocumentStore};
use crate::models::{Bundle, BundleItem};
use mongodb::bson::doc;
use service_core::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection already had records; nothing was written.
    AlreadySeeded { count: u64 },
    Seeded { count: u64 },
}

/// The catalog written by the first seed call.
pub fn default_bundles() -> Vec<Bundle> {
    vec![
        Bundle {
            name: "Essentials Bundle".to_string(),
            tagline: Some("Start strong with curated basics".to_string()),
            description: Some("Core pieces to kickstart your style.".to_string()),
            items: vec![
                BundleItem::new("Moniqué Tee", 1),
                BundleItem::new("Everyday Denim", 1),
            ],
            price: 129.0,
            highlight: true,
            image: Some("/images/essentials.jpg".to_string()),
        },
        Bundle {
            name: "Sport Selection".to_string(),
            tagline: Some("Move with intent".to_string()),
            description: Some("Performance-ready activewear for training and travel.".to_string()),
            items: vec![
                BundleItem::new("AeroFlex Leggings", 1),
                BundleItem::new("BreathLite Top", 1),
            ],
            price: 159.0,
            highlight: false,
            image: Some("/images/sport.jpg".to_string()),
        },
        Bundle {
            name: "Luxury Selection".to_string(),
            tagline: Some("Elevated materials. Effortless detail.".to_string()),
            description: Some("Premium pieces crafted for statement moments.".to_string()),
            items: vec![
                BundleItem::new("Cashmere Knit", 1),
                BundleItem::new("Silk Scarf", 1),
            ],
            price: 399.0,
            highlight: false,
            image: Some("/images/luxury.jpg".to_string()),
        },
    ]
}

/// Writes [`default_bundles`] when the bundle collection is empty.
///
/// Check-then-insert without locking: two concurrent first calls can both see
/// an empty collection and both insert.
pub async fn seed_bundles(store: &dyn DocumentStore) -> Result<SeedOutcome, AppError> {
    let existing = store.count_documents(Bundle::COLLECTION, doc! {}).await?;
    if existing > 0 {
        tracing::info!(count = existing, "Bundles already present; skipping seed");
        return Ok(SeedOutcome::AlreadySeeded { count: existing });
    }

    let bundles = default_bundles();
    for bundle in &bundles {
        create_document(store, Bundle::COLLECTION, bundle).await?;
    }

    tracing::info!(count = bundles.len(), "Seeded default bundles");
    Ok(SeedOutcome::Seeded {
        count: bundles.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MemoryStore, UnavailableReason, UnavailableStore};
    use validator::Validate;

    #[test]
    fn default_catalog_is_valid() {
        let bundles = default_bundles();
        assert_eq!(bundles.len(), 3);
        assert!(bundles.iter().all(|b| b.validate().is_ok()));
        let highlighted: Vec<&str> = bundles
            .iter()
            .filter(|b| b.highlight)
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(highlighted, ["Essentials Bundle"]);
    }

    #[tokio::test]
    async fn seeds_empty_store_once() {
        let store = MemoryStore::new();

        assert_eq!(
            seed_bundles(&store).await.unwrap(),
            SeedOutcome::Seeded { count: 3 }
        );
        assert_eq!(
            seed_bundles(&store).await.unwrap(),
            SeedOutcome::AlreadySeeded { count: 3 }
        );
        assert_eq!(
            store.count_documents(Bundle::COLLECTION, doc! {}).await.unwrap(),
            3
        );
    }

    #[tokio::test]
    async fn existing_records_block_seeding() {
        let store = MemoryStore::with_documents(
            Bundle::COLLECTION,
            vec![doc! { "name": "Custom", "price": 5.0 }],
        );

        assert_eq!(
            seed_bundles(&store).await.unwrap(),
            SeedOutcome::AlreadySeeded { count: 1 }
        );
    }

    #[tokio::test]
    async fn unavailable_store_cannot_be_seeded() {
        let store = UnavailableStore::new(UnavailableReason::NotConfigured);
        assert!(matches!(
            seed_bundles(&store).await,
            Err(AppError::ServiceUnavailable)
        ));
    }
}
