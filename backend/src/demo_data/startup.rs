//! Startup seeding orchestration.

use std::sync::Arc;

use tracing::info;

use crate::demo_data::DemoDataSettings;
use crate::domain::ports::{AccountRepository, BookmarkRepository};
use crate::domain::{DemoDataOutcome, DemoDataSeeder, DemoDataSeedingError};

/// Seed the demo roster into the given stores when enabled.
///
/// Returns `None` when seeding is disabled.
///
/// # Errors
///
/// Any store failure is returned and should abort startup.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use bookmarks::demo_data::{DemoDataSettings, seed_demo_data_on_startup};
/// use bookmarks::outbound::memory::InMemoryStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryStore::new();
/// let outcome = seed_demo_data_on_startup(
///     &DemoDataSettings::default(),
///     Arc::new(store.accounts()),
///     Arc::new(store.bookmarks()),
/// )
/// .await
/// .expect("in-memory seeding succeeds");
/// assert_eq!(outcome.map(|o| o.bookmarks), Some(16));
/// # });
/// ```
pub async fn seed_demo_data_on_startup(
    settings: &DemoDataSettings,
    accounts: Arc<dyn AccountRepository>,
    bookmarks: Arc<dyn BookmarkRepository>,
) -> Result<Option<DemoDataOutcome>, DemoDataSeedingError> {
    if !settings.enabled() {
        info!(reason = "disabled", "demo data seeding skipped");
        return Ok(None);
    }

    let outcome = DemoDataSeeder::new(accounts, bookmarks).seed().await?;
    info!(
        accounts = outcome.accounts,
        bookmarks = outcome.bookmarks,
        "demo data seeded"
    );
    Ok(Some(outcome))
}
