//! Campground listing use cases

use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::{info, warn};

use crate::{
    application::{ApplicationResult, payloads::CampgroundPayload},
    domain::{
        DomainError,
        entities::Campground,
        ports::{CampgroundDetail, CampgroundRepository},
        services::ValidationService,
        value_objects::{CampgroundId, Schema},
    },
};

/// Orchestrates listing workflows over the storage port.
///
/// Identifier strings from the request path are parsed here; a string
/// that is not an id at all gets the same treatment as an id that
/// matches nothing.
#[derive(Clone)]
pub struct CampgroundService {
    repository: Arc<dyn CampgroundRepository>,
    validator: ValidationService,
}

impl CampgroundService {
    /// Create the service over an injected storage port
    pub fn new(repository: Arc<dyn CampgroundRepository>) -> Self {
        Self {
            repository,
            validator: ValidationService::new(),
        }
    }

    /// All listings for the index page
    pub async fn list(&self) -> ApplicationResult<Vec<Campground>> {
        Ok(self.repository.list_all().await?)
    }

    /// Validate a creation payload and persist the listing
    pub async fn create(&self, body: &JsonValue) -> ApplicationResult<Campground> {
        self.validator
            .validate(body, Schema::campground())
            .map_err(DomainError::Validation)?;
        let attrs = CampgroundPayload::decode(body)?.into_attrs()?;

        let campground = self.repository.create(attrs).await?;
        info!(id = %campground.id(), title = campground.title(), "campground created");
        Ok(campground)
    }

    /// Listing with eagerly loaded reviews for the show page.
    ///
    /// `None` covers both the absent and the malformed id.
    pub async fn get_detail(&self, id: &str) -> ApplicationResult<Option<CampgroundDetail>> {
        let Ok(parsed) = CampgroundId::from_string(id) else {
            return Ok(None);
        };
        Ok(self.repository.find_with_reviews(parsed).await?)
    }

    /// Bare listing for the edit form; `None` covers absent and malformed ids
    pub async fn get(&self, id: &str) -> ApplicationResult<Option<Campground>> {
        let Ok(parsed) = CampgroundId::from_string(id) else {
            return Ok(None);
        };
        Ok(self.repository.find(parsed).await?)
    }

    /// Validate an update payload and replace the editable fields.
    ///
    /// Validation runs before the id is even looked at, so a bad payload
    /// rejects regardless of the target. A miss returns `Ok(None)`; the
    /// HTTP layer still redirects as if the update happened, and the
    /// warning here is the only trace of the miss.
    pub async fn update(&self, id: &str, body: &JsonValue) -> ApplicationResult<Option<Campground>> {
        self.validator
            .validate(body, Schema::campground())
            .map_err(DomainError::Validation)?;
        let attrs = CampgroundPayload::decode(body)?.into_attrs()?;

        let Ok(parsed) = CampgroundId::from_string(id) else {
            warn!(id, "update targeted a malformed campground id");
            return Ok(None);
        };

        let updated = self.repository.update(parsed, attrs).await?;
        match &updated {
            Some(campground) => info!(id = %campground.id(), "campground updated"),
            None => warn!(%parsed, "update targeted a missing campground"),
        }
        Ok(updated)
    }

    /// Remove a listing; associated review records are left behind.
    ///
    /// Misses stay silent apart from the warning, matching the redirect
    /// behavior of the delete route.
    pub async fn delete(&self, id: &str) -> ApplicationResult<()> {
        let Ok(parsed) = CampgroundId::from_string(id) else {
            warn!(id, "delete targeted a malformed campground id");
            return Ok(());
        };

        if self.repository.delete(parsed).await? {
            info!(%parsed, "campground deleted");
        } else {
            warn!(%parsed, "delete targeted a missing campground");
        }
        Ok(())
    }
}
