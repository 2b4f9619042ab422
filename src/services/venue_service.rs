use std::collections::HashMap;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::database::models::{Facility, Sport, VenueSummary};
use crate::database::repositories::venue_repository::{self, NewVenue};
use crate::database::repositories::VenueRepository;
use crate::database::BaseRepository;
use crate::dto::{CreateFacilityDto, CreateVenueDto, UpdateFacilityDto};
use crate::error::ApiError;

use super::check_image_url;

pub struct VenueService {
    repo: VenueRepository,
}

impl VenueService {
    pub fn new(base: BaseRepository) -> Self {
        Self {
            repo: VenueRepository::new(base),
        }
    }

    pub async fn list(&self) -> Result<Vec<VenueSummary>, ApiError> {
        let venues = self.repo.list_active().await?;
        let ids: Vec<Uuid> = venues.iter().map(|v| v.id).collect();

        let mut sports_by_venue: HashMap<Uuid, Vec<Sport>> = HashMap::new();
        for (venue_id, sport) in self.repo.sports_for(&ids).await? {
            sports_by_venue.entry(venue_id).or_default().push(sport);
        }

        Ok(venues
            .into_iter()
            .map(|venue| {
                let sports = sports_by_venue.remove(&venue.id).unwrap_or_default();
                VenueSummary::new(venue, sports)
            })
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<VenueSummary, ApiError> {
        let venue = self
            .repo
            .find(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Venue not found"))?;

        let sports = self.repo.sports_for(&[id]).await?.into_iter().map(|(_, s)| s).collect();
        Ok(VenueSummary::new(venue, sports))
    }

    pub async fn facilities(&self, venue_id: Uuid) -> Result<Vec<Facility>, ApiError> {
        if self.repo.find(venue_id).await?.is_none() {
            return Err(ApiError::not_found("Venue not found"));
        }
        Ok(self.repo.facilities_for(venue_id).await?)
    }

    /// Venue row and its sport links are written together or not at all
    pub async fn create_venue(
        &self,
        admin_id: Uuid,
        dto: CreateVenueDto,
        storage: &StorageConfig,
    ) -> Result<VenueSummary, ApiError> {
        check_image_url(storage, "imageUrl", dto.image_url.as_deref())?;

        let new_venue = NewVenue {
            owner_id: dto.owner_id.unwrap_or(admin_id),
            name: dto.name,
            address: dto.address,
            city: dto.city,
            image_url: dto.image_url,
        };
        let sport_ids = dto.sport_ids;

        let summary = self
            .repo
            .base()
            .transaction(move |tx| {
                Box::pin(async move {
                    let venue = venue_repository::insert_venue(&mut **tx, &new_venue).await?;
                    let sports = venue_repository::link_sports(&mut **tx, venue.id, &sport_ids).await?;

                    if sports.is_empty() {
                        return Err(ApiError::invalid_field("sportIds", "none of the given sports exist"));
                    }
                    Ok::<_, ApiError>(VenueSummary::new(venue, sports))
                })
            })
            .await?;

        tracing::info!("Created venue {} ({})", summary.venue.name, summary.venue.id);
        Ok(summary)
    }

    pub async fn create_facility(&self, venue_id: Uuid, dto: CreateFacilityDto) -> Result<Facility, ApiError> {
        if self.repo.find(venue_id).await?.is_none() {
            return Err(ApiError::not_found("Venue not found"));
        }
        if !self.repo.offers_sport(venue_id, dto.sport_id).await? {
            return Err(ApiError::invalid_field("sportId", "venue does not offer this sport"));
        }

        let facility = self
            .repo
            .insert_facility(venue_id, dto.sport_id, &dto.name, dto.price_per_hour)
            .await?;

        tracing::info!("Created facility {} at venue {}", facility.id, venue_id);
        Ok(facility)
    }

    pub async fn update_facility(&self, id: Uuid, dto: UpdateFacilityDto) -> Result<Facility, ApiError> {
        if dto.is_empty() {
            return Err(ApiError::bad_request("Nothing to update"));
        }

        self.repo
            .update_facility(id, dto.name.as_deref(), dto.price_per_hour, dto.is_active)
            .await?
            .ok_or_else(|| ApiError::not_found("Facility not found"))
    }
}
