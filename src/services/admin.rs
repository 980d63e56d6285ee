use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::ListRequest;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{PendingCompany, Personnel, PersonnelStatus, RegistrationStatus};
use crate::repositories::Repository;
use crate::resource::aggregates::count_where;

/// Cards on the admin page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSummary {
    pub pending_companies: usize,
    pub total_personnel: usize,
    pub active_personnel: usize,
}

/// Company registrations awaiting a decision, and the personnel roster.
#[derive(Clone)]
pub struct AdminService {
    companies: Arc<dyn Repository<PendingCompany>>,
    personnel: Arc<dyn Repository<Personnel>>,
    event_sender: EventSender,
}

impl AdminService {
    pub fn new(
        companies: Arc<dyn Repository<PendingCompany>>,
        personnel: Arc<dyn Repository<Personnel>>,
        event_sender: EventSender,
    ) -> Self {
        Self {
            companies,
            personnel,
            event_sender,
        }
    }

    /// Every registration, decided or not.
    pub async fn companies(&self) -> Result<Vec<PendingCompany>, ServiceError> {
        self.companies.list().await
    }

    #[instrument(skip(self))]
    pub async fn pending(&self) -> Result<Vec<PendingCompany>, ServiceError> {
        let companies = self.companies.list().await?;
        Ok(companies.into_iter().filter(PendingCompany::is_pending).collect())
    }

    #[instrument(skip(self))]
    pub async fn approve(&self, id: u32) -> Result<PendingCompany, ServiceError> {
        let company = self.decide(id, RegistrationStatus::Approved).await?;
        if let Err(e) = self
            .event_sender
            .send(Event::CompanyApproved {
                company_id: company.id,
                name: company.name.clone(),
            })
            .await
        {
            warn!(error = %e, company_id = company.id, "Failed to send company approved event");
        }
        Ok(company)
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, id: u32) -> Result<PendingCompany, ServiceError> {
        let company = self.decide(id, RegistrationStatus::Rejected).await?;
        if let Err(e) = self
            .event_sender
            .send(Event::CompanyRejected {
                company_id: company.id,
                name: company.name.clone(),
            })
            .await
        {
            warn!(error = %e, company_id = company.id, "Failed to send company rejected event");
        }
        Ok(company)
    }

    async fn decide(
        &self,
        id: u32,
        status: RegistrationStatus,
    ) -> Result<PendingCompany, ServiceError> {
        let company = self
            .companies
            .get_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Company", id))?;

        if !company.is_pending() {
            return Err(ServiceError::InvalidOperation(format!(
                "{} registration is already {}",
                company.name, company.status
            )));
        }

        let decided = self.companies.update(company.decided(status)).await?;
        info!(company_id = id, name = %decided.name, status = %status, "registration decided");
        Ok(decided)
    }

    #[instrument(skip(self))]
    pub async fn personnel(&self, request: &ListRequest) -> Result<Vec<Personnel>, ServiceError> {
        let filter = request.to_filter()?;
        self.personnel.list_filtered(&filter).await
    }

    pub async fn summary(&self) -> Result<AdminSummary, ServiceError> {
        let companies = self.companies.list().await?;
        let personnel = self.personnel.list().await?;
        Ok(AdminSummary {
            pending_companies: count_where(&companies, PendingCompany::is_pending),
            total_personnel: personnel.len(),
            active_personnel: count_where(&personnel, |p| p.status == PersonnelStatus::Active),
        })
    }
}
