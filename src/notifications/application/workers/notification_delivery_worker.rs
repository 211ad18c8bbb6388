use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    iam_integration::{
        domain::model::{
            enums::principal_role::PrincipalRole, value_objects::principal_id::PrincipalId,
        },
        infrastructure::persistence::repositories::principal_directory_repository::PrincipalDirectoryRepository,
    },
    notifications::{
        domain::{
            model::{
                events::workflow_outcome::WorkflowOutcome,
                value_objects::notification_intent::NotificationIntent,
            },
            services::notification_dispatcher::NotificationDispatcher,
        },
        infrastructure::persistence::repositories::notification_delivery_repository::NotificationDeliveryRepository,
    },
    shared::{
        application::retry_policy::RetryPolicy,
        domain::model::enums::workflow_domain_error::WorkflowDomainError,
    },
};

/// Drains queued outcomes in FIFO order. Each outcome is expanded into
/// intents, then every intent is retried under the policy and finally logged
/// and dropped.
pub struct NotificationDeliveryWorker {
    receiver: mpsc::Receiver<WorkflowOutcome>,
    directory_repository: Arc<dyn PrincipalDirectoryRepository>,
    delivery_repository: Arc<dyn NotificationDeliveryRepository>,
    retry_policy: RetryPolicy,
}

impl NotificationDeliveryWorker {
    pub fn new(
        receiver: mpsc::Receiver<WorkflowOutcome>,
        directory_repository: Arc<dyn PrincipalDirectoryRepository>,
        delivery_repository: Arc<dyn NotificationDeliveryRepository>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            receiver,
            directory_repository,
            delivery_repository,
            retry_policy,
        }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    pub async fn run(mut self) {
        while let Some(outcome) = self.receiver.recv().await {
            self.process(&outcome).await;
        }
        tracing::info!("notification outbox closed, delivery worker stopping");
    }

    /// Returns how many intents were delivered.
    pub async fn process(&self, outcome: &WorkflowOutcome) -> usize {
        let finance_recipients = if outcome.notifies_finance() {
            match self.finance_recipients().await {
                Ok(recipients) => recipients,
                Err(error) => {
                    tracing::warn!(
                        event_id = %outcome.subject().event_id,
                        template = %outcome.template_key(),
                        error = %error,
                        "could not resolve finance recipients, dropping outcome"
                    );
                    return 0;
                }
            }
        } else {
            Vec::new()
        };

        let mut delivered = 0;
        for intent in NotificationDispatcher::dispatch(outcome, &finance_recipients) {
            if self.deliver(&intent).await {
                delivered += 1;
            }
        }
        delivered
    }

    pub async fn deliver(&self, intent: &NotificationIntent) -> bool {
        let result = self
            .retry_policy
            .run("notification_delivery.deliver", || {
                self.delivery_repository.deliver(intent)
            })
            .await;

        match result {
            Ok(()) => {
                tracing::debug!(
                    notification_id = %intent.id(),
                    recipient_id = %intent.recipient_id(),
                    template = %intent.template_key(),
                    "notification delivered"
                );
                true
            }
            Err(error) => {
                tracing::error!(
                    notification_id = %intent.id(),
                    recipient_id = %intent.recipient_id(),
                    template = %intent.template_key(),
                    attempts = self.retry_policy.max_attempts(),
                    error = %error,
                    "giving up on notification delivery"
                );
                false
            }
        }
    }

    async fn finance_recipients(&self) -> Result<Vec<PrincipalId>, WorkflowDomainError> {
        let entries = self
            .retry_policy
            .run("principal_directory.find_active_by_role", || {
                self.directory_repository
                    .find_active_by_role(PrincipalRole::FinanceTeam)
            })
            .await?;

        Ok(entries.into_iter().map(|e| e.principal.id()).collect())
    }
}
