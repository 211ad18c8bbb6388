use std::sync::Arc;

use crate::notifications::{
    domain::model::events::workflow_outcome::WorkflowOutcome,
    infrastructure::outbox::notification_outbox::NotificationOutbox,
    interfaces::acl::notification_facade::NotificationFacade,
};

pub struct NotificationFacadeImpl {
    outbox: Arc<dyn NotificationOutbox>,
}

impl NotificationFacadeImpl {
    pub fn new(outbox: Arc<dyn NotificationOutbox>) -> Self {
        Self { outbox }
    }
}

impl NotificationFacade for NotificationFacadeImpl {
    fn publish(&self, outcome: WorkflowOutcome) {
        let event_id = outcome.subject().event_id;
        let template_key = outcome.template_key();

        if let Err(error) = self.outbox.enqueue(outcome) {
            tracing::warn!(
                event_id = %event_id,
                template = %template_key,
                error = %error,
                "dropping workflow outcome"
            );
        }
    }
}
